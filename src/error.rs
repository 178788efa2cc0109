use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("line {line}: cannot parse {text:?} as {expected}")]
    Parse { line: usize, text: String, expected: &'static str },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },
    #[error("no start marker 'S' in the grid")]
    MissingStart,
    #[error("need at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("polygon edge ({},{}) -> ({},{}) is not axis-aligned", .from.0, .from.1, .to.0, .to.1)]
    DiagonalEdge { from: (i64, i64), to: (i64, i64) },
    #[error("{0} does not fit in 64 bits")]
    Overflow(&'static str),
    #[error("input has no records")]
    EmptyInput,
    #[error("no solution for day {0}")]
    UnknownDay(u8),
    #[error("part must be 1 or 2, got {0}")]
    UnknownPart(u8),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, text: &str, expected: &'static str) -> Self {
        PuzzleError::Parse { line: line + 1, text: text.to_owned(), expected }
    }
}
