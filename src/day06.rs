//! A worksheet of arithmetic problems laid out side by side in columns.

use std::ops::RangeInclusive;

use itertools::{Itertools, MinMaxResult};

use crate::error::PuzzleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {Add, Mul}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {pub op: Op, pub numbers: Vec<u64>}

impl Problem {
    pub fn eval(&self) -> u64 {
        match self.op {
            Op::Add => self.numbers.iter().sum(),
            Op::Mul => self.numbers.iter().product(),
        }
    }
}

/// Rows are ragged on the right; missing cells read as spaces.
fn cell(row: &str, ci: usize) -> u8 {
    row.as_bytes().get(ci).copied().unwrap_or(b' ')
}

/// Column spans of the problems, split on columns that are blank in every row.
fn spans(rows: &[&str]) -> Vec<RangeInclusive<usize>> {
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let chunks = (0 .. width).chunk_by(|&ci| rows.iter().all(|row| cell(row, ci) == b' '));
    let spans = chunks.into_iter().filter(|(blank, _)| !blank).filter_map(|(_, cols)| match cols.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(ci) => Some(ci ..= ci),
        MinMaxResult::MinMax(lo, hi) => Some(lo ..= hi),
    }).collect();
    spans
}

/// Part 1 reads numbers along the rows, part 2 down the columns right to left.
pub fn parse(part: u8, input: &str) -> Result<Vec<Problem>, PuzzleError> {
    let mut rows = input.lines().collect::<Vec<_>>();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {rows.pop();}
    let Some((&ops, number_rows)) = rows.split_last() else {return Err(PuzzleError::EmptyInput)};
    let ops_line = rows.len() - 1;

    spans(&rows).into_iter().map(|span| {
        let op = match span.clone().map(|ci| cell(ops, ci)).find(|&b| b != b' ') {
            Some(b'+') => Op::Add,
            Some(b'*') => Op::Mul,
            _ => return Err(PuzzleError::parse(ops_line, ops, "a row of '+' and '*' operators")),
        };

        let mut numbers = vec![];
        if part == 1 {
            for (ri, row) in number_rows.iter().enumerate() {
                let text = span.clone().map(|ci| cell(row, ci) as char).collect::<String>();
                let text = text.trim();
                if text.is_empty() {continue}
                numbers.push(text.parse().map_err(|_| PuzzleError::parse(ri, row, "a row of numbers"))?);
            }
        } else {
            for ci in span.rev() {
                let mut number = None;
                for (ri, row) in number_rows.iter().enumerate() {
                    match cell(row, ci) {
                        b' ' => (),
                        digit @ b'0' ..= b'9' => number = Some(number.unwrap_or(0) * 10 + (digit - b'0') as u64),
                        _ => return Err(PuzzleError::parse(ri, row, "a row of digits")),
                    }
                }
                numbers.extend(number);
            }
        }
        Ok(Problem {op, numbers})
    }).collect()
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    Ok(parse(part, input)?.iter().map(Problem::eval).sum::<u64>().to_string())
}
