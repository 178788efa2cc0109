//! Advent of Code 2025 solutions.
//!
//! Each day module exposes `solve(part, input)`, returning the answer as text.

pub mod day02;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod error;

pub use error::PuzzleError;

pub type Solver = fn(u8, &str) -> Result<String, PuzzleError>;

pub fn solver(day: u8) -> Option<Solver> {
    let solve: Solver = match day {
        2 => day02::solve,
        6 => day06::solve,
        7 => day07::solve,
        8 => day08::solve,
        9 => day09::solve,
        _ => return None
    };
    Some(solve)
}

pub fn run(day: u8, part: u8, input: &str) -> Result<String, PuzzleError> {
    if !(1 ..= 2).contains(&part) {return Err(PuzzleError::UnknownPart(part))}
    let solve = solver(day).ok_or(PuzzleError::UnknownDay(day))?;
    solve(part, input)
}
