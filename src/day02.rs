//! Product IDs made of a repeated block of digits.

use itertools::Itertools;
use regex::Regex;

use crate::error::PuzzleError;

/// Comma-separated `lo-hi` ranges; the list may be wrapped over several lines.
pub fn parse(input: &str) -> Result<Vec<(u64, u64)>, PuzzleError> {
    let record = Regex::new(r"^(\d+)-(\d+)$")?;
    let mut ranges = vec![];
    for (li, line) in input.lines().enumerate() {
        for text in line.split(',').map(str::trim).filter(|text| !text.is_empty()) {
            let bad = || PuzzleError::parse(li, text, "a lo-hi range");
            let caps = record.captures(text).ok_or_else(bad)?;
            let lo = caps[1].parse().map_err(|_| bad())?;
            let hi = caps[2].parse().map_err(|_| bad())?;
            ranges.push((lo, hi));
        }
    }
    if ranges.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok(ranges)
}

/// Whether `id` is one block of digits written `times` times, or at least
/// twice when `times` is `None`.
pub fn is_repeated(id: u64, times: Option<usize>) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    (1 ..= len / 2).filter(|&block|
        len % block == 0 && times.map_or(true, |times| block * times == len)
    ).any(|block| digits.as_bytes().chunks(block).all_equal())
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let times = if part == 1 {Some(2)} else {None};
    Ok(parse(input)?.into_iter().flat_map(|(lo, hi)| lo ..= hi)
        .filter(|&id| is_repeated(id, times))
        .sum::<u64>().to_string())
}
