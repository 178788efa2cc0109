//! Beams falling through a grid of splitters.
//!
//! Part 1 counts how many splitters a beam ever reaches; part 2 counts the
//! distinct downward timelines from the start to the bottom edge.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use bitvec::prelude::*;
use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::error::PuzzleError;

/// (row, column)
pub type Pos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {Start, Splitter, Empty}

#[derive(Clone, Debug)]
pub struct Grid {cells: Vec<Cell>, width: usize, height: usize, start: Pos}

impl Grid {
    pub fn parse(input: &str) -> Result<Grid, PuzzleError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (ri, line) in input.trim_end().lines().enumerate() {
            let row = line.chars().map(|ch| match ch {
                'S' => Ok(Cell::Start),
                '^' => Ok(Cell::Splitter),
                '.' => Ok(Cell::Empty),
                _ => Err(PuzzleError::parse(ri, line, "a row of '.', '^' and 'S'"))
            }).collect::<Result<Vec<_>, _>>()?;
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(PuzzleError::RaggedGrid {row: ri + 1, expected, found: row.len()});
            }
            cells.extend(row);
            height += 1;
        }

        let width = width.unwrap_or(0);
        let start = cells.iter().position(|&cell| cell == Cell::Start)
                         .map(|ix| (ix / width, ix % width))
                         .ok_or(PuzzleError::MissingStart)?;
        Ok(Grid {cells, width, height, start})
    }

    pub fn width(&self) -> usize {self.width}
    pub fn height(&self) -> usize {self.height}
    pub fn start(&self) -> Pos {self.start}

    /// The cell at `pos`, or `None` once a beam has left the grid.
    pub fn get(&self, (ri, ci): Pos) -> Option<Cell> {
        (ri < self.height && ci < self.width).then(|| self.cells[ri * self.width + ci])
    }

    fn index(&self, (ri, ci): Pos) -> usize {ri * self.width + ci}
}

/// A beam heading down from `pos`; `from` is the cell it came out of.
#[derive(Clone, Copy, Debug)]
struct Beam {pos: Pos, from: Pos}

/// Checkpoints of both traversals, called synchronously in visiting order.
///
/// Every method defaults to doing nothing, and `()` is the do-nothing observer.
pub trait BeamObserver {
    fn cell_visited(&mut self, _pos: Pos, _from: Pos) {}
    fn splitter_triggered(&mut self, _pos: Pos) {}
    fn memo_hit(&mut self, _pos: Pos, _paths: u64) {}
    fn memo_computed(&mut self, _pos: Pos, _paths: u64) {}
}

impl BeamObserver for () {}

/// Logs every checkpoint at trace level.
pub struct TraceObserver;

impl BeamObserver for TraceObserver {
    fn cell_visited(&mut self, pos: Pos, from: Pos) {trace!("visit {:?} from {:?}", pos, from)}
    fn splitter_triggered(&mut self, pos: Pos) {trace!("split at {:?}", pos)}
    fn memo_hit(&mut self, pos: Pos, paths: u64) {trace!("memo hit {:?} = {}", pos, paths)}
    fn memo_computed(&mut self, pos: Pos, paths: u64) {trace!("memo set {:?} = {}", pos, paths)}
}

/// The two cells a splitter at `pos` sends beams into. The right one may
/// already be past the right edge; the left one is dropped at column 0.
fn fan_out((ri, ci): Pos) -> ArrayVec<Pos, 2> {
    let mut out = ArrayVec::new();
    if let Some(left) = ci.checked_sub(1) {out.push((ri + 1, left))}
    out.push((ri + 1, ci + 1));
    out
}

pub fn count_splits(grid: &Grid, observer: &mut dyn BeamObserver) -> u64 {
    let mut triggered = bitvec![0; grid.width * grid.height];
    let mut beams = VecDeque::from([Beam {pos: grid.start, from: grid.start}]);
    let mut splits = 0;

    while let Some(Beam {pos: (mut ri, ci), mut from}) = beams.pop_front() {
        while let Some(cell) = grid.get((ri, ci)) {
            observer.cell_visited((ri, ci), from);
            if cell == Cell::Splitter {
                // a splitter fires once, later beams just stop on it
                if !triggered.replace(grid.index((ri, ci)), true) {
                    splits += 1;
                    observer.splitter_triggered((ri, ci));
                    beams.extend(fan_out((ri, ci)).into_iter().map(|pos| Beam {pos, from: (ri, ci)}));
                }
                break;
            }
            from = (ri, ci);
            ri += 1;
        }
    }
    splits
}

/// Fails with `Overflow` once the number of timelines no longer fits a `u64`.
pub fn count_paths(grid: &Grid, observer: &mut dyn BeamObserver) -> Result<u64, PuzzleError> {
    let mut memo = FxHashMap::default();
    let paths = paths_from(grid, grid.start, grid.start, &mut memo, observer)?;
    debug!("{} memoized cells", memo.len());
    Ok(paths)
}

fn paths_from(
    grid: &Grid, pos: Pos, from: Pos, memo: &mut FxHashMap<Pos, u64>, observer: &mut dyn BeamObserver
) -> Result<u64, PuzzleError> {
    let (ri, ci) = pos;
    if ci >= grid.width {return Ok(0)}
    if ri >= grid.height {return Ok(1)}
    if let Some(&paths) = memo.get(&pos) {
        observer.memo_hit(pos, paths);
        return Ok(paths);
    }

    observer.cell_visited(pos, from);
    let paths = if grid.get(pos) == Some(Cell::Splitter) {
        let mut paths = 0u64;
        for next in fan_out(pos) {
            paths = paths.checked_add(paths_from(grid, next, pos, memo, observer)?)
                         .ok_or(PuzzleError::Overflow("timeline count"))?;
        }
        paths
    } else {
        paths_from(grid, (ri + 1, ci), pos, memo, observer)?
    };
    memo.insert(pos, paths);
    observer.memo_computed(pos, paths);
    Ok(paths)
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    solve_observed(part, input, &mut ())
}

pub fn solve_observed(part: u8, input: &str, observer: &mut dyn BeamObserver) -> Result<String, PuzzleError> {
    let grid = Grid::parse(input)?;
    debug!("{}x{} grid, start at {:?}", grid.height, grid.width, grid.start);
    let answer = if part == 1 {count_splits(&grid, observer)} else {count_paths(&grid, observer)?};
    Ok(answer.to_string())
}
