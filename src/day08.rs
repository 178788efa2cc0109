//! Wiring junction boxes into circuits, closest pairs first.

use itertools::Itertools;
use log::debug;

use crate::error::PuzzleError;

/// Coordinates are read as `i32` and widened, so squared distances fit an `i128`.
pub type JunctionBox = [i64; 3];

/// How many of the closest pairs get wired in part 1.
pub const CONNECTIONS: usize = 1000;

pub fn parse(input: &str) -> Result<Vec<JunctionBox>, PuzzleError> {
    let boxes = input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()).map(|(li, line)| {
        let bad = || PuzzleError::parse(li, line, "an x,y,z triple");
        let (x, y, z) = line.trim().split(',').collect_tuple().ok_or_else(bad)?;
        let coord = |s: &str| s.trim().parse::<i32>().map(i64::from).map_err(|_| bad());
        Ok([coord(x)?, coord(y)?, coord(z)?])
    }).collect::<Result<Vec<_>, PuzzleError>>()?;
    if boxes.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok(boxes)
}

fn distance_sq(a: &JunctionBox, b: &JunctionBox) -> i128 {
    a.iter().zip(b).map(|(a, b)| i128::from(a - b).pow(2)).sum()
}

/// Every index pair, closest first; equal distances keep enumeration order.
pub fn closest_pairs(boxes: &[JunctionBox]) -> Vec<(usize, usize)> {
    (0 .. boxes.len()).tuple_combinations()
        .sorted_by_key(|&(i, j)| distance_sq(&boxes[i], &boxes[j]))
        .collect()
}

/// Disjoint sets of box indices, union by size.
pub struct Circuits {parent: Vec<usize>, size: Vec<usize>, count: usize}

impl Circuits {
    pub fn new(n: usize) -> Circuits {
        Circuits {parent: (0 .. n).collect(), size: vec![1; n], count: n}
    }

    pub fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Joins the circuits of `i` and `j`; false if they already were one.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let (mut ri, mut rj) = (self.find(i), self.find(j));
        if ri == rj {return false}
        if self.size[ri] < self.size[rj] {std::mem::swap(&mut ri, &mut rj)}
        self.parent[rj] = ri;
        self.size[ri] += self.size[rj];
        self.count -= 1;
        true
    }

    pub fn count(&self) -> usize {self.count}

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0 .. self.parent.len()).filter(|&i| self.parent[i] == i).map(|i| self.size[i])
    }
}

/// Wires the `connections` closest pairs and multiplies the three largest
/// circuit sizes.
pub fn circuit_product(boxes: &[JunctionBox], connections: usize) -> u64 {
    let mut circuits = Circuits::new(boxes.len());
    for (i, j) in closest_pairs(boxes).into_iter().take(connections) {
        circuits.union(i, j);
    }
    debug!("{} circuits after {} connections", circuits.count(), connections);
    circuits.sizes().sorted_unstable_by(|a, b| b.cmp(a)).take(3).map(|size| size as u64).product()
}

/// Product of the X coordinates of the pair whose wiring leaves a single circuit.
pub fn last_link(boxes: &[JunctionBox]) -> Option<i64> {
    let mut circuits = Circuits::new(boxes.len());
    closest_pairs(boxes).into_iter().find(|&(i, j)| circuits.union(i, j) && circuits.count() == 1)
        .map(|(i, j)| boxes[i][0] * boxes[j][0])
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let boxes = parse(input)?;
    if part == 1 {
        Ok(circuit_product(&boxes, CONNECTIONS).to_string())
    } else {
        Ok(last_link(&boxes).ok_or(PuzzleError::TooFewPoints(boxes.len()))?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test_log::test]
    fn example_answers() {
        let boxes = parse(EXAMPLE).unwrap();
        assert_eq!(circuit_product(&boxes, 10), 40);
        assert_eq!(solve(2, EXAMPLE).unwrap(), "25272");
    }

    #[test_log::test]
    fn closest_pair_first() {
        let boxes = parse(EXAMPLE).unwrap();
        assert_eq!(closest_pairs(&boxes)[0], (0, 19));
    }

    #[test_log::test]
    fn union_tracks_sizes() {
        let mut circuits = Circuits::new(5);
        assert!(circuits.union(0, 1));
        assert!(circuits.union(1, 2));
        assert!(!circuits.union(2, 0));
        assert_eq!(circuits.count(), 3);
        assert_eq!(circuits.sizes().sorted().collect_vec(), vec![1, 1, 3]);
    }

    #[test_log::test]
    fn fewer_than_three_circuits() {
        let boxes = parse("0,0,0\n1,0,0\n").unwrap();
        assert_eq!(circuit_product(&boxes, 1), 2);
        assert_eq!(last_link(&boxes), Some(0));
        assert!(matches!(solve(2, "5,5,5\n"), Err(PuzzleError::TooFewPoints(1))));
    }

    #[test_log::test]
    fn extreme_coordinates() {
        let boxes = parse("-2147483648,0,0\n2147483647,0,0\n0,-2147483648,2147483647\n").unwrap();
        assert_eq!(closest_pairs(&boxes), vec![(1, 2), (0, 2), (0, 1)]);
        assert_eq!(last_link(&boxes), Some(0));
        assert!(matches!(parse("0,0,0\n4294967296,0,0\n"), Err(PuzzleError::Parse {line: 2, ..})));
    }

    #[test_log::test]
    fn bad_input() {
        assert!(matches!(parse("1,2\n"), Err(PuzzleError::Parse {line: 1, ..})));
        assert!(matches!(parse("1,2,3,4\n"), Err(PuzzleError::Parse {line: 1, ..})));
        assert!(matches!(parse(""), Err(PuzzleError::EmptyInput)));
    }
}
