//! Largest axis-aligned rectangles with two listed tiles as opposite corners.
//!
//! The tiles, in input order, also trace a closed polygon. Part 2 only admits
//! rectangles that stay inside it, which assumes every polygon edge is
//! horizontal or vertical.

use itertools::Itertools;
use log::debug;

use crate::error::PuzzleError;

/// Read as `i32` and widened, so spans and areas below cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {pub x: i64, pub y: i64}

/// A candidate rectangle, spanned by `points[corners.0]` and `points[corners.1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {pub corners: (usize, usize), pub min: Point, pub max: Point}

impl Rectangle {
    fn spanned(points: &[Point], i: usize, j: usize) -> Rectangle {
        let (a, b) = (points[i], points[j]);
        Rectangle {
            corners: (i, j),
            min: Point {x: a.x.min(b.x), y: a.y.min(b.y)},
            max: Point {x: a.x.max(b.x), y: a.y.max(b.y)},
        }
    }

    /// Counts tiles, so both corner rows and columns are included.
    pub fn area(&self) -> u128 {
        (self.max.x - self.min.x + 1) as u128 * (self.max.y - self.min.y + 1) as u128
    }

    fn center(&self) -> Point {
        Point {x: (self.min.x + self.max.x) / 2, y: (self.min.y + self.max.y) / 2}
    }

    /// Whether an axis-aligned edge passes through the open interior.
    /// Edges lying on the border only touch it.
    fn cut_by(&self, (a, b): (Point, Point)) -> bool {
        if a.x == b.x {
            self.min.x < a.x && a.x < self.max.x && a.y.min(b.y) < self.max.y && a.y.max(b.y) > self.min.y
        } else {
            self.min.y < a.y && a.y < self.max.y && a.x.min(b.x) < self.max.x && a.x.max(b.x) > self.min.x
        }
    }
}

pub fn parse(input: &str) -> Result<Vec<Point>, PuzzleError> {
    input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()).map(|(li, line)| {
        let bad = || PuzzleError::parse(li, line, "an x,y pair");
        let (x, y) = line.trim().split_once(',').ok_or_else(bad)?;
        let coord = |s: &str| s.trim().parse::<i32>().map(i64::from).map_err(|_| bad());
        Ok(Point {x: coord(x)?, y: coord(y)?})
    }).collect()
}

/// Polygon edges in input order, closing back onto the first point.
fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points.iter().copied().circular_tuple_windows()
}

/// Even-odd rule with a ray cast towards +x; only vertical edges can cross it.
fn encloses(points: &[Point], p: Point) -> bool {
    edges(points).filter(|&(a, b)|
        a.x == b.x && p.x < a.x && (a.y.min(b.y) .. a.y.max(b.y)).contains(&p.y)
    ).count() % 2 == 1
}

/// First rectangle of maximal area among those `admits` accepts. Pairs that
/// cannot beat the current best are never shown to `admits`.
fn best_rectangle(points: &[Point], mut admits: impl FnMut(&Rectangle) -> bool) -> Option<Rectangle> {
    let mut best: Option<Rectangle> = None;
    for (i, j) in (0 .. points.len()).tuple_combinations() {
        let rect = Rectangle::spanned(points, i, j);
        if best.is_some_and(|best| rect.area() <= best.area()) {continue}
        if admits(&rect) {best = Some(rect)}
    }
    best
}

pub fn largest_rectangle(points: &[Point]) -> Result<Rectangle, PuzzleError> {
    best_rectangle(points, |_| true).ok_or(PuzzleError::TooFewPoints(points.len()))
}

pub fn largest_rectangle_inside(points: &[Point]) -> Result<Option<Rectangle>, PuzzleError> {
    if points.len() < 2 {return Err(PuzzleError::TooFewPoints(points.len()))}
    if let Some((a, b)) = edges(points).find(|(a, b)| a.x != b.x && a.y != b.y) {
        return Err(PuzzleError::DiagonalEdge {from: (a.x, a.y), to: (b.x, b.y)});
    }

    Ok(best_rectangle(points, |rect|
        edges(points).all(|edge| !rect.cut_by(edge)) && encloses(points, rect.center())
    ))
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let points = parse(input)?;
    let best = if part == 1 {Some(largest_rectangle(&points)?)} else {largest_rectangle_inside(&points)?};
    match best {
        Some(rect) => debug!(
            "best corners {:?} and {:?}, area {}",
            points[rect.corners.0], points[rect.corners.1], rect.area()
        ),
        None => debug!("no rectangle fits inside the polygon"),
    }
    Ok(best.map_or(0, |rect| rect.area()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";
    const L_SHAPE: &str = "0,0\n4,0\n4,2\n2,2\n2,4\n0,4\n";

    #[test_log::test]
    fn example_answers() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "50");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "24");
    }

    #[test_log::test]
    fn unit_square_counts_tiles() {
        let points = parse("0,0\n0,1\n1,0\n1,1\n").unwrap();
        assert_eq!(largest_rectangle(&points).unwrap().area(), 4);
        let points = parse("0,0\n1,0\n1,1\n0,1\n").unwrap();
        assert_eq!(largest_rectangle_inside(&points).unwrap().map(|rect| rect.area()), Some(4));
    }

    #[test_log::test]
    fn concave_polygon_rejects_the_outer_box() {
        let points = parse(L_SHAPE).unwrap();
        let outer = largest_rectangle(&points).unwrap();
        assert_eq!(outer.area(), 25);
        assert_eq!(outer.corners, (1, 5));

        let inner = largest_rectangle_inside(&points).unwrap().unwrap();
        assert_eq!(inner.area(), 15);
        assert_eq!(inner.corners, (0, 2));
    }

    #[test_log::test]
    fn border_edges_only_touch() {
        let rect = Rectangle {corners: (0, 1), min: Point {x: 0, y: 0}, max: Point {x: 4, y: 2}};
        assert!(!rect.cut_by((Point {x: 4, y: 2}, Point {x: 2, y: 2})));
        assert!(!rect.cut_by((Point {x: 2, y: 2}, Point {x: 2, y: 4})));
        assert!(rect.cut_by((Point {x: 2, y: 1}, Point {x: 2, y: 4})));
        assert!(rect.cut_by((Point {x: -1, y: 1}, Point {x: 5, y: 1})));
    }

    #[test_log::test]
    fn too_few_points() {
        let points = parse("3,4\n").unwrap();
        assert!(matches!(largest_rectangle(&points), Err(PuzzleError::TooFewPoints(1))));
        assert!(matches!(largest_rectangle_inside(&[]), Err(PuzzleError::TooFewPoints(0))));
        assert!(matches!(solve(1, ""), Err(PuzzleError::TooFewPoints(0))));
    }

    #[test_log::test]
    fn diagonal_edges_are_unsupported() {
        let points = parse("0,0\n0,1\n1,0\n1,1\n").unwrap();
        assert!(matches!(
            largest_rectangle_inside(&points),
            Err(PuzzleError::DiagonalEdge {from: (0, 1), to: (1, 0)})
        ));
    }

    #[test_log::test]
    fn extreme_coordinates() {
        assert_eq!(solve(1, "-2147483648,-2147483648\n2147483647,2147483647\n").unwrap(), (1u128 << 64).to_string());
        assert_eq!(
            solve(2, "-2147483648,-2147483648\n2147483647,-2147483648\n2147483647,2147483647\n-2147483648,2147483647\n").unwrap(),
            (1u128 << 64).to_string()
        );
        assert!(matches!(parse("0,0\n4294967296,4294967296\n"), Err(PuzzleError::Parse {line: 2, ..})));
        assert!(matches!(parse("-9223372036854775808,0\n"), Err(PuzzleError::Parse {line: 1, ..})));
    }

    #[test_log::test]
    fn parse_skips_blank_lines_and_rejects_junk() {
        assert_eq!(parse("1,2\n\n -3, 4 \n").unwrap(), vec![Point {x: 1, y: 2}, Point {x: -3, y: 4}]);
        assert!(matches!(parse("1,2\n3;4\n"), Err(PuzzleError::Parse {line: 2, ..})));
        assert!(matches!(parse("1,x\n"), Err(PuzzleError::Parse {line: 1, ..})));
    }
}
