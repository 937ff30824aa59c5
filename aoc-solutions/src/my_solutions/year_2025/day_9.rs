use anyhow::{anyhow, Context};
use aoc_solver::{parse_lines, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry"])]
pub struct Solver;

type Point = (i64, i64);

/// Axis-aligned rectangle spanned by two red tiles
#[derive(Debug, Clone, Copy)]
struct Rect {
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

impl Rect {
    /// `None` when the corners share a row or column.
    fn from_corners(a: Point, b: Point) -> Option<Self> {
        (a.0 != b.0 && a.1 != b.1).then(|| Rect {
            min_x: a.0.min(b.0),
            max_x: a.0.max(b.0),
            min_y: a.1.min(b.1),
            max_y: a.1.max(b.1),
        })
    }

    fn area(&self) -> u64 {
        (self.max_x - self.min_x + 1) as u64 * (self.max_y - self.min_y + 1) as u64
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_point)
    }
}

fn parse_point(line: &str) -> anyhow::Result<Point> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got {:?}", line))?;
    Ok((
        x.trim().parse().context("invalid x")?,
        y.trim().parse().context("invalid y")?,
    ))
}

fn rectangles(tiles: &[Point]) -> impl Iterator<Item = Rect> + '_ {
    tiles
        .iter()
        .tuple_combinations()
        .filter_map(|(&a, &b)| Rect::from_corners(a, b))
}

fn edges(tiles: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    tiles.iter().copied().circular_tuple_windows()
}

/// True if some polygon edge passes through the open interior of `rect`.
fn edge_crosses_interior(tiles: &[Point], rect: &Rect) -> bool {
    edges(tiles).any(|(a, b)| {
        let (ex_min, ex_max) = (a.0.min(b.0), a.0.max(b.0));
        let (ey_min, ey_max) = (a.1.min(b.1), a.1.max(b.1));
        ex_min < rect.max_x && ex_max > rect.min_x && ey_min < rect.max_y && ey_max > rect.min_y
    })
}

/// Ray casting towards +x from the rectangle centre, in doubled coordinates so
/// the centre stays integral. Vertical edges use a half-open y span.
fn centre_inside(tiles: &[Point], rect: &Rect) -> bool {
    let cx = rect.min_x + rect.max_x;
    let cy = rect.min_y + rect.max_y;
    edges(tiles)
        .filter(|(a, b)| a.0 == b.0 && 2 * a.0 > cx)
        .filter(|(a, b)| {
            let (lo, hi) = (2 * a.1.min(b.1), 2 * a.1.max(b.1));
            lo <= cy && cy < hi
        })
        .count()
        % 2
        == 1
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = rectangles(shared).map(|r| r.area()).max().unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tiles: &[Point] = shared;
        let best = rectangles(tiles)
            .sorted_unstable_by_key(|r| std::cmp::Reverse(r.area()))
            .find(|r| !edge_crosses_interior(tiles, r) && centre_inside(tiles, r))
            .map_or(0, |r| r.area());
        Ok(best.to_string())
    }
}
