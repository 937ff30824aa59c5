use std::collections::BTreeSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};
use crate::utils::grid::Grid;

const SPLITTER: u8 = b'^';
const START: u8 = b'S';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "dp"])]
pub struct Solver;

#[derive(Debug)]
pub struct Manifold {
    grid: Grid,
    start_col: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start_col = grid
            .row(0)
            .iter()
            .position(|&b| b == START)
            .ok_or_else(|| ParseError::MissingData("no 'S' in the first row".into()))?;
        Ok(Manifold { grid, start_col })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let mut beams = BTreeSet::from([shared.start_col]);
        let mut splits = 0usize;

        for row in 0..grid.height() {
            let mut next = BTreeSet::new();
            for &col in &beams {
                if grid.get(row, col) == Some(SPLITTER) {
                    splits += 1;
                    if let Some(left) = col.checked_sub(1) {
                        next.insert(left);
                    }
                    if col + 1 < grid.width() {
                        next.insert(col + 1);
                    }
                } else {
                    next.insert(col);
                }
            }
            beams = next;
        }

        Ok(splits.to_string())
    }
}

/// Timelines starting from a cell, moving down one row per step
struct Timelines<'g> {
    grid: &'g Grid,
}

impl Timelines<'_> {
    /// Cells reached in the next row; `None` marks a path leaving the grid.
    fn branches(&self, &(row, col): &(usize, usize)) -> Vec<Option<(usize, usize)>> {
        let next_row = row + 1;
        let targets: Vec<Option<usize>> = if self.grid.get(row, col) == Some(SPLITTER) {
            vec![col.checked_sub(1), Some(col + 1)]
        } else {
            vec![Some(col)]
        };
        targets
            .into_iter()
            .map(|c| {
                c.filter(|&c| next_row < self.grid.height() && c < self.grid.width())
                    .map(|c| (next_row, c))
            })
            .collect()
    }
}

impl DpProblem<(usize, usize), u128> for Timelines<'_> {
    fn deps(&self, index: &(usize, usize)) -> Vec<(usize, usize)> {
        self.branches(index).into_iter().flatten().collect()
    }

    fn compute(&self, index: &(usize, usize), deps: Vec<u128>) -> u128 {
        let exits = self.branches(index).iter().filter(|b| b.is_none()).count() as u128;
        exits + deps.iter().sum::<u128>()
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let cache = DpCache::builder()
            .backend(Vec2DBackend::new(grid.height(), grid.width()))
            .problem(Timelines { grid })
            .build();
        Ok(cache.get(&(0, shared.start_col)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1), "21");
        assert_eq!(solve(EXAMPLE, 2), "40");
    }

    #[test]
    fn test_side_exit_completes_timeline() {
        // Left branch leaves the grid immediately, right branch falls to the bottom
        assert_eq!(solve("S.\n^.\n..", 2), "2");
        assert_eq!(solve("S.\n^.\n..", 1), "1");
    }

    #[test]
    fn test_missing_start() {
        assert!(matches!(Solver::parse("...\n.S.\n"), Err(ParseError::MissingData(_))));
    }
}
