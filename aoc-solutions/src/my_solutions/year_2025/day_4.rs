use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
/// A roll is reachable by a forklift when fewer rolls than this surround it
const MAX_CROWD: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input)
    }
}

fn accessible_rolls(grid: &Grid) -> Vec<(usize, usize)> {
    grid.positions()
        .filter(|&(r, c)| grid.get(r, c) == Some(ROLL))
        .filter(|&(r, c)| {
            grid.neighbors8(r, c)
                .filter(|&(nr, nc)| grid.get(nr, nc) == Some(ROLL))
                .count()
                < MAX_CROWD
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible_rolls(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let mut removed = 0;

        // Each round removes everything accessible at the start of the round
        loop {
            let round = accessible_rolls(&grid);
            if round.is_empty() {
                break;
            }
            removed += round.len();
            for (r, c) in round {
                grid.set(r, c, EMPTY);
            }
        }

        Ok(removed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1), "13");
        assert_eq!(solve(EXAMPLE, 2), "43");
    }

    #[test]
    fn test_part2_leaves_shared_grid_intact() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "43");
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn test_dense_block_core_stays() {
        // Corners go first, then edges, then the centre
        assert_eq!(solve("@@@\n@@@\n@@@", 1), "4");
        assert_eq!(solve("@@@\n@@@\n@@@", 2), "9");
    }
}
