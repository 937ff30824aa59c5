use anyhow::{anyhow, Context};
use aoc_solver::{parse_lines, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::union_find::DisjointSet;

/// Connections made in part 1 for a real input
const CONNECTIONS: usize = 1000;
/// The published example has 20 boxes and asks for 10 connections
const EXAMPLE_BOXES: usize = 20;
const EXAMPLE_CONNECTIONS: usize = 10;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["union-find", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionBox {
    x: i64,
    y: i64,
    z: i64,
}

impl JunctionBox {
    fn distance_squared(&self, other: &JunctionBox) -> i64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

#[derive(Debug)]
pub struct SharedData {
    boxes: Vec<JunctionBox>,
    /// Every pair `(i, j)` with `i < j`, closest first; built on first use
    pairs: Option<Vec<(usize, usize)>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            boxes: parse_lines(input, parse_box)?,
            pairs: None,
        })
    }
}

fn parse_box(line: &str) -> anyhow::Result<JunctionBox> {
    let (x, y, z) = line
        .split(',')
        .map(|v| v.trim().parse::<i64>().with_context(|| format!("invalid coordinate {:?}", v)))
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected `x,y,z`, got {:?}", line))?;
    Ok(JunctionBox { x: x?, y: y?, z: z? })
}

fn sorted_pairs(shared: &mut SharedData) -> &[(usize, usize)] {
    let boxes = &shared.boxes;
    shared.pairs.get_or_insert_with(|| {
        let mut pairs: Vec<(i64, usize, usize)> = (0..boxes.len())
            .tuple_combinations()
            .map(|(i, j)| (boxes[i].distance_squared(&boxes[j]), i, j))
            .collect();
        pairs.sort_unstable();
        pairs.into_iter().map(|(_, i, j)| (i, j)).collect()
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let n = shared.boxes.len();
        let connections = if n == EXAMPLE_BOXES {
            EXAMPLE_CONNECTIONS
        } else {
            CONNECTIONS
        };

        let mut circuits = DisjointSet::new(n);
        for &(i, j) in sorted_pairs(shared).iter().take(connections) {
            circuits.union(i, j);
        }

        let mut sizes = circuits.set_sizes();
        if sizes.len() < 3 {
            return Ok("0".to_string());
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes.iter().take(3).product::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let n = shared.boxes.len();
        if n < 2 {
            return Err(SolveError::SolveFailed(
                format!("need at least two junction boxes, got {}", n).into(),
            ));
        }

        let mut circuits = DisjointSet::new(n);
        let mut last = None;
        for &(i, j) in sorted_pairs(shared) {
            if circuits.union(i, j) {
                last = Some((i, j));
                if circuits.components() == 1 {
                    break;
                }
            }
        }

        let (i, j) = last.ok_or_else(|| SolveError::NoSolution("no connection made".into()))?;
        Ok((shared.boxes[i].x * shared.boxes[j].x).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "162,817,812
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

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part)
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1).unwrap(), "40");
        assert_eq!(solve(EXAMPLE, 2).unwrap(), "25272");
    }

    #[test]
    fn test_pairs_are_shared_between_parts() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        Solver::solve_part_checked_range(&mut shared, 1).unwrap();
        let pairs = shared.pairs.as_ref().map(Vec::len);
        assert_eq!(pairs, Some(20 * 19 / 2));
        // the closest pair in the example
        assert_eq!(shared.pairs.as_ref().unwrap()[0], (0, 19));
    }

    #[test]
    fn test_small_inputs() {
        assert_eq!(solve("1,1,1\n5,5,5", 1).unwrap(), "0");
        assert_eq!(solve("3,0,0\n7,0,0", 2).unwrap(), "21");
        assert!(matches!(solve("1,2,3", 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_bad_coordinates() {
        let err = Solver::parse("1,2,3\n1,2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(Solver::parse("1,2,z").is_err());
    }
}
