use anyhow::{anyhow, Context};
use aoc_solver::{parse_lines, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const DIAL_SIZE: i64 = 100;
const DIAL_START: i64 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(i64),
    Right(i64),
}

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<Rotation>,
    zero_counts: Option<ZeroCounts>,
}

/// Both answers come out of one sweep over the rotations.
#[derive(Debug, Clone, Copy)]
pub struct ZeroCounts {
    stops_on_zero: u64,
    clicks_on_zero: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            rotations: parse_lines(input, parse_rotation)?,
            zero_counts: None,
        })
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<Rotation> {
    let (direction, amount) = line.split_at_checked(1).ok_or_else(|| anyhow!("empty rotation"))?;
    let steps: i64 = amount
        .parse()
        .with_context(|| format!("invalid rotation amount {:?}", amount))?;
    if steps < 0 {
        return Err(anyhow!("rotate value must be non negative"));
    }

    match direction {
        "L" => Ok(Rotation::Left(steps)),
        "R" => Ok(Rotation::Right(steps)),
        _ => Err(anyhow!("first character need to be 'L' or 'R'")),
    }
}

/// Times the dial shows 0 while turning from `pos` (inclusive of the end position).
fn clicks_through_zero(pos: i64, rotation: Rotation) -> i64 {
    match rotation {
        Rotation::Right(steps) => (pos + steps) / DIAL_SIZE,
        // Starting on 0 is not a click onto 0
        Rotation::Left(steps) if pos == 0 => steps / DIAL_SIZE,
        Rotation::Left(steps) if steps >= pos => (steps - pos) / DIAL_SIZE + 1,
        Rotation::Left(_) => 0,
    }
}

fn zero_counts(shared: &mut SharedData) -> ZeroCounts {
    *shared.zero_counts.get_or_insert_with(|| {
        let mut pos = DIAL_START;
        let mut counts = ZeroCounts {
            stops_on_zero: 0,
            clicks_on_zero: 0,
        };

        for &rotation in &shared.rotations {
            counts.clicks_on_zero += clicks_through_zero(pos, rotation) as u64;
            pos = match rotation {
                Rotation::Left(steps) => pos - steps,
                Rotation::Right(steps) => pos + steps,
            }
            .rem_euclid(DIAL_SIZE);
            if pos == 0 {
                counts.stops_on_zero += 1;
            }
        }
        counts
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).stops_on_zero.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).clicks_on_zero.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;
    use proptest::prelude::*;

    const EXAMPLE: &str = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1), "3");
        assert_eq!(solve(EXAMPLE, 2), "6");
    }

    #[test]
    fn test_full_turns_count_each_pass() {
        assert_eq!(solve("R1000", 2), "10");
        assert_eq!(solve("L50\nL100", 2), "2");
        assert_eq!(solve("L50\nL100", 1), "2");
    }

    #[test]
    fn test_parse_errors_name_line() {
        let err = Solver::parse("L1\nX5\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(Solver::parse("R-3").is_err());
        assert!(Solver::parse("Rabc").is_err());
    }

    proptest! {
        /// Counting clicks in closed form agrees with turning one click at a time.
        #[test]
        fn prop_clicks_match_brute_force(pos in 0i64..100, steps in 0i64..400, left: bool) {
            let rotation = if left { Rotation::Left(steps) } else { Rotation::Right(steps) };
            let delta = if left { -1 } else { 1 };
            let mut p = pos;
            let mut brute = 0;
            for _ in 0..steps {
                p = (p + delta).rem_euclid(DIAL_SIZE);
                if p == 0 {
                    brute += 1;
                }
            }
            prop_assert_eq!(clicks_through_zero(pos, rotation), brute);
        }
    }
}
