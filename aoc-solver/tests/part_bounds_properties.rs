//! Property-based tests for part bounds validation and derive dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct Fixed<const N: u8>;

impl<const N: u8> AocParser for Fixed<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Fixed<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    let mut shared = ();
    match max_parts {
        1 => Fixed::<1>::solve_part_checked_range(&mut shared, part),
        2 => Fixed::<2>::solve_part_checked_range(&mut shared, part),
        3 => Fixed::<3>::solve_part_checked_range(&mut shared, part),
        _ => Fixed::<25>::solve_part_checked_range(&mut shared, part),
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Stats;

impl AocParser for Stats {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
            .collect()
    }
}

impl PartSolver<1> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::NoSolution("empty".into()))
    }
}

impl PartSolver<3> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        Ok(shared[shared.len() / 2].to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected with the requested number.
    #[test]
    fn prop_out_of_range_rejection(max_parts in prop::sample::select(vec![1u8, 2, 3, 25]), part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// Derived dispatch agrees with calling the part solver directly.
    #[test]
    fn prop_derived_dispatch_matches_part_solver(
        numbers in prop::collection::vec(-50i64..50, 1..8),
        part in 1u8..=3
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        let mut via_solver = Stats::parse(&input).unwrap();
        let mut direct = Stats::parse(&input).unwrap();

        let dispatched = Stats::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <Stats as PartSolver<1>>::solve(&mut direct),
            2 => <Stats as PartSolver<2>>::solve(&mut direct),
            _ => <Stats as PartSolver<3>>::solve(&mut direct),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    /// Parts outside the derived range never reach a part solver.
    #[test]
    fn prop_derived_unknown_part(part in prop_oneof![Just(0u8), 4u8..=255]) {
        let mut shared = vec![1, 2, 3];
        match Stats::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn test_part_mutations_are_visible_later() {
    let mut shared = Stats::parse("3,1,2").unwrap();
    assert_eq!(Stats::solve_part_checked_range(&mut shared, 3).unwrap(), "2");
    // part 3 sorted in place
    assert_eq!(shared, vec![1, 2, 3]);
}

#[test]
fn test_no_solution_propagates() {
    let mut shared = Vec::new();
    assert!(matches!(
        Stats::solve_part_checked_range(&mut shared, 2),
        Err(SolveError::NoSolution(_))
    ));
}
