use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["ranges", "sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// Sorted, disjoint, non-adjacent inclusive ranges
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ranges = Vec::new();
        let mut available = Vec::new();
        let mut reading_ranges = true;

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                reading_ranges = false;
                continue;
            }

            let parsed = if reading_ranges {
                parse_range(line).map(|r| ranges.push(r))
            } else {
                line.parse::<u64>()
                    .map(|id| available.push(id))
                    .with_context(|| format!("invalid ingredient id {:?}", line))
            };
            parsed.map_err(|e| ParseError::at_line(line_idx + 1, e))?;
        }

        Ok(SharedData {
            fresh: merge_ranges(ranges),
            available,
        })
    }
}

fn parse_range(line: &str) -> anyhow::Result<(u64, u64)> {
    let (start, end) = line
        .split_once('-')
        .ok_or_else(|| anyhow!("expected range `start-end`, got {:?}", line))?;
    let start: u64 = start.parse().context("invalid range start")?;
    let end: u64 = end.parse().context("invalid range end")?;
    if start > end {
        return Err(anyhow!("range start {} is after end {}", start, end));
    }
    Ok((start, end))
}

/// Sort and coalesce overlapping or touching ranges.
fn merge_ranges(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn is_fresh(fresh: &[(u64, u64)], id: u64) -> bool {
    // First range that ends at or after id
    let idx = fresh.partition_point(|&(_, end)| end < id);
    fresh.get(idx).is_some_and(|&(start, _)| start <= id)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .available
            .iter()
            .filter(|&&id| is_fresh(&shared.fresh, id))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.fresh.iter().map(|&(start, end)| end - start + 1).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;
    use proptest::prelude::*;

    const EXAMPLE: &str = "3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1), "3");
        assert_eq!(solve(EXAMPLE, 2), "14");
    }

    #[test]
    fn test_adjacent_ranges_merge() {
        assert_eq!(merge_ranges(vec![(5, 7), (1, 4), (9, 9)]), vec![(1, 7), (9, 9)]);
        assert_eq!(merge_ranges(vec![(1, 10), (2, 3)]), vec![(1, 10)]);
    }

    #[test]
    fn test_bad_lines() {
        let err = Solver::parse("3-5\n7\n\n1").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        let err = Solver::parse("3-5\n\nx").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{}", err);
        assert!(Solver::parse("9-2").is_err());
    }

    proptest! {
        #[test]
        fn prop_merged_membership_unchanged(
            ranges in prop::collection::vec((0u64..60, 0u64..8), 1..10),
            probe in 0u64..80
        ) {
            let ranges: Vec<(u64, u64)> = ranges.into_iter().map(|(s, len)| (s, s + len)).collect();
            let merged = merge_ranges(ranges.clone());
            let expected = ranges.iter().any(|&(s, e)| s <= probe && probe <= e);
            prop_assert_eq!(is_fresh(&merged, probe), expected);
            prop_assert!(merged.windows(2).all(|w| w[0].1 + 1 < w[1].0));
        }
    }
}
