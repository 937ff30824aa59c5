use std::ops::RangeInclusive;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["brute-force", "digits"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    /// Malformed or reversed ranges are skipped.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.split(',').filter_map(parse_range).collect())
    }
}

fn parse_range(token: &str) -> Option<RangeInclusive<u64>> {
    let (start, end) = token.trim().split_once('-')?;
    let start: u64 = start.trim().parse().ok()?;
    let end: u64 = end.trim().parse().ok()?;
    (start <= end).then_some(start..=end)
}

fn digit_count(mut n: u64) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// True if `id` is a block of `block_len` digits (no leading zero) repeated
/// until it has `total_len` digits.
fn is_repetition(id: u64, total_len: u32, block_len: u32) -> bool {
    if block_len == 0 || block_len >= total_len || total_len % block_len != 0 {
        return false;
    }
    let id = u128::from(id);
    // 11, 1010, 1001001, ... for the given block length
    let multiplier = (10u128.pow(total_len) - 1) / (10u128.pow(block_len) - 1);
    id % multiplier == 0 && id / multiplier >= 10u128.pow(block_len - 1)
}

fn repeated_twice(id: u64) -> bool {
    let len = digit_count(id);
    len % 2 == 0 && is_repetition(id, len, len / 2)
}

fn repeated_at_least_twice(id: u64) -> bool {
    let len = digit_count(id);
    (1..=len / 2).any(|block_len| is_repetition(id, len, block_len))
}

fn sum_matching(ranges: &[RangeInclusive<u64>], pred: impl Fn(u64) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|r| r.clone())
        .filter(|&id| pred(id))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_matching(shared, repeated_twice).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_matching(shared, repeated_at_least_twice).to_string())
    }
}
