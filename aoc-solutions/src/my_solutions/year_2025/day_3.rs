use aoc_solver::{parse_lines, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

impl AocParser for Solver {
    /// Battery banks as digit strings borrowed from the input
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            if line.bytes().all(|b| b.is_ascii_digit()) {
                Ok(line.as_bytes())
            } else {
                Err("battery bank must only contain digits")
            }
        })
    }
}

/// Largest number formed by `k` digits of `bank`, kept in their order.
///
/// Each pick takes the leftmost maximum of the window that still leaves
/// enough digits behind it for the remaining picks.
fn max_joltage(bank: &[u8], k: usize) -> Option<u64> {
    if bank.len() < k {
        return None;
    }

    let mut value = 0u64;
    let mut start = 0;
    for remaining in (0..k).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, d)| d)?;
        value = value * 10 + u64::from(digit - b'0');
        start += offset + 1;
    }
    Some(value)
}

fn total_joltage(banks: &[&[u8]], k: usize) -> Result<String, SolveError> {
    banks
        .iter()
        .enumerate()
        .map(|(idx, bank)| {
            max_joltage(bank, k).ok_or_else(|| {
                SolveError::SolveFailed(
                    format!("bank {} has {} batteries, need {}", idx + 1, bank.len(), k).into(),
                )
            })
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}
