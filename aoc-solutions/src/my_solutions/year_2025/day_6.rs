use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing", "columns"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, numbers: impl Iterator<Item = u64>) -> u64 {
        match self {
            Op::Add => numbers.sum(),
            Op::Mul => numbers.product(),
        }
    }
}

/// One problem: a run of columns `start..end` and its operator
#[derive(Debug, Clone, Copy)]
pub struct Block {
    start: usize,
    end: usize,
    op: Op,
}

/// The worksheet keeps borrowing the number rows; each part reads them its own way.
#[derive(Debug)]
pub struct Worksheet<'a> {
    rows: Vec<&'a [u8]>,
    blocks: Vec<Block>,
}

fn cell(row: &[u8], col: usize) -> u8 {
    row.get(col).copied().unwrap_or(b' ')
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
        while lines.last().is_some_and(|l| l.iter().all(|&b| b == b' ')) {
            lines.pop();
        }
        let ops_row = lines
            .pop()
            .ok_or_else(|| ParseError::MissingData("empty worksheet".into()))?;

        for (idx, row) in lines.iter().enumerate() {
            if let Some(&bad) = row.iter().find(|&&b| b != b' ' && !b.is_ascii_digit()) {
                return Err(ParseError::at_line(
                    idx + 1,
                    format_args!("unexpected character {:?}", bad as char),
                ));
            }
        }

        let width = lines.iter().chain([&ops_row]).map(|l| l.len()).max().unwrap_or(0);
        let is_separator = |col: usize| {
            lines.iter().chain([&ops_row]).all(|row| cell(row, col) == b' ')
        };

        let mut blocks = Vec::new();
        let mut col = 0;
        while col < width {
            if is_separator(col) {
                col += 1;
                continue;
            }
            let start = col;
            while col < width && !is_separator(col) {
                col += 1;
            }
            blocks.push(Block {
                start,
                end: col,
                op: block_op(ops_row, start, col)?,
            });
        }

        Ok(Worksheet { rows: lines, blocks })
    }
}

fn block_op(ops_row: &[u8], start: usize, end: usize) -> Result<Op, ParseError> {
    let symbol = (start..end)
        .map(|c| cell(ops_row, c))
        .find(|&b| b != b' ');
    match symbol {
        Some(b'+') => Ok(Op::Add),
        Some(b'*') => Ok(Op::Mul),
        Some(other) => Err(ParseError::InvalidFormat(format!(
            "unknown operator {:?} at column {}",
            other as char,
            start + 1
        ))),
        None => Err(ParseError::MissingData(format!(
            "problem at column {} has no operator",
            start + 1
        ))),
    }
}

/// Digits of `bytes` read in order, skipping blanks; `None` if there are none.
fn read_number(bytes: impl Iterator<Item = u8>) -> Option<u64> {
    bytes
        .filter(u8::is_ascii_digit)
        .fold(None, |acc, d| Some(acc.unwrap_or(0) * 10 + u64::from(d - b'0')))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .blocks
            .iter()
            .map(|block| {
                block.op.apply(shared.rows.iter().filter_map(|row| {
                    read_number((block.start..block.end).map(|c| cell(row, c)))
                }))
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .blocks
            .iter()
            .map(|block| {
                block.op.apply((block.start..block.end).rev().filter_map(|c| {
                    read_number(shared.rows.iter().map(|row| cell(row, c)))
                }))
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = concat!(
        "123 328  51 64 \n",
        " 45 64  387 23 \n",
        "  6 98  215 314\n",
        "*   +   *   +  \n",
    );

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(solve(EXAMPLE, 1), "4277556");
        assert_eq!(solve(EXAMPLE, 2), "3263827");
    }

    #[test]
    fn test_trailing_spaces_optional() {
        let trimmed: String = EXAMPLE.lines().map(|l| format!("{}\n", l.trim_end())).collect();
        assert_eq!(solve(&trimmed, 1), "4277556");
        assert_eq!(solve(&trimmed, 2), "3263827");
    }

    #[test]
    fn test_blocks_found() {
        let sheet = Solver::parse(EXAMPLE).unwrap();
        let spans: Vec<(usize, usize, Op)> = sheet.blocks.iter().map(|b| (b.start, b.end, b.op)).collect();
        assert_eq!(
            spans,
            vec![(0, 3, Op::Mul), (4, 7, Op::Add), (8, 11, Op::Mul), (12, 15, Op::Add)]
        );
    }

    #[test]
    fn test_missing_operator_is_parse_error() {
        assert!(matches!(Solver::parse("12 3\n+   \n"), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("12\n-\n"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("1x\n+\n"), Err(ParseError::Line { line: 1, .. })));
    }
}
