//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Turns a day's raw input into the data its parts share.
///
/// ```
/// use aoc_solver::{parse_lines, AocParser, ParseError};
///
/// /// One elf's calories per line
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         parse_lines(input, str::parse::<u32>)
///     }
/// }
///
/// assert_eq!(Calories::parse("10\n20\n").unwrap(), vec![10, 20]);
/// ```
pub trait AocParser {
    /// Parsed input plus whatever the parts cache in it.
    ///
    /// May borrow from the input (`&'a str` slices) when no owned copy is needed.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a day.
///
/// Parts take the shared data mutably, so part 2 can pick up anything part 1
/// stored there.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Totals;
///
/// impl AocParser for Totals {
///     type SharedData<'a> = (Vec<i64>, Option<i64>);
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         let values = input
///             .split(',')
///             .map(|v| v.trim().parse().map_err(|_| ParseError::InvalidFormat(v.to_string())))
///             .collect::<Result<_, _>>()?;
///         Ok((values, None))
///     }
/// }
///
/// impl PartSolver<1> for Totals {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let sum = *shared.1.get_or_insert_with(|| shared.0.iter().sum());
///         Ok(sum.to_string())
///     }
/// }
///
/// let mut shared = Totals::parse("1, 2, 3").unwrap();
/// assert_eq!(<Totals as PartSolver<1>>::solve(&mut shared).unwrap(), "6");
/// assert_eq!(shared.1, Some(6));
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole day: a parser plus `PARTS` parts.
///
/// `#[derive(AocSolver)]` with `#[aoc_solver(max_parts = N)]` implements this by
/// forwarding part `n` to `<Self as PartSolver<n>>::solve`.
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer `part`; `PartNotImplemented` for parts without a solver
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// `PartOutOfRange` for part 0 and parts above `PARTS`, otherwise `solve_part`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
