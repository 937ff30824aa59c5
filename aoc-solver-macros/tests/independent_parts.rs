use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverExt};

/// Shared data that borrows straight from the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(words)
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .max_by_key(|w| w.len())
            .copied()
            .unwrap_or_default()
            .to_string())
    }
}

#[test]
fn test_shared_data_borrows_input() {
    let input = String::from("alpha beta gamma");
    let shared = Words::parse(&input).unwrap();
    assert_eq!(shared, vec!["alpha", "beta", "gamma"]);
    assert!(std::ptr::eq(shared[0].as_ptr(), input.as_ptr()));
}

#[test]
fn test_parts_in_any_order() {
    let mut shared = Words::parse("a bbb cc").unwrap();

    assert_eq!(Words::solve_part_checked_range(&mut shared, 2).unwrap(), "bbb");
    assert_eq!(Words::solve_part_checked_range(&mut shared, 1).unwrap(), "3");
    assert_eq!(Words::solve_part_checked_range(&mut shared, 2).unwrap(), "bbb");
}

#[test]
fn test_part_out_of_range() {
    let mut shared = Words::parse("a b").unwrap();

    assert!(matches!(
        Words::solve_part_checked_range(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert!(matches!(
        Words::solve_part_checked_range(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_empty_input_fails_parse() {
    assert!(matches!(Words::parse("  \n "), Err(ParseError::MissingData(_))));
}
