use std::collections::HashMap;

use anyhow::{anyhow, Context};
use aoc_solver::{parse_lines, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["lists", "sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (left, right) = parse_lines(input, parse_pair)?.into_iter().unzip();
        Ok(SharedData { left, right })
    }
}

fn parse_pair(line: &str) -> anyhow::Result<(i64, i64)> {
    let mut fields = line.split_whitespace();
    let (Some(l), Some(r), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(anyhow!("expected two numbers, got {:?}", line));
    };
    Ok((
        l.parse().with_context(|| format!("bad left value {:?}", l))?,
        r.parse().with_context(|| format!("bad right value {:?}", r))?,
    ))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.left.sort_unstable();
        shared.right.sort_unstable();

        let distance: i64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| (l - r).abs())
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for &r in &shared.right {
            *counts.entry(r).or_default() += 1;
        }

        let similarity: i64 = shared
            .left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
