use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["graph", "dp"])]
pub struct Solver;

/// Device graph; names borrow from the input
#[derive(Debug, Default)]
pub struct Reactor<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> Reactor<'a> {
    fn id(&mut self, name: &'a str) -> usize {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == next {
            self.outputs.push(Vec::new());
        }
        id
    }

    /// Paths from `from` to `to` passing through every device in `via`.
    fn count_paths(&self, from: &str, to: &str, via: &[&str]) -> u64 {
        let (Some(&start), Some(&target)) = (self.ids.get(from), self.ids.get(to)) else {
            return 0;
        };
        let Some(via) = via.iter().map(|v| self.ids.get(v).copied()).collect::<Option<Vec<_>>>() else {
            return 0;
        };

        let problem = PathCount {
            reactor: self,
            target,
            via,
        };
        let start_mask = problem.mark(start);
        let cache = DpCache::with_problem(HashMapBackend::new(), problem);
        cache.get(&(start, start_mask))
    }
}

/// Path counts keyed by (device, set of `via` devices seen so far)
struct PathCount<'r, 'a> {
    reactor: &'r Reactor<'a>,
    target: usize,
    via: Vec<usize>,
}

impl PathCount<'_, '_> {
    fn mark(&self, node: usize) -> u32 {
        self.via
            .iter()
            .position(|&v| v == node)
            .map_or(0, |bit| 1 << bit)
    }

    fn all_seen(&self) -> u32 {
        (1 << self.via.len()) - 1
    }
}

impl DpProblem<(usize, u32), u64> for PathCount<'_, '_> {
    fn deps(&self, &(node, seen): &(usize, u32)) -> Vec<(usize, u32)> {
        if node == self.target {
            return vec![];
        }
        self.reactor.outputs[node]
            .iter()
            .map(|&next| (next, seen | self.mark(next)))
            .collect()
    }

    fn compute(&self, &(node, seen): &(usize, u32), deps: Vec<u64>) -> u64 {
        if node == self.target {
            u64::from(seen == self.all_seen())
        } else {
            deps.iter().sum()
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Reactor<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut reactor = Reactor::default();
        for line in input.lines() {
            // Lines without a device name are not part of the graph
            let Some((device, outputs)) = line.split_once(':') else {
                continue;
            };
            let device = device.trim();
            if device.is_empty() {
                return Err(ParseError::InvalidFormat(format!("missing device name in {:?}", line)));
            }
            let from = reactor.id(device);
            for output in outputs.split_whitespace() {
                let to = reactor.id(output);
                reactor.outputs[from].push(to);
            }
        }
        Ok(reactor)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_paths("you", "out", &[]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_paths("svr", "out", &["dac", "fft"]).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE_PART1: &str = "aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const EXAMPLE_PART2: &str = "svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part_checked_range(&mut shared, part).unwrap()
    }

    #[test]
    fn test_examples() {
        assert_eq!(solve(EXAMPLE_PART1, 1), "5");
        assert_eq!(solve(EXAMPLE_PART2, 2), "2");
    }

    #[test]
    fn test_missing_start_is_zero() {
        assert_eq!(solve(EXAMPLE_PART1, 2), "0");
        assert_eq!(solve(EXAMPLE_PART2, 1), "0");
    }

    #[test]
    fn test_unconstrained_paths() {
        let reactor = Solver::parse(EXAMPLE_PART2).unwrap();
        assert_eq!(reactor.count_paths("svr", "out", &[]), 8);
        assert_eq!(reactor.count_paths("svr", "out", &["fft"]), 4);
        assert_eq!(reactor.count_paths("svr", "out", &["nope"]), 0);
    }

    #[test]
    fn test_names_borrow_input() {
        let input = String::from("a: b\n");
        let reactor = Solver::parse(&input).unwrap();
        let (&name, _) = reactor.ids.iter().find(|(_, id)| **id == 0).unwrap();
        assert!(std::ptr::eq(name.as_ptr(), input.as_ptr()));
        assert!(matches!(Solver::parse(": b"), Err(ParseError::InvalidFormat(_))));
    }
}
