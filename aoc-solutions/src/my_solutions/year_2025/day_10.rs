use anyhow::{anyhow, Context};
use aoc_solver::{parse_lines, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["linear-algebra", "search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    lights: Vec<bool>,
    /// Raw wiring: indices listed for each button
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_machine)
    }
}

fn delimited<'a>(token: &'a str, open: char, close: char) -> Option<&'a str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

fn parse_list<T: std::str::FromStr>(body: &str) -> anyhow::Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    body.split(',')
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().parse::<T>().with_context(|| format!("invalid number {:?}", v)))
        .collect()
}

fn parse_machine(line: &str) -> anyhow::Result<Machine> {
    let mut lights = None;
    let mut buttons = Vec::new();
    let mut joltage = None;

    for token in line.split_whitespace() {
        if let Some(pattern) = delimited(token, '[', ']') {
            lights = Some(
                pattern
                    .chars()
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(anyhow!("unexpected light {:?}", other)),
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?,
            );
        } else if let Some(wiring) = delimited(token, '(', ')') {
            buttons.push(parse_list(wiring)?);
        } else if let Some(targets) = delimited(token, '{', '}') {
            joltage = Some(parse_list(targets)?);
        } else {
            return Err(anyhow!("unexpected token {:?}", token));
        }
    }

    // One bit per button plus the target bit must fit a u64 row
    if buttons.len() >= 64 {
        return Err(anyhow!("too many buttons ({})", buttons.len()));
    }

    Ok(Machine {
        lights: lights.ok_or_else(|| anyhow!("missing light pattern"))?,
        buttons,
        joltage: joltage.ok_or_else(|| anyhow!("missing joltage requirements"))?,
    })
}

impl Machine {
    /// Button columns restricted to the first `len` positions
    fn wiring(&self, len: usize) -> impl Iterator<Item = impl Iterator<Item = usize> + '_> + '_ {
        self.buttons
            .iter()
            .map(move |b| b.iter().copied().filter(move |&i| i < len))
    }

    /// Fewest presses that toggle every light into the pattern, over GF(2).
    fn min_toggle_presses(&self) -> Option<u32> {
        let n = self.buttons.len();
        let m = self.lights.len();

        // Row per light: bit j = button j toggles it, bit n = target
        let mut rows: Vec<u64> = self
            .lights
            .iter()
            .map(|&on| u64::from(on) << n)
            .collect();
        for (j, wires) in self.wiring(m).enumerate() {
            for i in wires {
                rows[i] ^= 1 << j;
            }
        }

        let mut pivots: Vec<usize> = Vec::new();
        for col in 0..n {
            let rank = pivots.len();
            let Some(found) = (rank..m).find(|&r| rows[r] >> col & 1 == 1) else {
                continue;
            };
            rows.swap(rank, found);
            for r in 0..m {
                if r != rank && rows[r] >> col & 1 == 1 {
                    rows[r] ^= rows[rank];
                }
            }
            pivots.push(col);
        }

        // Rows left over reduce to 0 = rhs
        if rows[pivots.len()..].iter().any(|&row| row >> n & 1 == 1) {
            return None;
        }

        let pivot_mask: u64 = pivots.iter().map(|&c| 1u64 << c).sum();
        let free: Vec<usize> = (0..n).filter(|&c| pivot_mask >> c & 1 == 0).collect();
        let var_mask = (1u64 << n) - 1;

        (0u64..1 << free.len())
            .map(|assignment| {
                let mut x: u64 = free
                    .iter()
                    .enumerate()
                    .filter(|&(bit, _)| assignment >> bit & 1 == 1)
                    .map(|(_, &c)| 1u64 << c)
                    .sum();
                let free_bits = x;
                for (r, &col) in pivots.iter().enumerate() {
                    let parity = (rows[r] & var_mask & free_bits).count_ones() & 1;
                    if (rows[r] >> n & 1) as u32 ^ parity == 1 {
                        x |= 1 << col;
                    }
                }
                x.count_ones()
            })
            .min()
    }

    /// Fewest presses so every counter reaches its target exactly.
    ///
    /// Integer elimination to reduced row-echelon form, then a bounded search
    /// over the free buttons; pivot buttons follow from each row.
    fn min_joltage_presses(&self) -> Option<u64> {
        let n = self.buttons.len();
        let m = self.joltage.len();

        // Row per counter: coefficient per button, then the target
        let mut rows: Vec<Vec<i64>> = self
            .joltage
            .iter()
            .map(|&t| {
                let mut row = vec![0; n + 1];
                row[n] = t as i64;
                row
            })
            .collect();
        let mut touches: Vec<Vec<usize>> = Vec::with_capacity(n);
        for (j, wires) in self.wiring(m).enumerate() {
            let mut counters = Vec::new();
            for i in wires {
                if rows[i][j] == 0 {
                    rows[i][j] = 1;
                    counters.push(i);
                }
            }
            touches.push(counters);
        }

        let mut pivots: Vec<usize> = Vec::new();
        for col in 0..n {
            let rank = pivots.len();
            let Some(found) = (rank..m).find(|&r| rows[r][col] != 0) else {
                continue;
            };
            rows.swap(rank, found);
            if rows[rank][col] < 0 {
                rows[rank].iter_mut().for_each(|v| *v = -*v);
            }
            let pivot_row = rows[rank].clone();
            for (r, row) in rows.iter_mut().enumerate() {
                let factor = row[col];
                if r == rank || factor == 0 {
                    continue;
                }
                for (v, &p) in row.iter_mut().zip(&pivot_row) {
                    *v = *v * pivot_row[col] - p * factor;
                }
                normalize(row);
            }
            pivots.push(col);
        }

        if rows[pivots.len()..].iter().any(|row| row[n] != 0) {
            return None;
        }

        let mut is_pivot = vec![false; n];
        pivots.iter().for_each(|&c| is_pivot[c] = true);
        // A free button can never be pressed more often than its smallest target allows
        let free: Vec<(usize, i64)> = (0..n)
            .filter(|&c| !is_pivot[c])
            .map(|c| {
                let bound = touches[c].iter().map(|&i| self.joltage[i]).min().unwrap_or(0);
                (c, bound as i64)
            })
            .collect();

        let system = Reduced {
            rows: &rows[..pivots.len()],
            pivots: &pivots,
            free: &free,
            n,
        };
        let mut best = None;
        let mut values = vec![0i64; free.len()];
        system.search(0, 0, &mut values, &mut best);
        best.map(|b| b as u64)
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

fn normalize(row: &mut [i64]) {
    let g = row.iter().fold(0, |g, &v| gcd(g, v));
    if g > 1 {
        row.iter_mut().for_each(|v| *v /= g);
    }
}

/// Pivot rows of the reduced system plus the free columns and their bounds
struct Reduced<'s> {
    rows: &'s [Vec<i64>],
    pivots: &'s [usize],
    free: &'s [(usize, i64)],
    n: usize,
}

impl Reduced<'_> {
    fn search(&self, depth: usize, cost: i64, values: &mut Vec<i64>, best: &mut Option<i64>) {
        if best.is_some_and(|b| cost >= b) {
            return;
        }
        if depth == self.free.len() {
            if let Some(pivot_cost) = self.pivot_cost(values) {
                let total = cost + pivot_cost;
                if best.is_none_or(|b| total < b) {
                    *best = Some(total);
                }
            }
            return;
        }

        let (_, bound) = self.free[depth];
        for v in 0..=bound {
            values[depth] = v;
            self.search(depth + 1, cost + v, values, best);
        }
        values[depth] = 0;
    }

    /// Presses of the pivot buttons implied by the free ones, if all are whole and non-negative.
    fn pivot_cost(&self, values: &[i64]) -> Option<i64> {
        self.rows
            .iter()
            .zip(self.pivots)
            .map(|(row, &col)| {
                let rest: i64 = self
                    .free
                    .iter()
                    .zip(values)
                    .map(|(&(c, _), &v)| row[c] * v)
                    .sum();
                let rhs = row[self.n] - rest;
                let p = row[col];
                (rhs % p == 0 && rhs / p >= 0).then_some(rhs / p)
            })
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(idx, machine)| {
                machine
                    .min_toggle_presses()
                    .map(u64::from)
                    .ok_or_else(|| SolveError::NoSolution(format!("machine {}", idx + 1)))
            })
            .sum::<Result<u64, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let presses = shared
            .par_iter()
            .enumerate()
            .map(|(idx, machine)| {
                machine
                    .min_joltage_presses()
                    .ok_or_else(|| SolveError::NoSolution(format!("machine {}", idx + 1)))
            })
            .collect::<Result<Vec<u64>, _>>()?;
        Ok(presses.iter().sum::<u64>().to_string())
    }
}
