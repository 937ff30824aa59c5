use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["backtracking", "packing"])]
pub struct Solver;

/// Cell offsets relative to the first cell in row-major order
type Orientation = Vec<(i32, i32)>;

#[derive(Debug, Clone)]
pub struct Shape {
    orientations: Vec<Orientation>,
    cells: usize,
    height: usize,
    width: usize,
}

impl Shape {
    fn from_rows(rows: &[&str]) -> anyhow::Result<Self> {
        let cells: Vec<(i32, i32)> = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'#')
                    .map(move |(c, _)| (r as i32, c as i32))
            })
            .collect();
        if cells.is_empty() {
            return Err(anyhow!("shape has no cells"));
        }
        if let Some(bad) = rows.iter().flat_map(|r| r.chars()).find(|&c| c != '#' && c != '.') {
            return Err(anyhow!("unexpected shape character {:?}", bad));
        }

        // Four rotations of the shape and of its mirror image
        let transforms: [fn((i32, i32)) -> (i32, i32); 8] = [
            |(r, c)| (r, c),
            |(r, c)| (c, -r),
            |(r, c)| (-r, -c),
            |(r, c)| (-c, r),
            |(r, c)| (r, -c),
            |(r, c)| (-c, -r),
            |(r, c)| (-r, c),
            |(r, c)| (c, r),
        ];
        let orientations = transforms
            .iter()
            .map(|t| {
                let mut moved: Vec<(i32, i32)> = cells.iter().map(|&p| t(p)).collect();
                moved.sort_unstable();
                let (ar, ac) = moved[0];
                moved.into_iter().map(|(r, c)| (r - ar, c - ac)).collect::<Orientation>()
            })
            .unique()
            .collect();

        Ok(Self {
            orientations,
            cells: cells.len(),
            height: rows.len(),
            width: rows.iter().map(|r| r.len()).max().unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: usize,
    height: usize,
    /// Presents required per shape index
    counts: Vec<usize>,
}

#[derive(Debug)]
pub struct Farm {
    shapes: Vec<Shape>,
    regions: Vec<Region>,
}

impl AocParser for Solver {
    type SharedData<'a> = Farm;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_farm(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_farm(input: &str) -> anyhow::Result<Farm> {
    let mut shapes = Vec::new();
    let mut regions = Vec::new();
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(idx, l)| (idx + 1, l.trim_end()))
        .collect();

    let mut i = 0;
    while i < lines.len() {
        let (line_no, line) = lines[i];
        i += 1;
        if line.is_empty() {
            continue;
        }
        let (head, rest) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("(line {}) expected `N:` or `WxH: counts`", line_no))?;

        if let Some((w, h)) = head.split_once('x') {
            let region = parse_region(w, h, rest, shapes.len())
                .with_context(|| format!("(line {}) invalid region", line_no))?;
            regions.push(region);
            continue;
        }

        let index: usize = head
            .trim()
            .parse()
            .with_context(|| format!("(line {}) invalid shape index {:?}", line_no, head))?;
        if index != shapes.len() {
            return Err(anyhow!("(line {}) expected shape {}, got {}", line_no, shapes.len(), index));
        }
        let start = i;
        while i < lines.len() && !lines[i].1.is_empty() {
            i += 1;
        }
        let rows: Vec<&str> = lines[start..i].iter().map(|&(_, l)| l).collect();
        shapes.push(Shape::from_rows(&rows).with_context(|| format!("(line {}) shape {}", line_no, index))?);
    }

    Ok(Farm { shapes, regions })
}

fn parse_region(w: &str, h: &str, counts: &str, shape_count: usize) -> anyhow::Result<Region> {
    let mut counts: Vec<usize> = counts
        .split_whitespace()
        .map(|c| c.parse().with_context(|| format!("invalid count {:?}", c)))
        .collect::<anyhow::Result<_>>()?;
    if counts.iter().skip(shape_count).any(|&c| c > 0) {
        return Err(anyhow!("counts reference undefined shapes"));
    }
    counts.resize(shape_count, 0);

    Ok(Region {
        width: w.trim().parse().context("invalid width")?,
        height: h.trim().parse().context("invalid height")?,
        counts,
    })
}

/// Search position, occupancy from there on, and presents still to place
type SearchState = (usize, Vec<u64>, Vec<usize>);

/// Backtracking state for one region
struct Packing<'s> {
    shapes: &'s [Shape],
    width: usize,
    height: usize,
    taken: Vec<bool>,
    remaining: Vec<usize>,
    left: usize,
    /// Farthest cell any orientation covers, counted from its anchor
    reach: usize,
    /// States already shown to have no completion
    dead: HashSet<SearchState>,
}

impl<'s> Packing<'s> {
    fn new(shapes: &'s [Shape], region: &Region) -> Self {
        let width = region.width as i64;
        let reach = shapes
            .iter()
            .flat_map(|s| s.orientations.iter().flatten())
            .map(|&(dr, dc)| dr as i64 * width + dc as i64)
            .max()
            .unwrap_or(0)
            .max(0) as usize;

        Self {
            shapes,
            width: region.width,
            height: region.height,
            taken: vec![false; region.width * region.height],
            remaining: region.counts.clone(),
            left: region.counts.iter().sum(),
            reach,
            dead: HashSet::new(),
        }
    }

    fn fits(&self, pos: usize, orientation: &Orientation) -> bool {
        let (r0, c0) = ((pos / self.width) as i32, (pos % self.width) as i32);
        orientation.iter().all(|&(dr, dc)| {
            let (r, c) = (r0 + dr, c0 + dc);
            c >= 0
                && (c as usize) < self.width
                && (r as usize) < self.height
                && !self.taken[r as usize * self.width + c as usize]
        })
    }

    fn mark(&mut self, pos: usize, orientation: &Orientation, value: bool) {
        let (r0, c0) = ((pos / self.width) as i32, (pos % self.width) as i32);
        for &(dr, dc) in orientation {
            self.taken[(r0 + dr) as usize * self.width + (c0 + dc) as usize] = value;
        }
    }

    /// Cells past `pos + reach` are always free, so this window plus the
    /// remaining counts decide the outcome of the search from `pos`.
    fn state(&self, pos: usize) -> SearchState {
        let end = (pos + self.reach + 1).min(self.taken.len());
        let mut bits = vec![0u64; (end - pos).div_ceil(64)];
        for (i, _) in self.taken[pos..end].iter().enumerate().filter(|&(_, &t)| t) {
            bits[i / 64] |= 1 << (i % 64);
        }
        (pos, bits, self.remaining.clone())
    }

    /// Decide the first undecided cell at or after `pos`: cover it with a
    /// present anchored there, or leave it empty while `slack` allows.
    fn fill(&mut self, mut pos: usize, slack: usize) -> bool {
        if self.left == 0 {
            return true;
        }
        while pos < self.taken.len() && self.taken[pos] {
            pos += 1;
        }
        if pos == self.taken.len() {
            return false;
        }

        let state = self.state(pos);
        if self.dead.contains(&state) {
            return false;
        }
        if self.place_at(pos, slack) {
            return true;
        }
        self.dead.insert(state);
        false
    }

    fn place_at(&mut self, pos: usize, slack: usize) -> bool {
        let shapes = self.shapes;
        for (idx, shape) in shapes.iter().enumerate() {
            if self.remaining[idx] == 0 {
                continue;
            }
            for orientation in &shape.orientations {
                if !self.fits(pos, orientation) {
                    continue;
                }
                self.mark(pos, orientation, true);
                self.remaining[idx] -= 1;
                self.left -= 1;
                let done = self.fill(pos + 1, slack);
                self.left += 1;
                self.remaining[idx] += 1;
                self.mark(pos, orientation, false);
                if done {
                    return true;
                }
            }
        }

        if slack > 0 {
            self.taken[pos] = true;
            let done = self.fill(pos + 1, slack - 1);
            self.taken[pos] = false;
            return done;
        }
        false
    }
}

fn region_fits(shapes: &[Shape], region: &Region) -> bool {
    let area = region.width * region.height;
    let needed: usize = shapes.iter().zip(&region.counts).map(|(s, &n)| s.cells * n).sum();
    if needed > area {
        return false;
    }

    let presents: usize = region.counts.iter().sum();
    if presents == 0 {
        return true;
    }
    // Every present in its own bounding-box tile
    let tile_h = shapes.iter().map(|s| s.height).max().unwrap_or(1).max(1);
    let tile_w = shapes.iter().map(|s| s.width).max().unwrap_or(1).max(1);
    if (region.width / tile_w) * (region.height / tile_h) >= presents {
        return true;
    }

    Packing::new(shapes, region).fill(0, area - needed)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .regions
            .iter()
            .filter(|region| region_fits(&shared.shapes, region))
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn test_example_regions_individually() {
        let farm = Solver::parse(EXAMPLE).unwrap();
        let fits: Vec<bool> = farm.regions.iter().map(|r| region_fits(&farm.shapes, r)).collect();
        assert_eq!(fits, vec![true, true, false]);
    }

    #[test]
    fn test_orientations_deduplicated() {
        let farm = Solver::parse(EXAMPLE).unwrap();
        // shape 5 is symmetric under a half turn and both mirrors
        assert_eq!(farm.shapes[5].orientations.len(), 2);
        assert_eq!(farm.shapes[0].orientations.len(), 8);
        assert_eq!(farm.shapes[4].orientations.len(), 4);
    }

    #[test]
    fn test_rotation_needed() {
        // The S tetromino only fits the tall region after a quarter turn
        let input = "0:\n##.\n.##\n\n3x2: 1\n2x3: 1\n";
        let mut farm = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut farm, 1).unwrap(), "2");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("1:\n#\n").is_err());
        assert!(Solver::parse("0:\n#\n\n2x2: 1 1\n").is_err());
        assert!(Solver::parse("0:\n#x\n").is_err());
        let err = Solver::parse("0:\n#\n\nAxB: 1\n").unwrap_err();
        assert!(err.to_string().contains("line 4"), "{}", err);
    }
}
