//! Rectangular byte grids

use aoc_solver::ParseError;

/// Offsets of the eight surrounding cells
pub const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of ASCII cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse non-empty lines into a grid; every row must have the same width.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (idx, line) in input.lines().map(str::trim_end).filter(|l| !l.is_empty()).enumerate() {
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(row {}) expected width {}, got {}",
                        idx + 1,
                        w,
                        line.len()
                    )));
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".into()))?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)`, or `None` when outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrite a cell inside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.width + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// All `(row, col)` positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let width = self.width;
        (0..self.height * width).map(move |i| (i / width, i % width))
    }

    /// Positions of the in-bounds cells among the eight neighbours of `(row, col)`.
    pub fn neighbors8(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBORS_8.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }

    /// First position holding `value`, scanning row-major.
    pub fn find(&self, value: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == value)
            .map(|i| (i / self.width, i % self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let grid = Grid::parse("ab.\n.#c\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(1, 1), Some(b'#'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.row(1), b".#c");
        assert_eq!(grid.find(b'c'), Some((1, 2)));
        assert_eq!(grid.find(b'z'), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(matches!(Grid::parse("abc\nab"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Grid::parse("\n\n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        assert_eq!(grid.neighbors8(0, 0).count(), 3);
        assert_eq!(grid.neighbors8(0, 1).count(), 5);
        assert_eq!(grid.neighbors8(1, 1).count(), 8);
        assert_eq!(grid.positions().count(), 9);
    }
}
