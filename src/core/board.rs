//! Board grid.
//!
//! A `Board` is a `width x height` grid of tile values stored row-major in a
//! single owned buffer, origin at the top-left. `0` is an empty cell; every
//! other value is a power of two no smaller than 2. Dimensions are fixed at
//! construction.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Tile value. `u64` holds tiles far beyond any reachable game, up to
/// [`MAX_TILE`].
pub type Tile = u64;

/// Row-major grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

/// Largest representable tile. It never merges, so doubling cannot overflow.
pub const MAX_TILE: Tile = 1 << 63;

/// True for `0` and for powers of two from 2 upward.
#[must_use]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// True if two neighbouring tiles combine when they meet.
#[inline]
#[must_use]
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

impl Board {
    /// All-empty board.
    ///
    /// Fails with `InvalidConfiguration` if either dimension is zero.
    pub fn empty(width: usize, height: usize) -> GameResult<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::config(format!(
                "board dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self::zeroed(width, height))
    }

    /// Caller guarantees non-zero dimensions.
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a board from rows of tile values.
    ///
    /// Rows must be non-empty, of equal length, and contain only valid tiles.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> GameResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut board = Self::empty(width, height)?;

        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GameError::config(format!(
                    "row {row_idx} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (col, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::config(format!(
                        "tile {value} at ({row_idx}, {col}) is not 0 or a power of two"
                    )));
                }
                board.set(row_idx, col, value);
            }
        }
        Ok(board)
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(row, col)`, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[row * self.width + col] = value;
    }

    /// Raw row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    /// One column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<Tile> {
        (0..self.height).map(|row| self.cells[row * self.width + col]).collect()
    }

    /// Owned `Vec<Vec<_>>` snapshot, the observation format of the RL adapter.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    /// Largest tile, 0 on an empty board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles.
    #[must_use]
    pub fn tile_sum(&self) -> Tile {
        self.cells.iter().sum()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// True if two equal non-empty tiles touch horizontally or vertically.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        let horizontal = self
            .rows()
            .any(|row| row.windows(2).any(|w| can_merge(w[0], w[1])));
        if horizontal {
            return true;
        }
        (0..self.height.saturating_sub(1)).any(|row| {
            let (upper, lower) = (self.row(row), self.row(row + 1));
            upper.iter().zip(lower).any(|(&a, &b)| can_merge(a, b))
        })
    }

    /// Read one line in travel order: index 0 is the leading edge.
    ///
    /// `vertical` selects a column, `reversed` starts from the bottom/right.
    pub(crate) fn read_line(&self, index: usize, vertical: bool, reversed: bool, out: &mut Vec<Tile>) {
        out.clear();
        let len = self.line_len(vertical);
        for pos in 0..len {
            let pos = if reversed { len - 1 - pos } else { pos };
            let (row, col) = if vertical { (pos, index) } else { (index, pos) };
            out.push(self.cells[row * self.width + col]);
        }
    }

    /// Inverse of [`Board::read_line`].
    pub(crate) fn write_line(&mut self, index: usize, vertical: bool, reversed: bool, line: &[Tile]) {
        let len = line.len();
        for (pos, &value) in line.iter().enumerate() {
            let pos = if reversed { len - 1 - pos } else { pos };
            let (row, col) = if vertical { (pos, index) } else { (index, pos) };
            self.cells[row * self.width + col] = value;
        }
    }

    /// Number of lines for a direction: columns when vertical, rows otherwise.
    pub(crate) fn line_count(&self, vertical: bool) -> usize {
        if vertical {
            self.width
        } else {
            self.height
        }
    }

    /// Cells per line for a direction.
    pub(crate) fn line_len(&self, vertical: bool) -> usize {
        if vertical {
            self.height
        } else {
            self.width
        }
    }
}

impl std::ops::Index<(usize, usize)> for Board {
    type Output = Tile;

    fn index(&self, (row, col): (usize, usize)) -> &Tile {
        assert!(row < self.height && col < self.width, "cell ({row}, {col}) out of bounds");
        &self.cells[row * self.width + col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell_width = self.max_tile().to_string().len().max(1);
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>cell_width$}", ".")
                    } else {
                        format!("{v:>cell_width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
