//! Bounded cell grid for the Life engine.
//!
//! Cells are stored row-major as a flat `Vec<bool>` with indexing `row * width + col`.
//! The grid never wraps: positions beyond an edge do not exist and are never counted.

use std::fmt;

/// Offsets of the Moore neighborhood (8-connectivity), as `(d_row, d_col)`.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size `height x width` grid of alive/dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Fails with `InvalidDimension` for a zero dimension, or when `width * height` cells
    /// cannot be addressed or allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, false);

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Grid width (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell. See [`Grid::is_all_dead`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (row, col) to flat index. Caller guarantees bounds.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Convert flat index back to (row, col).
    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.width, idx % self.width)
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if self.contains(row, col) {
            Ok(self.idx(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Bounds-checked read of a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.check(row, col).map(|i| self.cells[i])
    }

    /// Bounds-checked write of a cell.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        let i = self.check(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, LifeError> {
        let i = self.check(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Unchecked read by flat index.
    #[inline]
    pub fn is_alive(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set_idx(&mut self, idx: usize, alive: bool) {
        self.cells[idx] = alive;
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// True iff every cell is dead.
    pub fn is_all_dead(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Flat indices of live cells, in row-major order.
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then_some(i))
    }

    /// (row, col) of live cells, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.live_indices().map(|i| self.coords(i))
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Raw row-major cell slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Flat indices of the in-bounds Moore neighbors of `idx`.
    ///
    /// Edge and corner cells yield fewer than 8 neighbors.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.coords(idx);
        MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.contains(r, c).then(|| self.idx(r, c))
        })
    }

    /// Number of live Moore neighbors of `idx` (0..=8).
    #[inline]
    pub fn live_neighbors(&self, idx: usize) -> u8 {
        self.neighbors(idx).filter(|&n| self.cells[n]).count() as u8
    }

    /// Bounds-checked neighbor count.
    pub fn live_neighbors_at(&self, row: usize, col: usize) -> Result<u8, LifeError> {
        self.check(row, col).map(|i| self.live_neighbors(i))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Grid construction and access errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("Grid dimensions must be positive (got {width}x{height})")]
    InvalidDimension { width: usize, height: usize },
    #[error("Cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },
}
