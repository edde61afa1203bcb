//! Seed types for initializing Life grids.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::compute::{Grid, LifeError};

/// Complete seed specification for engine initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
///
/// Positions are the top-left corner of the pattern's bounding box. Cells that land
/// outside the grid are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    #[default]
    Empty,
    /// Period-2 oscillator: three cells in a line.
    Blinker {
        row: usize,
        col: usize,
        /// Vertical orientation instead of horizontal.
        #[serde(default)]
        vertical: bool,
    },
    /// 2x2 still life.
    Block { row: usize, col: usize },
    /// South-east travelling glider.
    Glider { row: usize, col: usize },
    /// Explicit list of live (row, col) cells.
    Cells { cells: Vec<(usize, usize)> },
    /// Uniform random noise.
    Noise {
        /// Probability of a cell being alive, clamped to [0, 1].
        density: f64,
        /// Random seed.
        seed: u64,
    },
}

const BLOCK: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

impl Seed {
    /// Write the pattern's live cells into `grid`. Existing live cells are kept.
    pub fn apply(&self, grid: &mut Grid) {
        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Blinker { row, col, vertical } => {
                let cells: Vec<_> = (0..3)
                    .map(|i| if *vertical { (i, 0) } else { (0, i) })
                    .collect();
                place(grid, *row, *col, &cells);
            }
            Pattern::Block { row, col } => place(grid, *row, *col, &BLOCK),
            Pattern::Glider { row, col } => place(grid, *row, *col, &GLIDER),
            Pattern::Cells { cells } => place(grid, 0, 0, cells),
            Pattern::Noise { density, seed } => apply_noise(grid, *density, *seed),
        }
    }

    /// Generate a fresh grid from the seed.
    pub fn generate(&self, width: usize, height: usize) -> Result<Grid, LifeError> {
        let mut grid = Grid::new(width, height)?;
        self.apply(&mut grid);
        Ok(grid)
    }
}

fn place(grid: &mut Grid, row: usize, col: usize, cells: &[(usize, usize)]) {
    for &(dr, dc) in cells {
        let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
            continue;
        };
        if grid.contains(r, c) {
            let idx = grid.idx(r, c);
            grid.set_idx(idx, true);
        }
    }
}

fn apply_noise(grid: &mut Grid, density: f64, seed: u64) {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = StdRng::seed_from_u64(seed);

    for idx in 0..grid.len() {
        if rng.gen_bool(density) {
            grid.set_idx(idx, true);
        }
    }
}
