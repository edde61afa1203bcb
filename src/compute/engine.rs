//! Life engine - owns the grid and advances it one generation at a time.
//!
//! The engine has no notion of "running": a timing collaborator calls [`LifeEngine::step`]
//! once per tick, an input collaborator calls [`LifeEngine::toggle_cell`], and a renderer
//! reads [`LifeEngine::grid`] and [`LifeEngine::generation`].

use serde::{Deserialize, Serialize};

use crate::schema::{EngineConfig, Seed};

use super::{Frontier, Grid, LifeError, UpdateStrategy, evolve_frontier, evolve_full};

/// Coarse engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Every cell is dead; `step` is a no-op.
    Quiescent,
    /// At least one cell is alive.
    Active,
}

/// Bounded Game of Life engine (B3/S23, no wraparound).
#[derive(Debug, Clone)]
pub struct LifeEngine {
    config: EngineConfig,
    grid: Grid,
    /// Pre-allocated buffer for the next generation (swapped in each step).
    next: Grid,
    /// Pre-allocated frontier scratch, unused by the full strategy.
    frontier: Frontier,
    generation: u64,
}

impl LifeEngine {
    /// Create an all-dead `height x width` engine with the default strategy.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        Self::with_config(EngineConfig {
            width,
            height,
            ..EngineConfig::default()
        })
    }

    /// Create an all-dead engine from configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, LifeError> {
        config.validate()?;

        let grid = Grid::new(config.width, config.height)?;
        let next = grid.clone();
        let frontier = Frontier::new(grid.len());

        Ok(Self {
            config,
            grid,
            next,
            frontier,
            generation: 0,
        })
    }

    /// Create an engine and apply a seed pattern to it.
    pub fn from_seed(seed: &Seed, config: EngineConfig) -> Result<Self, LifeError> {
        let mut engine = Self::with_config(config)?;
        seed.apply(&mut engine.grid);
        Ok(engine)
    }

    /// Flip a cell and return its new state. Leaves the generation counter alone.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.grid.toggle(row, col)
    }

    /// Read a cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.grid.get(row, col)
    }

    /// Kill every cell and reset the generation counter.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        log::debug!("engine reset ({}x{})", self.width(), self.height());
    }

    /// True iff every cell is dead.
    pub fn is_quiescent(&self) -> bool {
        self.grid.is_all_dead()
    }

    pub fn state(&self) -> EngineState {
        if self.is_quiescent() {
            EngineState::Quiescent
        } else {
            EngineState::Active
        }
    }

    /// Advance one generation and return the new grid.
    ///
    /// On a quiescent grid this is a no-op that resets the generation counter to 0.
    /// Quiescence is only checked here, before evaluating: a step that kills the last
    /// live cell still counts as a generation, and the following step resets the counter.
    pub fn step(&mut self) -> &Grid {
        if self.is_quiescent() {
            if self.generation != 0 {
                log::debug!("quiescent after {} generations", self.generation);
            }
            self.generation = 0;
            return &self.grid;
        }

        match self.config.strategy {
            UpdateStrategy::Full => evolve_full(&self.grid, &mut self.next),
            UpdateStrategy::Frontier => {
                evolve_frontier(&self.grid, &mut self.next, &mut self.frontier)
            }
        }

        // Swap buffers (no allocation, just pointer swap)
        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.grid.population()
        );

        &self.grid
    }

    /// Run the engine for the specified number of steps.
    pub fn run(&mut self, steps: u64) -> &Grid {
        for _ in 0..steps {
            self.step();
        }
        &self.grid
    }

    /// Current grid (read-only).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Generations since construction, reset or quiescence.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Get configuration reference.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> GenerationStats {
        GenerationStats::from_engine(self)
    }
}

/// Engine statistics for monitoring and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub population: usize,
    pub width: usize,
    pub height: usize,
    pub state: EngineState,
}

impl GenerationStats {
    /// Compute statistics from the engine.
    pub fn from_engine(engine: &LifeEngine) -> Self {
        let population = engine.grid.population();
        Self {
            generation: engine.generation,
            population,
            width: engine.width(),
            height: engine.height(),
            state: if population == 0 {
                EngineState::Quiescent
            } else {
                EngineState::Active
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Pattern;
    use proptest::prelude::*;

    fn engine_with(width: usize, height: usize, live: &[(usize, usize)]) -> LifeEngine {
        let mut engine = LifeEngine::new(width, height).unwrap();
        for &(r, c) in live {
            engine.toggle_cell(r, c).unwrap();
        }
        engine
    }

    fn live(engine: &LifeEngine) -> Vec<(usize, usize)> {
        engine.grid().live_cells().collect()
    }

    #[test]
    fn test_construction() {
        let engine = LifeEngine::new(7, 4).unwrap();
        assert_eq!(engine.width(), 7);
        assert_eq!(engine.height(), 4);
        assert_eq!(engine.generation(), 0);
        assert!(engine.is_quiescent());
        assert_eq!(engine.state(), EngineState::Quiescent);
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            LifeEngine::new(0, 10),
            Err(LifeError::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            LifeEngine::new(10, 0),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            LifeEngine::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut engine = LifeEngine::new(5, 3).unwrap();
        assert!(matches!(
            engine.toggle_cell(3, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            engine.toggle_cell(0, 5),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            engine.cell(usize::MAX, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(engine.is_quiescent());
    }

    #[test]
    fn test_step_on_dead_grid_is_noop() {
        for strategy in [UpdateStrategy::Full, UpdateStrategy::Frontier] {
            let mut engine = LifeEngine::with_config(EngineConfig {
                width: 6,
                height: 6,
                strategy,
            })
            .unwrap();
            let before = engine.grid().clone();
            let after = engine.step().clone();
            assert_eq!(before, after);
            assert_eq!(engine.generation(), 0);
        }
    }

    #[test]
    fn test_underpopulation() {
        let mut engine = engine_with(5, 5, &[(2, 2)]);
        engine.step();
        assert!(engine.is_quiescent());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_overpopulation() {
        // Plus shape: center has 4 live neighbors.
        let mut engine = engine_with(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
        engine.step();
        assert_eq!(engine.cell(2, 2), Ok(false));
    }

    #[test]
    fn test_birth() {
        let mut engine = engine_with(5, 5, &[(1, 1), (1, 3), (3, 3)]);
        engine.step();
        assert_eq!(engine.cell(2, 2), Ok(true));
    }

    #[test]
    fn test_blinker_period_two() {
        let mut engine = engine_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let start = live(&engine);

        engine.step();
        assert_eq!(live(&engine), vec![(1, 2), (2, 2), (3, 2)]);

        engine.step();
        assert_eq!(live(&engine), start);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_block_stable() {
        let mut engine = engine_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let start = engine.grid().clone();
        for _ in 0..10 {
            assert_eq!(engine.step(), &start);
        }
        assert_eq!(engine.generation(), 10);
    }

    #[test]
    fn test_corner_cell_ignores_missing_neighbors() {
        // Corner L-tromino: each corner-adjacent cell sees only in-bounds cells.
        let mut engine = engine_with(3, 3, &[(0, 0), (0, 1), (1, 0)]);
        engine.step();
        // Becomes a block: (1, 1) is born with exactly 3 neighbors.
        assert_eq!(live(&engine), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_generation_resets_after_dying_out() {
        let mut engine = engine_with(5, 5, &[(0, 0), (4, 4)]);
        engine.step();
        assert!(engine.is_quiescent());
        assert_eq!(engine.generation(), 1);

        engine.step();
        assert_eq!(engine.generation(), 0);
        assert!(engine.is_quiescent());
    }

    #[test]
    fn test_toggle_reactivates() {
        let mut engine = LifeEngine::new(3, 3).unwrap();
        assert_eq!(engine.toggle_cell(1, 1), Ok(true));
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_reset() {
        let mut engine = engine_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        engine.run(3);
        assert_eq!(engine.generation(), 3);

        engine.reset();
        assert!(engine.is_quiescent());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_strategies_agree_on_glider() {
        let seed = Seed {
            pattern: Pattern::Glider { row: 0, col: 0 },
        };
        let mut full = LifeEngine::from_seed(
            &seed,
            EngineConfig {
                width: 12,
                height: 10,
                strategy: UpdateStrategy::Full,
            },
        )
        .unwrap();
        let mut frontier = LifeEngine::from_seed(
            &seed,
            EngineConfig {
                width: 12,
                height: 10,
                strategy: UpdateStrategy::Frontier,
            },
        )
        .unwrap();

        // Long enough for the glider to crash into the bottom-right corner.
        for _ in 0..60 {
            assert_eq!(full.step(), frontier.step());
            assert_eq!(full.generation(), frontier.generation());
        }
    }

    #[test]
    fn test_stats() {
        let engine = engine_with(6, 4, &[(1, 1), (2, 2)]);
        let stats = engine.stats();
        assert_eq!(stats.population, 2);
        assert_eq!(stats.generation, 0);
        assert_eq!(stats.width, 6);
        assert_eq!(stats.height, 4);
        assert_eq!(stats.state, EngineState::Active);
    }

    proptest! {
        #[test]
        fn prop_toggle_is_involution(
            cells in proptest::collection::vec((0usize..9, 0usize..7), 0..30),
            target in (0usize..9, 0usize..7),
        ) {
            let mut engine = LifeEngine::new(7, 9).unwrap();
            for (r, c) in cells {
                engine.grid.set(r, c, true).unwrap();
            }
            let before = engine.grid().clone();

            engine.toggle_cell(target.0, target.1).unwrap();
            prop_assert_ne!(engine.grid(), &before);
            engine.toggle_cell(target.0, target.1).unwrap();

            prop_assert_eq!(engine.grid(), &before);
            prop_assert_eq!(engine.generation(), 0);
        }
    }
}
