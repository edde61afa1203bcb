//! Simulation controller: play/stop, ticking, speed and pointer input.

use crate::compute::{GenerationStats, LifeEngine, LifeError};
use crate::schema::{ConfigError, DriverConfig, EngineConfig, Seed};

/// Result of a single [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The simulation is stopped; nothing happened.
    Idle,
    /// The engine advanced to the given generation.
    Advanced(u64),
    /// The grid was all dead: the simulation stopped and the generation was reset.
    Halted,
}

/// Drives a [`LifeEngine`] the way a UI timer and pointer would.
///
/// The host calls [`Simulation::tick`] every [`Simulation::interval_ms`] milliseconds and
/// redraws from [`Simulation::engine`] afterwards.
#[derive(Debug, Clone)]
pub struct Simulation {
    engine: LifeEngine,
    config: DriverConfig,
    interval_ms: u32,
    running: bool,
}

impl Simulation {
    pub fn new(engine: LifeEngine, config: DriverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            engine,
            interval_ms: config.tick_interval_ms,
            config,
            running: false,
        })
    }

    /// Build the engine and the driver from their configurations.
    pub fn from_config(engine: EngineConfig, driver: DriverConfig) -> Result<Self, ConfigError> {
        Self::new(LifeEngine::with_config(engine)?, driver)
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub(crate) fn engine_mut(&mut self) -> &mut LifeEngine {
        &mut self.engine
    }

    /// Stop and replace the grid with a seed pattern, keeping the engine configuration.
    pub fn reseed(&mut self, seed: &Seed) {
        self.stop();
        self.engine.reset();
        seed.apply(self.engine.grid_mut());
        log::debug!("simulation reseeded with {:?}", seed.pattern);
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current tick interval in milliseconds.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Ticks per second at the current interval, rounded to one decimal.
    pub fn ticks_per_second(&self) -> f64 {
        (1000.0 / self.interval_ms as f64 * 10.0).round() / 10.0
    }

    /// Map a pixel position to the (row, col) of the cell under it.
    pub fn cell_at_pixel(&self, x: f64, y: f64) -> Result<(usize, usize), LifeError> {
        let col = (x / self.config.cell_size).floor();
        let row = (y / self.config.cell_size).floor();
        let width = self.engine.width();
        let height = self.engine.height();

        let in_range = |v: f64, len: usize| v >= 0.0 && v < len as f64;
        if in_range(row, height) && in_range(col, width) {
            Ok((row as usize, col as usize))
        } else {
            Err(LifeError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                height,
                width,
            })
        }
    }

    /// Toggle the cell under a pixel position. Returns the cell's new state.
    pub fn click(&mut self, x: f64, y: f64) -> Result<bool, LifeError> {
        let (row, col) = self.cell_at_pixel(x, y)?;
        self.engine.toggle_cell(row, col)
    }

    pub fn play(&mut self) {
        if !self.running {
            log::info!("simulation started at {}ms/tick", self.interval_ms);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "simulation stopped at generation {}",
                self.engine.generation()
            );
        }
        self.running = false;
    }

    /// Play if stopped, stop if playing. Returns whether the simulation now runs.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.play();
        }
        self.running
    }

    /// Advance one generation if running; stop when the grid has died out.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        if self.engine.is_quiescent() {
            // The engine's no-op step resets the generation counter.
            self.engine.step();
            self.stop();
            return TickOutcome::Halted;
        }
        self.engine.step();
        TickOutcome::Advanced(self.engine.generation())
    }

    /// Stop and kill every cell.
    pub fn clear(&mut self) {
        self.stop();
        self.engine.reset();
        log::debug!("simulation cleared");
    }

    /// Shorten the tick interval by one step.
    pub fn faster(&mut self) -> u32 {
        let step = self.config.interval_step_ms;
        self.set_interval(self.interval_ms.saturating_sub(step))
    }

    /// Lengthen the tick interval by one step.
    pub fn slower(&mut self) -> u32 {
        let step = self.config.interval_step_ms;
        self.set_interval(self.interval_ms.saturating_add(step))
    }

    /// Set the tick interval, clamped to the configured bounds. Returns the applied value.
    pub fn set_interval(&mut self, interval_ms: u32) -> u32 {
        let clamped = interval_ms.clamp(self.config.min_interval_ms, self.config.max_interval_ms);
        if clamped != interval_ms {
            log::debug!("tick interval {interval_ms}ms clamped to {clamped}ms");
        }
        self.interval_ms = clamped;
        clamped
    }

    pub fn stats(&self) -> GenerationStats {
        self.engine.stats()
    }
}
