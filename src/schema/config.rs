//! Configuration types for the Life engine and its driver.

use serde::{Deserialize, Serialize};

use crate::compute::{LifeError, UpdateStrategy};

/// Engine configuration. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid width in cells (columns).
    pub width: usize,
    /// Grid height in cells (rows).
    pub height: usize,
    /// Cell evaluation strategy. Does not affect results.
    pub strategy: UpdateStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
            strategy: UpdateStrategy::Frontier,
        }
    }
}

impl EngineConfig {
    /// Get total grid size (width * height), or `None` if it overflows.
    #[inline]
    pub fn grid_size(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.width == 0 || self.height == 0 || self.grid_size().is_none() {
            return Err(LifeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Timing and input parameters for the simulation driver.
///
/// None of these affect engine semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Edge length of one cell in pixels.
    pub cell_size: f64,
    /// Delay between ticks in milliseconds.
    pub tick_interval_ms: u32,
    /// Lower bound for the tick interval.
    pub min_interval_ms: u32,
    /// Upper bound for the tick interval.
    pub max_interval_ms: u32,
    /// Interval change per speed adjustment.
    pub interval_step_ms: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            tick_interval_ms: 100,
            min_interval_ms: 1,
            max_interval_ms: 1500,
            interval_step_ms: 10,
        }
    }
}

impl DriverConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.max_interval_ms {
            return Err(ConfigError::InvalidIntervalBounds {
                min: self.min_interval_ms,
                max: self.max_interval_ms,
            });
        }
        if !(self.min_interval_ms..=self.max_interval_ms).contains(&self.tick_interval_ms) {
            return Err(ConfigError::IntervalOutOfRange {
                interval: self.tick_interval_ms,
                min: self.min_interval_ms,
                max: self.max_interval_ms,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Cell size must be a positive number of pixels (got {0})")]
    InvalidCellSize(f64),
    #[error("Tick interval bounds must satisfy 0 < min <= max (got {min}..={max})")]
    InvalidIntervalBounds { min: u32, max: u32 },
    #[error("Tick interval {interval}ms is outside {min}..={max}ms")]
    IntervalOutOfRange { interval: u32, min: u32, max: u32 },
    #[error("Engine configuration failed: {0}")]
    Engine(#[from] LifeError),
}
