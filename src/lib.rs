//! Life Engine - Conway's Game of Life on a bounded grid.
//!
//! This crate provides the update engine for a clickable Game of Life board: a fixed
//! `height x width` grid, the B3/S23 rule over the Moore neighborhood (no wraparound),
//! and a halt check for grids that have died out.
//!
//! # Architecture
//!
//! - `compute`: Grid, transition rule, generation stepping and the engine itself
//! - `schema`: Configuration types and seed patterns
//! - `driver`: Timer/pointer collaborator (play, stop, tick, speed, pixel clicks)
//!
//! # Example
//!
//! ```rust
//! use life_engine::{
//!     compute::LifeEngine,
//!     schema::{EngineConfig, Pattern, Seed},
//! };
//!
//! let seed = Seed {
//!     pattern: Pattern::Blinker { row: 2, col: 1, vertical: false },
//! };
//! let config = EngineConfig { width: 5, height: 5, ..EngineConfig::default() };
//! let mut engine = LifeEngine::from_seed(&seed, config).unwrap();
//!
//! let start = engine.grid().clone();
//! engine.run(2);
//! assert_eq!(engine.grid(), &start);
//! assert_eq!(engine.generation(), 2);
//! ```

pub mod compute;
pub mod driver;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{EngineState, GenerationStats, Grid, LifeEngine, LifeError, UpdateStrategy};
pub use driver::{Simulation, TickOutcome};
pub use schema::{DriverConfig, EngineConfig, Pattern, Seed};
