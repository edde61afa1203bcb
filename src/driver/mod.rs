//! Driver module - Timing and pointer collaborators for a [`LifeEngine`](crate::LifeEngine).
//!
//! The engine itself never runs on its own. A host (browser timer, game loop, test)
//! owns a [`Simulation`], forwards clicks to it, and calls `tick` at the configured interval.

mod controller;

pub use controller::*;
