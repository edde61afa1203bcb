//! Compute module - Grid, transition rule and generation stepping.

mod engine;
mod evolve;
mod grid;
mod rules;

pub use engine::*;
pub use evolve::*;
pub use grid::*;
pub use rules::*;
