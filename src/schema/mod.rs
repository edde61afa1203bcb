//! Schema module - Configuration and seeding types for Life engines.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
