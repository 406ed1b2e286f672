// src/random_walk/mod.rs
pub mod generator;
pub mod walker;

pub use generator::{RandomWalkConfig, RandomWalkGenerator};
pub use walker::Walker;

/// Hard cap on simulation ticks regardless of fill progress.
pub const MAX_ITERATIONS: u32 = 5000;
