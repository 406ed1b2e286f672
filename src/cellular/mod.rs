// src/cellular/mod.rs
pub mod generator;

pub use generator::{CellularAutomataGenerator, CellularConfig};
