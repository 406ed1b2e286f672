// src/composite/mod.rs
pub mod grid;

pub use grid::CompositeGrid;
