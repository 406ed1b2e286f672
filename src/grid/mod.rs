// src/grid/mod.rs
pub mod binary_map;
pub mod cell;

pub use binary_map::BinaryMap;
pub use cell::{LifeState, Occupancy};

// Exported binary cell values shared by every generator.
pub const FLOOR: u8 = 0;
pub const WALL: u8 = 1;
