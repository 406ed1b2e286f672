// src/grid/cell.rs

use crate::grid::{FLOOR, WALL};

/// Cell vocabulary of the random-walk carver. Cells start `Empty` and are
/// promoted to `Floor` as walkers pass over them; the promotion is never
/// reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Wall,
    Floor,
}

impl Occupancy {
    /// Collapses to the exported binary value: floors are passable,
    /// everything else is blocked.
    pub fn to_binary(self) -> u8 {
        match self {
            Occupancy::Floor => FLOOR,
            Occupancy::Empty | Occupancy::Wall => WALL,
        }
    }
}

/// Cell vocabulary of the cellular-automata smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Dead,
    Alive,
}

impl LifeState {
    /// Alive cells export as walls, dead cells as open floor.
    pub fn to_binary(self) -> u8 {
        match self {
            LifeState::Alive => WALL,
            LifeState::Dead => FLOOR,
        }
    }
}
