// src/grid/binary_map.rs

use crate::grid::{FLOOR, WALL};

/// A width x height binary occupancy matrix backed by a single flat buffer
/// indexed `row * width + col` (row = y, col = x). `0` means passable floor,
/// `1` means blocked wall. Every cell is zero-initialized at construction.
///
/// # Examples
///
/// ```
/// use cavegen::grid::BinaryMap;
///
/// let mut map = BinaryMap::new(3, 2);
/// assert_eq!(map.get(2, 1), 0);
/// map.set(2, 1, 1);
/// assert_eq!(map.get(2, 1), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMap {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl BinaryMap {
    pub fn new(width: usize, height: usize) -> Self {
        BinaryMap {
            width,
            height,
            cells: vec![FLOOR; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y * self.width + x] = value;
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == WALL
    }

    /// Iterates the matrix one row slice at a time, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// Number of cells currently holding the given binary value.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }
}
