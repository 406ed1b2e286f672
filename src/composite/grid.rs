// src/composite/grid.rs
//! # Composite Grid
//!
//! Stitches the finished outputs of one random-walk generator and one
//! cellular-automata generator into a single larger occupancy matrix, ready
//! for tile instantiation.

use log::info;

use crate::cellular::CellularAutomataGenerator;
use crate::grid::BinaryMap;
use crate::random_walk::RandomWalkGenerator;
use crate::tile::{self, TextureId, Tile};

/// Merged coordinate space over two finished source generators. Holds
/// non-owning borrows, so both generators must outlive the composite; the
/// composite extent is the sum of the source extents along each axis.
pub struct CompositeGrid<'a> {
    random_walk: &'a RandomWalkGenerator,
    cellular: &'a CellularAutomataGenerator,
    offset_x: usize,
    offset_y: usize,
    width: usize,
    height: usize,
    data: BinaryMap,
}

impl<'a> CompositeGrid<'a> {
    /// Both sources must already have run `generate`. The offset positions
    /// the cellular region inside the composite; placements that would fall
    /// outside the composite extent are clipped, and overlap with the
    /// random-walk region is resolved last-writer-wins in favour of the
    /// cellular data.
    pub fn new(
        random_walk: &'a RandomWalkGenerator,
        cellular: &'a CellularAutomataGenerator,
        offset_x: usize,
        offset_y: usize,
    ) -> Self {
        let width = random_walk.width() + cellular.width();
        let height = random_walk.height() + cellular.height();
        CompositeGrid {
            random_walk,
            cellular,
            offset_x,
            offset_y,
            width,
            height,
            data: BinaryMap::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Merges both exported matrices into the composite matrix. Purely a
    /// copy of already-fixed source data, so repeated calls always reproduce
    /// the same result.
    pub fn generate(&mut self) {
        self.data = BinaryMap::new(self.width, self.height);

        let walk = self.random_walk.data();
        for y in 0..walk.height() {
            for x in 0..walk.width() {
                self.data.set(x, y, walk.get(x, y));
            }
        }

        let cave = self.cellular.data();
        for y in 0..cave.height() {
            for x in 0..cave.width() {
                let target_x = self.offset_x + x;
                let target_y = self.offset_y + y;
                if target_x < self.width && target_y < self.height {
                    self.data.set(target_x, target_y, cave.get(x, y));
                }
            }
        }

        info!(
            "composite grid merged into {}x{} at offset ({}, {})",
            self.width, self.height, self.offset_x, self.offset_y
        );
    }

    /// Snapshot of the merged matrix. All zeros until `generate` runs.
    pub fn data(&self) -> BinaryMap {
        self.data.clone()
    }

    /// Builds one drawable tile per composite cell.
    pub fn build_tiles(&self, floor_texture: TextureId, wall_texture: TextureId) -> Vec<Tile> {
        tile::build_tiles(&self.data, 0, 0, floor_texture, wall_texture)
    }
}
