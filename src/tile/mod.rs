// src/tile/mod.rs
//! # Tile Seam
//!
//! The generators' only obligation to the renderer is a fully-populated
//! binary matrix. This module turns such a matrix into drawable tiles; the
//! actual render surface and texture loading live outside the crate, behind
//! the `DrawSurface` trait.

use crate::grid::BinaryMap;

/// Opaque handle to a loaded texture, assigned by the embedding renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(pub u32);

/// Render surface capability implemented by the embedding application.
pub trait DrawSurface {
    fn draw_texture(&mut self, texture: TextureId, x: i32, y: i32);
}

/// A single drawable cell: a texture handle plus its world-space grid
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    texture: TextureId,
    x: i32,
    y: i32,
}

impl Tile {
    pub fn new(texture: TextureId, x: i32, y: i32) -> Self {
        Tile { texture, x, y }
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        surface.draw_texture(self.texture, self.x, self.y);
    }
}

/// Builds one tile per matrix cell: blocked cells get the wall texture, open
/// cells the floor texture, each positioned at the offset plus its grid
/// coordinate.
pub fn build_tiles(
    map: &BinaryMap,
    offset_x: i32,
    offset_y: i32,
    floor_texture: TextureId,
    wall_texture: TextureId,
) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(map.width() * map.height());
    for y in 0..map.height() {
        for x in 0..map.width() {
            let texture = if map.is_wall(x, y) {
                wall_texture
            } else {
                floor_texture
            };
            tiles.push(Tile::new(texture, offset_x + x as i32, offset_y + y as i32));
        }
    }
    tiles
}
