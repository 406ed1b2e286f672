// src/random_walk/generator.rs
//! # Drunkard's-Walk Carver
//!
//! A population of walkers wanders the grid, converting every interior cell
//! it touches to floor. Walkers are stochastically destroyed, cloned, and
//! redirected each tick; the run stops once the floor fraction passes the
//! configured target or the iteration cap is hit.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{Walker, MAX_ITERATIONS};
use crate::error::{check_chance, check_dimensions, ConfigError};
use crate::grid::{BinaryMap, Occupancy};
use crate::rng::RandomSource;
use crate::tile::{self, TextureId, Tile};

/// Parameters for one carving run. Immutable once handed to `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomWalkConfig {
    /// World-space tile offset applied when building tiles, not during
    /// carving.
    pub offset_x: i32,
    pub offset_y: i32,
    pub max_walkers: usize,
    /// Target fraction of the grid converted to floor before the run stops.
    pub fill_percentage: f32,
    pub chance_change_direction: f32,
    pub chance_destroy: f32,
    pub chance_spawn: f32,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        RandomWalkConfig {
            offset_x: 0,
            offset_y: 0,
            max_walkers: 10,
            fill_percentage: 0.4,
            chance_change_direction: 0.5,
            chance_destroy: 0.05,
            chance_spawn: 0.05,
        }
    }
}

impl RandomWalkConfig {
    /// Fail-fast parameter check. The simulation itself tolerates degenerate
    /// values without crashing, so calling this is optional but recommended.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_walkers == 0 {
            return Err(ConfigError::NoWalkers);
        }
        if !(self.fill_percentage > 0.0 && self.fill_percentage <= 1.0) {
            return Err(ConfigError::InvalidFillPercentage(self.fill_percentage));
        }
        check_chance("chance_change_direction", self.chance_change_direction)?;
        check_chance("chance_destroy", self.chance_destroy)?;
        check_chance("chance_spawn", self.chance_spawn)?;
        Ok(())
    }
}

/// Owns the walker population and the occupancy buffer for one cave region.
pub struct RandomWalkGenerator {
    width: usize,
    height: usize,
    offset_x: i32,
    offset_y: i32,
    cells: Vec<Occupancy>,
    walkers: Vec<Walker>,
}

impl RandomWalkGenerator {
    /// Creates a generator with an all-`Empty` width x height buffer.
    /// Dimensions are fixed for the lifetime of the generator.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        check_dimensions(width, height)?;
        Ok(RandomWalkGenerator {
            width,
            height,
            offset_x: 0,
            offset_y: 0,
            cells: vec![Occupancy::Empty; width * height],
            walkers: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Runs the carving simulation from scratch: the buffer is cleared, a
    /// single walker is dropped at a random position, and ticks run until the
    /// fill target is passed or `MAX_ITERATIONS` elapse. Calling this again
    /// restarts the whole stochastic process.
    pub fn generate<R: RandomSource>(&mut self, rng: &mut R, config: &RandomWalkConfig) {
        self.offset_x = config.offset_x;
        self.offset_y = config.offset_y;
        self.cells.fill(Occupancy::Empty);

        let spawn = (
            rng.uniform_int(0, self.width as i32),
            rng.uniform_int(0, self.height as i32),
        );
        self.walkers = vec![Walker::new(spawn, rng)];

        let mut iterations = 0;
        while iterations < MAX_ITERATIONS {
            iterations += 1;
            if self.tick(rng, config) {
                break;
            }
        }

        info!(
            "random walk finished after {} ticks, fill ratio {:.3}, {} walkers",
            iterations,
            self.fill_ratio(),
            self.walkers.len()
        );
    }

    /// One simulation tick: carve, destroy, spawn, redirect, move, then check
    /// the fill target. Returns true once the target is passed.
    fn tick<R: RandomSource>(&mut self, rng: &mut R, config: &RandomWalkConfig) -> bool {
        self.carve_floors();
        self.destroy_walker(rng, config.chance_destroy);
        self.spawn_walkers(rng, config.chance_spawn, config.max_walkers);
        self.redirect_walkers(rng, config.chance_change_direction);
        for walker in &mut self.walkers {
            walker.step();
        }
        self.fill_ratio() > config.fill_percentage
    }

    /// Marks the cell under each walker as floor. Positions are clamped to
    /// the grid interior, so column 0 and row 0 stay untouched and walkers
    /// pushed past the edge stack against it instead of carving it. Grids
    /// only one cell wide or tall have no interior along that axis; the
    /// clamp window collapses to the single valid index there.
    fn carve_floors(&mut self) {
        let max_x = self.width as i32 - 1;
        let max_y = self.height as i32 - 1;
        for walker in &self.walkers {
            let x = walker.position.0.clamp(max_x.min(1), max_x) as usize;
            let y = walker.position.1.clamp(max_y.min(1), max_y) as usize;
            let index = y * self.width + x;
            if self.cells[index] == Occupancy::Empty {
                self.cells[index] = Occupancy::Floor;
            }
        }
    }

    /// Removes at most one walker per tick: the scan picks the first walker
    /// whose roll succeeds and applies the removal after the scan. The
    /// population never drops below one.
    fn destroy_walker<R: RandomSource>(&mut self, rng: &mut R, chance_destroy: f32) {
        let mut doomed = None;
        for index in 0..self.walkers.len() {
            if rng.uniform_float(0.0, 1.0) < chance_destroy && self.walkers.len() > 1 {
                doomed = Some(index);
                break;
            }
        }
        if let Some(index) = doomed {
            debug!("destroying walker {}", index);
            self.walkers.remove(index);
        }
    }

    /// Each walker may clone itself at its own position while the population
    /// is below `max_walkers`. Spawn positions are collected first and the
    /// clones appended after the scan.
    fn spawn_walkers<R: RandomSource>(&mut self, rng: &mut R, chance_spawn: f32, max_walkers: usize) {
        let mut spawn_positions = Vec::new();
        for walker in &self.walkers {
            if rng.uniform_float(0.0, 1.0) < chance_spawn
                && self.walkers.len() + spawn_positions.len() < max_walkers
            {
                spawn_positions.push(walker.position);
            }
        }
        for position in spawn_positions {
            let clone = Walker::new(position, rng);
            self.walkers.push(clone);
        }
    }

    fn redirect_walkers<R: RandomSource>(&mut self, rng: &mut R, chance_change_direction: f32) {
        for walker in &mut self.walkers {
            if rng.uniform_float(0.0, 1.0) < chance_change_direction {
                walker.redirect(rng);
            }
        }
    }

    fn floor_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Occupancy::Floor)
            .count()
    }

    fn fill_ratio(&self) -> f32 {
        self.floor_count() as f32 / (self.width * self.height) as f32
    }

    /// Exports the occupancy buffer as a binary matrix: floor cells are 0,
    /// everything else is 1. Repeated calls between `generate` invocations
    /// return identical snapshots.
    pub fn data(&self) -> BinaryMap {
        let mut map = BinaryMap::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                map.set(x, y, self.cells[y * self.width + x].to_binary());
            }
        }
        map
    }

    /// Builds one drawable tile per cell at this generator's world offset.
    pub fn build_tiles(&self, floor_texture: TextureId, wall_texture: TextureId) -> Vec<Tile> {
        tile::build_tiles(
            &self.data(),
            self.offset_x,
            self.offset_y,
            floor_texture,
            wall_texture,
        )
    }
}
