//! # cavegen demo
//!
//! Carves one cave region with the drunkard's walk, smooths a second with the
//! cellular automaton, stitches the two into a composite grid, and prints the
//! result as ASCII. Generation parameters come from an optional JSON file
//! passed as the first argument; without one the built-in defaults run.
//!
//! Logging goes through `env_logger`, so `RUST_LOG=info cavegen` shows the
//! per-generator summaries.

use std::env;
use std::error::Error;
use std::fs;

use log::info;
use serde::{Deserialize, Serialize};

use cavegen::cellular::{CellularAutomataGenerator, CellularConfig};
use cavegen::composite::CompositeGrid;
use cavegen::random_walk::{RandomWalkConfig, RandomWalkGenerator};
use cavegen::rng::{GameRng, RandomSource, SeededRng};

/// Everything one level needs: region sizes, the merge offset, and the two
/// generator configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelParams {
    walk_width: usize,
    walk_height: usize,
    cave_width: usize,
    cave_height: usize,
    merge_x: usize,
    merge_y: usize,
    seed: Option<u64>,
    random_walk: RandomWalkConfig,
    cellular: CellularConfig,
}

impl Default for LevelParams {
    fn default() -> Self {
        LevelParams {
            walk_width: 48,
            walk_height: 32,
            cave_width: 32,
            cave_height: 24,
            merge_x: 48,
            merge_y: 0,
            seed: None,
            random_walk: RandomWalkConfig::default(),
            cellular: CellularConfig::default(),
        }
    }
}

fn run(params: &LevelParams, rng: &mut impl RandomSource) -> Result<(), Box<dyn Error>> {
    let mut walk = RandomWalkGenerator::new(params.walk_width, params.walk_height)?;
    walk.generate(rng, &params.random_walk);

    let mut cave = CellularAutomataGenerator::new(params.cave_width, params.cave_height)?;
    cave.generate(rng, &params.cellular);

    let mut composite = CompositeGrid::new(&walk, &cave, params.merge_x, params.merge_y);
    composite.generate();

    for row in composite.data().rows() {
        let line: String = row
            .iter()
            .map(|&cell| if cell == 0 { '.' } else { '#' })
            .collect();
        println!("{}", line);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("cavegen starting...");

    let params: LevelParams = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => LevelParams::default(),
    };
    params.random_walk.validate()?;
    params.cellular.validate()?;

    match params.seed {
        Some(seed) => run(&params, &mut SeededRng::from_seed(seed))?,
        None => run(&params, &mut GameRng::new())?,
    }

    info!("cavegen exiting.");
    Ok(())
}
