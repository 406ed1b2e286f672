// src/lib.rs

pub mod cellular;
pub mod composite;
pub mod error;
pub mod grid;
pub mod random_walk;
pub mod rng;
pub mod tile;
