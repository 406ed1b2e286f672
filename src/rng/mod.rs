// src/rng/mod.rs
//! # Random Source
//!
//! The generators never talk to a concrete RNG directly; they consume the
//! `RandomSource` capability so a run can be replayed exactly by swapping in
//! a seeded implementation.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform random sampling capability consumed by the generators. Both ranges
/// are inclusive on both ends.
pub trait RandomSource {
    fn uniform_float(&mut self, low: f32, high: f32) -> f32;
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

/// Thread-local RNG for ordinary gameplay generation.
pub struct GameRng {
    rng: ThreadRng,
}

impl GameRng {
    pub fn new() -> Self {
        GameRng {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for GameRng {
    fn uniform_float(&mut self, low: f32, high: f32) -> f32 {
        self.rng.gen_range(low..=high)
    }

    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}

/// Deterministic RNG; two instances built from the same seed yield identical
/// streams, so identical generator parameters reproduce identical levels.
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        SeededRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn uniform_float(&mut self, low: f32, high: f32) -> f32 {
        self.rng.gen_range(low..=high)
    }

    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_int_stays_in_range() {
        let mut rng = SeededRng::from_seed(42);
        for _ in 0..1000 {
            let value = rng.uniform_int(0, 3);
            assert!((0..=3).contains(&value));
        }
    }

    #[test]
    fn test_uniform_float_stays_in_range() {
        let mut rng = SeededRng::from_seed(42);
        for _ in 0..1000 {
            let value = rng.uniform_float(0.0, 1.0);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRng::from_seed(7);
        let mut b = SeededRng::from_seed(7);
        for _ in 0..100 {
            assert_eq!(a.uniform_int(-50, 50), b.uniform_int(-50, 50));
            assert_eq!(
                a.uniform_float(0.0, 1.0).to_bits(),
                b.uniform_float(0.0, 1.0).to_bits()
            );
        }
    }
}
