// src/random_walk/walker.rs

use crate::rng::RandomSource;

/// A single mobile carving agent: an integer position plus one of the four
/// cardinal unit vectors. The owning generator moves it one step per tick and
/// clamps the position when reading it; the walker itself never checks bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub position: (i32, i32),
    pub direction: (i32, i32),
}

impl Walker {
    pub fn new(position: (i32, i32), rng: &mut impl RandomSource) -> Self {
        Walker {
            position,
            direction: Self::new_direction(rng),
        }
    }

    /// Samples one of the four cardinal unit vectors with equal probability.
    pub fn new_direction(rng: &mut impl RandomSource) -> (i32, i32) {
        match rng.uniform_int(0, 3) {
            0 => (1, 0),  // east
            1 => (-1, 0), // west
            2 => (0, 1),  // south
            _ => (0, -1), // north
        }
    }

    pub fn redirect(&mut self, rng: &mut impl RandomSource) {
        self.direction = Self::new_direction(rng);
    }

    /// Adds the direction vector to the position. No bounds enforcement.
    pub fn step(&mut self) {
        self.position.0 += self.direction.0;
        self.position.1 += self.direction.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    const CARDINALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    #[test]
    fn test_new_direction_is_cardinal() {
        let mut rng = SeededRng::from_seed(3);
        for _ in 0..100 {
            let direction = Walker::new_direction(&mut rng);
            assert!(CARDINALS.contains(&direction));
        }
    }

    #[test]
    fn test_new_direction_covers_all_cardinals() {
        let mut rng = SeededRng::from_seed(3);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let direction = Walker::new_direction(&mut rng);
            if !seen.contains(&direction) {
                seen.push(direction);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_step_adds_direction() {
        let mut rng = SeededRng::from_seed(3);
        let mut walker = Walker::new((5, 7), &mut rng);
        walker.direction = (0, -1);
        walker.step();
        assert_eq!(walker.position, (5, 6));
        walker.step();
        assert_eq!(walker.position, (5, 5));
    }
}
