// src/error.rs

use thiserror::Error;

/// Construction-time configuration failures. The simulations themselves clamp
/// out-of-range coordinates instead of validating them, so these errors only
/// surface from the explicit `validate` / constructor layer.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("fill percentage must be within (0, 1], got {0}")]
    InvalidFillPercentage(f32),

    #[error("{name} must be a probability within [0, 1], got {value}")]
    InvalidChance { name: &'static str, value: f32 },

    #[error("max walkers must be at least 1")]
    NoWalkers,

    #[error("number of simulation steps must be at least 1")]
    NoSimulationSteps,
}

pub(crate) fn check_chance(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidChance { name, value })
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        Err(ConfigError::InvalidDimensions { width, height })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_chance_bounds() {
        assert!(check_chance("chance", 0.0).is_ok());
        assert!(check_chance("chance", 1.0).is_ok());
        assert_eq!(
            check_chance("chance", 1.5),
            Err(ConfigError::InvalidChance {
                name: "chance",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_check_dimensions_rejects_zero() {
        assert!(check_dimensions(10, 10).is_ok());
        assert_eq!(
            check_dimensions(0, 10),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
    }
}
