//! Configuration errors
//!
//! The simulation itself never fails; only building a [`crate::Tuning`] from
//! a profile and viewport can, and it does so before the first tick.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("jump velocity must point upward (negative), got {0}")]
    JumpNotUpward(f32),

    #[error("jump factor must be in (0, 1], got {0}")]
    JumpFactorOutOfRange(f32),

    #[error("playfield {width}x{height} cannot fit a {size}px {entity} above a {ground}px ground")]
    PlayfieldTooSmall {
        entity: &'static str,
        width: f32,
        height: f32,
        ground: f32,
        size: f32,
    },
}
