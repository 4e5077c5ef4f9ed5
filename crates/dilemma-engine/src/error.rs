//! Engine error types

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid round bounds: min {min} must be >= 1 and <= max {max}")]
    InvalidRoundBounds { min: u32, max: u32 },

    #[error("end probability {0}% exceeds 100")]
    InvalidEndProbability(u8),
}
