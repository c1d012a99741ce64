//! Error types for torus-automata.

use thiserror::Error;

/// Errors raised when a simulation is configured with invalid parameters.
///
/// All validation happens once, when a rule or simulation is constructed.
/// The per-cell loops assume valid inputs and perform no checks of their own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Grid dimensions must both be positive.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Configured grid width.
        width: usize,
        /// Configured grid height.
        height: usize,
    },

    /// Block size must be positive.
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// Survive/born sets only cover the Moore neighborhood.
    #[error("neighbor count out of range: {0} (must be 0..=8)")]
    NeighborCountOutOfRange(u8),

    /// A Generations rule needs at least dead and alive.
    #[error("state count must be at least 2, got {0}")]
    StateCountTooSmall(u8),

    /// Every state needs an intensity to map to.
    #[error("color table must not be empty")]
    EmptyColorTable,

    /// Startup noise is a per-cell probability.
    #[error("noise probability must lie in [0, 1], got {0}")]
    NoiseOutOfRange(f32),
}
