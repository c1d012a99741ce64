//! Core automaton logic: toroidal addressing, stepping, and seeding.
//!
//! This module contains the actual simulation logic. The `Simulation`
//! wrapper and the FFI layer in `ffi/` call these functions.

pub mod grid;
pub mod seed;
pub mod stepping;

pub use grid::ToroidalGrid;
pub use seed::seed_noise;
pub use stepping::Engine;
