//! Torus Automata - Generations-style cellular automata on a toroidal grid.
//!
//! The core is three pieces sharing one addressing scheme:
//! [`ToroidalGrid`] maps wraparound coordinates to a flat buffer, the
//! [`Engine`] applies a Generations rule (survive/born sets plus decay
//! states) over the Moore neighborhood, and the [`Rasterizer`] scales each
//! cell into an opaque grayscale pixel block.
//!
//! [`Simulation`] ties the pieces together behind a validated [`SimConfig`],
//! and the [`ffi`] module exposes a C ABI for hosts that own presentation
//! and frame scheduling. Stepping and rendering are pure: fresh output
//! buffers, no clocks, no hidden randomness.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod raster;
pub mod simulation;

pub use automaton::{seed_noise, Engine, ToroidalGrid};
pub use config::{CellState, Rule, SimConfig};
pub use error::ConfigError;
pub use raster::Rasterizer;
pub use simulation::Simulation;
