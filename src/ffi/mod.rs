//! C ABI layer for host integration.
//!
//! This module exports C ABI functions so a host renderer can drive the
//! automaton over FFI. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`.
//!
//! The actual logic is in the `automaton`, `raster`, and `simulation`
//! modules. These functions are thin wrappers that handle null checks,
//! pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod render;

pub use grid::{ta_get_cell, ta_seed, ta_set_cell, ta_step};
pub use lifecycle::{ta_create, ta_destroy, ta_generation};
pub use render::{ta_frame_len, ta_render};
