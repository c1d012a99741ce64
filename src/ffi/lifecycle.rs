//! Simulation lifecycle: creation, destruction, generation counter.

use crate::config::{Rule, SimConfig};
use crate::simulation::Simulation;

/// Creates a simulation from a complete configuration and returns an opaque
/// handle.
///
/// The rule's survive and born sets arrive as bitmasks (bit `n` = neighbor
/// count `n`, counts 0 through 8).
///
/// # Safety
/// - `colors` must point to `colors_len` readable bytes.
///
/// # Returns
/// An owned handle, or null if the configuration is invalid (zero
/// dimension, zero block size, state count below 2, mask bits above 8,
/// empty color table, noise outside [0, 1]).
#[no_mangle]
pub unsafe extern "C" fn ta_create(
    width: u32,
    height: u32,
    block_size: u32,
    survive_mask: u16,
    born_mask: u16,
    state_count: u8,
    colors: *const u8,
    colors_len: u32,
    noise: f32,
) -> *mut Simulation {
    if colors.is_null() {
        return std::ptr::null_mut();
    }

    let rule = match Rule::from_masks(survive_mask, born_mask, state_count) {
        Ok(rule) => rule,
        Err(_) => return std::ptr::null_mut(),
    };

    let config = SimConfig {
        width: width as usize,
        height: height as usize,
        block_size: block_size as usize,
        rule,
        colors: std::slice::from_raw_parts(colors, colors_len as usize).to_vec(),
        noise,
    };

    match Simulation::new(config) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_create`, and must not be
///   used after this call.
#[no_mangle]
pub unsafe extern "C" fn ta_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation.
///
/// # Returns
/// 0 if `ptr` is null.
#[no_mangle]
pub unsafe extern "C" fn ta_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
