//! Frame rendering into host-owned pixel buffers.

use crate::simulation::Simulation;

/// Byte length of one rendered RGBA frame:
/// `width * block_size * height * block_size * 4`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation.
///
/// # Returns
/// 0 if `ptr` is null.
#[no_mangle]
pub unsafe extern "C" fn ta_frame_len(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).frame_len() as u64
}

/// Renders the current generation into `out_buf` as RGBA bytes.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation.
/// - `out_buf` must point to a writable buffer of at least `buf_len` bytes.
///
/// # Returns
/// The number of bytes written (always `ta_frame_len`), or 0 if a pointer
/// is null or the buffer is too small.
#[no_mangle]
pub unsafe extern "C" fn ta_render(ptr: *const Simulation, out_buf: *mut u8, buf_len: u64) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let sim = &*ptr;
    let needed = sim.frame_len();
    if (buf_len as usize) < needed {
        return 0;
    }

    let frame = std::slice::from_raw_parts_mut(out_buf, needed);
    sim.frame_into(frame);
    needed as u64
}
