//! Initial-noise seeding for the first generation.
//!
//! Seeding is the only randomized operation in the crate, and it takes the
//! RNG from the caller: a fixed seed reproduces the whole run.

use rand::Rng;

use super::grid::ToroidalGrid;

/// Build a generation buffer where each cell is independently set alive
/// (state 1) with the given probability, dead otherwise.
pub fn seed_noise<R: Rng + ?Sized>(grid: &ToroidalGrid, rng: &mut R, probability: f32) -> Vec<u8> {
    let mut cells = vec![0u8; grid.len()];
    for cell in &mut cells {
        if rng.random::<f32>() < probability {
            *cell = 1;
        }
    }
    cells
}
