//! Cell-to-pixel rasterization.
//!
//! Each logical cell becomes a `block_size`-square block of uniform gray:
//! the cell state picks an intensity from the color table, the intensity
//! fills all three color channels, and the alpha channel is fully opaque.
//! Nearest-neighbor only; no interpolation across block edges.

use rayon::prelude::*;

use crate::automaton::ToroidalGrid;

/// Bytes per RGBA pixel.
const PIXEL_STRIDE: usize = 4;

/// Write one opaque grayscale pixel.
#[inline]
fn write_pixel(dest: &mut [u8], intensity: u8) {
    dest[0] = intensity; // R
    dest[1] = intensity; // G
    dest[2] = intensity; // B
    dest[3] = 255; // A
}

/// Block-scaling rasterizer from generation buffers to RGBA frames.
///
/// Pixel-to-cell lookup goes through the same [`ToroidalGrid`] addressing
/// the stepping engine uses.
pub struct Rasterizer {
    grid: ToroidalGrid,
    block_size: usize,
    colors: Vec<u8>,
}

impl Rasterizer {
    /// Pair a grid with a block size and a color table.
    ///
    /// The table must be non-empty (`SimConfig` validation upstream); states
    /// past its end reuse the last entry.
    pub fn new(grid: ToroidalGrid, block_size: usize, colors: Vec<u8>) -> Self {
        Self {
            grid,
            block_size,
            colors,
        }
    }

    /// Rendered width in pixels.
    #[inline]
    pub fn width_px(&self) -> usize {
        self.grid.width() * self.block_size
    }

    /// Rendered height in pixels.
    #[inline]
    pub fn height_px(&self) -> usize {
        self.grid.height() * self.block_size
    }

    /// Byte length of one rendered frame.
    #[inline]
    pub fn frame_len(&self) -> usize {
        self.width_px() * self.height_px() * PIXEL_STRIDE
    }

    /// Intensity for a cell state, clamped to the table's last entry.
    #[inline]
    fn intensity(&self, state: u8) -> u8 {
        self.colors[(state as usize).min(self.colors.len() - 1)]
    }

    /// Render a generation buffer into a freshly allocated RGBA frame.
    pub fn render(&self, cells: &[u8]) -> Vec<u8> {
        let mut frame = vec![0u8; self.frame_len()];
        self.render_into(cells, &mut frame);
        frame
    }

    /// Render a generation buffer into a caller-provided frame.
    ///
    /// `frame` must hold exactly [`Rasterizer::frame_len`] bytes; the FFI
    /// layer checks this before calling. Pixel rows are filled in parallel
    /// from the immutable cell buffer, so output is deterministic.
    pub fn render_into(&self, cells: &[u8], frame: &mut [u8]) {
        debug_assert_eq!(cells.len(), self.grid.len());
        debug_assert_eq!(frame.len(), self.frame_len());

        let row_bytes = self.width_px() * PIXEL_STRIDE;
        let block = self.block_size;

        frame
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(py, row)| {
                let cell_y = (py / block) as i64;
                for (px, pixel) in row.chunks_exact_mut(PIXEL_STRIDE).enumerate() {
                    let cell_x = (px / block) as i64;
                    let state = cells[self.grid.index(cell_x, cell_y)];
                    write_pixel(pixel, self.intensity(state));
                }
            });
    }
}
