//! Generations-rule stepping over the toroidal Moore neighborhood.

use rayon::prelude::*;

use super::grid::ToroidalGrid;
use crate::config::{CellState, Rule};

/// Transition engine: one immutable rule evaluated over one grid's
/// addressing.
pub struct Engine {
    grid: ToroidalGrid,
    rule: Rule,
}

impl Engine {
    /// Pair a grid with a rule. Both are fixed for the engine's lifetime.
    pub fn new(grid: ToroidalGrid, rule: Rule) -> Self {
        Self { grid, rule }
    }

    /// The addressing scheme this engine steps over.
    #[inline]
    pub fn grid(&self) -> ToroidalGrid {
        self.grid
    }

    /// The rule this engine applies.
    #[inline]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Compute the next generation from `cells`.
    ///
    /// Neighbor counts sum raw state values over the eight surrounding
    /// cells: a decaying cell contributes its full integer value, not a
    /// binary alive flag. On degenerate grids (width or height of 1) the
    /// wraparound makes a cell its own neighbor, and the count follows the
    /// indexing formula exactly.
    ///
    /// The input is never mutated and the output is freshly allocated, so a
    /// caller may keep rendering the previous generation while the next one
    /// is computed. Output rows are filled in parallel, each reading only
    /// the immutable input, so the result is identical to the sequential
    /// loop.
    pub fn step(&self, cells: &[u8]) -> Vec<u8> {
        debug_assert_eq!(cells.len(), self.grid.len());

        let width = self.grid.width();
        let mut next = vec![0u8; cells.len()];

        next.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            let y = y as i64;
            for (x, out) in row.iter_mut().enumerate() {
                let x = x as i64;

                // Sum the full 3x3 block, then remove the center so the
                // cell does not count itself.
                let mut sum = 0u32;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        sum += cells[self.grid.index(x + dx, y + dy)] as u32;
                    }
                }
                let own = cells[self.grid.index(x, y)];
                let neighbors = sum - own as u32;

                *out = self.next_state(own, neighbors);
            }
        });

        next
    }

    /// One cell's transition, in strict precedence order: birth, survival,
    /// staying dead, then decay (which wraps back to dead).
    #[inline]
    fn next_state(&self, value: u8, neighbors: u32) -> u8 {
        match CellState::from_raw(value) {
            CellState::Dead if self.rule.birth(neighbors) => 1,
            CellState::Alive if self.rule.survive(neighbors) => 1,
            CellState::Dead => 0,
            CellState::Alive | CellState::Decaying(_) => (value + 1) % self.rule.state_count(),
        }
    }
}
