//! The bounded lattice agents fly through.

use pm_core::CallRng;

use crate::Cell;

/// Dimensions of a bounded 3-D lattice: `cols × rows` cells in-plane,
/// stacked over `levels` altitude layers.
///
/// `GridDims` is the `space` value handed to agent factories and telemetry.
/// It is tiny and `Copy`; every [`Cell`] embeds its dims so that a cell is
/// self-describing — adjacency never needs a side channel back to the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub cols: i32,
    pub rows: i32,
    pub levels: i32,
}

impl GridDims {
    /// A lattice of `cols × rows × levels` cells.  All dimensions must be
    /// positive; a zero-size grid has no valid cells.
    pub fn new(cols: i32, rows: i32, levels: i32) -> Self {
        Self { cols, rows, levels }
    }

    /// A single-level lattice.
    pub fn flat(cols: i32, rows: i32) -> Self {
        Self::new(cols, rows, 1)
    }

    /// Whether `(x, y, alt)` lies inside the lattice.
    #[inline]
    pub fn contains(&self, x: i32, y: i32, alt: i32) -> bool {
        (0..self.cols).contains(&x) && (0..self.rows).contains(&y) && (0..self.levels).contains(&alt)
    }

    /// The cell at `(x, y, alt)`, if inside the lattice.
    pub fn cell(&self, x: i32, y: i32, alt: i32) -> Option<Cell> {
        self.contains(x, y, alt).then(|| Cell::new(*self, x, y, alt))
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.cols.max(0) as u64 * self.rows.max(0) as u64 * self.levels.max(0) as u64
    }

    /// A uniformly random cell.
    ///
    /// # Panics
    /// Panics if the lattice is empty.
    pub fn random_cell(&self, rng: &mut CallRng) -> Cell {
        Cell::new(
            *self,
            rng.gen_range(0..self.cols),
            rng.gen_range(0..self.rows),
            rng.gen_range(0..self.levels),
        )
    }
}
