//! One lattice position, with the spatial queries agents plan with.

use std::fmt;

use pm_core::{CallRng, Navigable, Value};

use crate::GridDims;

/// One cell of a bounded 3-D lattice.
///
/// Cells are self-describing: each carries its lattice dimensions, so
/// adjacency and pathfinding need no external context.  Equality and
/// hashing cover the dims too — cells of different lattices never collide
/// in one ledger.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    dims: GridDims,
    x: i32,
    y: i32,
    alt: i32,
}

impl Cell {
    pub fn new(dims: GridDims, x: i32, y: i32, alt: i32) -> Self {
        debug_assert!(dims.contains(x, y, alt));
        Self { dims, x, y, alt }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn alt(&self) -> i32 {
        self.alt
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// In-plane heading from `from` to `self`, as a unit-ish step vector.
    fn heading_from(&self, from: &Cell) -> (i32, i32) {
        ((self.x - from.x).signum(), (self.y - from.y).signum())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.alt)
    }
}

impl Navigable for Cell {
    /// Von-Neumann neighborhood: the four in-plane moves plus up/down,
    /// clipped to the lattice.
    fn neighbors(&self) -> Vec<Cell> {
        const STEPS: [(i32, i32, i32); 6] = [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];
        STEPS
            .iter()
            .filter_map(|&(dx, dy, dalt)| {
                self.dims.cell(self.x + dx, self.y + dy, self.alt + dalt)
            })
            .collect()
    }

    /// Manhattan distance, altitude included.
    fn distance(&self, other: &Cell) -> u64 {
        ((self.x - other.x).abs() + (self.y - other.y).abs() + (self.alt - other.alt).abs()) as u64
    }

    /// Euclidean distance as an auction-value magnitude — an admissible
    /// estimate of the cheapest corridor to `other`.
    fn heuristic_distance(&self, other: &Cell) -> Value {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dalt = (self.alt - other.alt) as f64;
        Value::from_float((dx * dx + dy * dy + dalt * dalt).sqrt())
    }

    /// Greedy lattice walk: every step moves strictly closer to `other`
    /// (always possible on an axis-aligned lattice), so the path length is
    /// exactly the Manhattan distance.  When several axes can shorten the
    /// remaining distance, `rng` picks one, which spreads concurrent agents
    /// over distinct corridors.
    fn shortest_path(&self, other: &Cell, rng: &mut CallRng) -> Vec<Cell> {
        let mut path = vec![*self];
        let mut here = *self;
        while here != *other {
            let mut closer: Vec<Cell> = here
                .neighbors()
                .into_iter()
                .filter(|n| n.distance(other) < here.distance(other))
                .collect();
            debug_assert!(!closer.is_empty());
            let pick = rng.gen_range(0..closer.len());
            here = closer.swap_remove(pick);
            path.push(here);
        }
        path
    }

    /// Whether `before → self → to` changes in-plane heading.
    fn turn(&self, before: &Cell, to: &Cell) -> bool {
        self.heading_from(before) != to.heading_from(self)
    }

    /// Whether `self → to` changes altitude level.
    fn climb(&self, to: &Cell) -> bool {
        self.alt != to.alt
    }
}
