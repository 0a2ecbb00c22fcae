//! Agent injection — the `AgentFactory` trait.

use pm_core::{Region, Tick};

use crate::BoxedAgent;

/// Produces the batch of agents joining the market at a given tick.
///
/// Invoked by the driver exactly once per tick, before the bid phase.  The
/// batch may be empty.  `space` is the caller-supplied world the agents
/// inhabit; `seed` is a fresh 32-bit draw from the master generator so that
/// randomized spawning stays deterministic.
///
/// Blanket-implemented for closures, so a plain `FnMut` works:
///
/// ```rust,ignore
/// let factory = |t: Tick, _space: &Grid, _seed: u32| -> Vec<BoxedAgent<Cell>> {
///     if t == Tick::ZERO {
///         vec![Box::new(Courier::new())]
///     } else {
///         vec![]
///     }
/// };
/// ```
pub trait AgentFactory<R: Region, S> {
    fn spawn(&mut self, t: Tick, space: &S, seed: u32) -> Vec<BoxedAgent<R>>;
}

impl<R, S, F> AgentFactory<R, S> for F
where
    R: Region,
    F: FnMut(Tick, &S, u32) -> Vec<BoxedAgent<R>>,
{
    fn spawn(&mut self, t: Tick, space: &S, seed: u32) -> Vec<BoxedAgent<R>> {
        self(t, space, seed)
    }
}
