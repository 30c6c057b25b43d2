//! Disjoint masks invariant: no cell belongs to both players.

use super::Invariant;
use crate::Engine;

/// Invariant: `x_mask & o_mask == 0`.
pub struct DisjointMasksInvariant;

impl Invariant<Engine> for DisjointMasksInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.x_mask & engine.o_mask == 0
    }

    fn description() -> &'static str {
        "No cell is owned by both players"
    }
}
