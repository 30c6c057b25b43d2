//! Within board invariant: no bits set beyond the last cell.

use super::Invariant;
use crate::Engine;

/// Invariant: both masks are subsets of the full-board mask.
pub struct WithinBoardInvariant;

impl Invariant<Engine> for WithinBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.occupied() & !engine.size.full_mask() == 0
    }

    fn description() -> &'static str {
        "Occupancy stays inside the N×N board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_holds() {
        let mut engine = Engine::new(8).unwrap();
        engine.x_mask = u64::MAX;
        assert!(WithinBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_stray_bit_violates() {
        let mut engine = Engine::new(3).unwrap();
        engine.o_mask = 1 << 9;
        assert!(!WithinBoardInvariant::holds(&engine));
    }
}
