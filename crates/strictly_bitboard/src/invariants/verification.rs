//! Kani proof harnesses for engine invariants.
//!
//! Bounded model checking over arbitrary move sequences on small boards.

use super::{EngineInvariants, InvariantSet};
use crate::{Engine, MoveOutcome};

/// Any sequence of moves keeps every invariant.
#[kani::proof]
#[kani::unwind(10)]
fn verify_moves_preserve_invariants() {
    let n: i64 = kani::any();
    kani::assume((1..=3).contains(&n));
    let Ok(mut engine) = Engine::new(n) else {
        unreachable!("sizes 1..=3 are valid");
    };

    for _ in 0..9 {
        let row: i64 = kani::any();
        let col: i64 = kani::any();
        kani::assume((-1..=3).contains(&row) && (-1..=3).contains(&col));
        engine.make_move(row, col);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }
}

/// Rejected moves never change state.
#[kani::proof]
#[kani::unwind(10)]
fn verify_rejections_do_not_mutate() {
    let Ok(mut engine) = Engine::new(3) else {
        unreachable!("3 is a valid size");
    };
    let first_row: i64 = kani::any();
    let first_col: i64 = kani::any();
    kani::assume((0..3).contains(&first_row) && (0..3).contains(&first_col));
    engine.make_move(first_row, first_col);

    let before = engine.clone();
    let row: i64 = kani::any();
    let col: i64 = kani::any();
    if engine.make_move(row, col) != MoveOutcome::Success {
        assert!(engine == before);
    }
}
