//! Non-interactive move replay.

use serde::Serialize;
use strictly_bitboard::{Engine, EngineError, MoveOutcome, Snapshot};
use tracing::{debug, instrument};

/// Outcome of every replayed move plus the final state.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Outcome per input move, in order.
    pub outcomes: Vec<MoveOutcome>,
    /// Engine state after the last move.
    pub snapshot: Snapshot,
}

/// Plays `moves` on a fresh `n`×`n` engine.
///
/// Rejected moves are recorded and skipped; the replay never stops early.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(n: i64, moves: &[(i64, i64)]) -> Result<ReplayReport, EngineError> {
    let mut engine = Engine::new(n)?;
    let outcomes = moves
        .iter()
        .map(|&(row, col)| {
            let outcome = engine.make_move(row, col);
            debug!(row, col, %outcome, "Replayed move");
            outcome
        })
        .collect();
    Ok(ReplayReport {
        outcomes,
        snapshot: engine.snapshot(),
    })
}
