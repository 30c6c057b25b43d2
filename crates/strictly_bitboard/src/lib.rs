//! N×N tic-tac-toe engine on a bit-mask board.
//!
//! Each player's marks live in one `u64`, bit index `row * N + col`, so
//! boards up to 8×8 are supported. Win detection checks the player's mask
//! against a per-engine table of row, column and diagonal masks.
//!
//! # Example
//!
//! ```
//! use strictly_bitboard::{Engine, GameStatus, MoveOutcome, Player};
//!
//! let mut engine = Engine::new(3)?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert_eq!(engine.make_move(row, col), MoveOutcome::Success);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.winning_coordinates(), Some(vec![(0, 0), (0, 1), (0, 2)]));
//! # Ok::<(), strictly_bitboard::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board_size;
mod engine;
mod error;
mod invariants;
mod rules;
mod snapshot;
mod types;

pub use action::MoveOutcome;
pub use board_size::{BoardSize, MAX_BOARD_SIZE, Mask};
pub use engine::Engine;
pub use error::EngineError;
pub use invariants::{
    DisjointMasksInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    TurnParityInvariant, WithinBoardInvariant,
};
pub use rules::{WinningPatterns, is_full};
pub use snapshot::Snapshot;
pub use types::{Cell, GameStatus, Player};
