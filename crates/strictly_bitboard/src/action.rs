//! Move outcomes.
//!
//! Rejected moves are ordinary results, not errors: the engine reports them
//! as values and leaves its state untouched.

use serde::{Deserialize, Serialize};

/// Result of asking the engine to place a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum MoveOutcome {
    /// The mark was placed.
    #[display("Move accepted")]
    Success,
    /// The target cell is already occupied.
    #[display("That position is already taken")]
    PositionTaken,
    /// Row or column lies outside the board.
    #[display("Coordinates are outside the board")]
    InvalidCoordinates,
    /// The game has ended; reset before playing again.
    #[display("The game is already over")]
    GameAlreadyOver,
}

impl MoveOutcome {
    /// True only for [`MoveOutcome::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, MoveOutcome::Success)
    }
}
