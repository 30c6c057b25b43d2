//! Engine construction errors.

use derive_more::{Display, Error};

/// Error raised while building an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Board side length is below one, or its cell count does not fit the mask.
    #[display("Invalid board size {size}: expected 1..={max}")]
    InvalidBoardSize {
        /// The rejected side length.
        size: i64,
        /// Largest side length the mask can hold.
        max: usize,
    },
}
