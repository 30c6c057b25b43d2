//! Validated board side length and the mask arithmetic that depends on it.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Occupancy mask, one bit per cell in row-major order.
pub type Mask = u64;

/// Largest side length whose cell count fits in a [`Mask`].
pub const MAX_BOARD_SIZE: usize = 8;

/// Side length of a square board, guaranteed to fit the mask width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "i64", into = "i64")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates a side length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] when `n < 1` or `n * n`
    /// exceeds the bit width of [`Mask`].
    #[instrument]
    pub fn new(n: i64) -> Result<Self, EngineError> {
        let cells = n.checked_mul(n).unwrap_or(i64::MAX);
        if n < 1 || cells > i64::from(Mask::BITS) {
            return Err(EngineError::InvalidBoardSize {
                size: n,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self(n as usize))
    }

    /// Side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells (N²).
    pub fn cells(self) -> usize {
        self.0 * self.0
    }

    /// Mask with every cell bit set.
    pub fn full_mask(self) -> Mask {
        match self.cells() {
            64 => Mask::MAX,
            cells => (1 << cells) - 1,
        }
    }

    /// Linear index of an in-range coordinate pair, `None` otherwise.
    pub fn index(self, row: i64, col: i64) -> Option<usize> {
        let n = self.0 as i64;
        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some((row * n + col) as usize)
        } else {
            None
        }
    }

    /// Single-bit mask for an in-range coordinate pair.
    pub fn bit(self, row: i64, col: i64) -> Option<Mask> {
        self.index(row, col).map(|index| 1 << index)
    }

    /// Maps a linear index back to `(row, col)`.
    pub fn coordinates(self, index: usize) -> (usize, usize) {
        (index / self.0, index % self.0)
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = EngineError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for i64 {
    fn from(size: BoardSize) -> Self {
        size.0 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert!(BoardSize::new(0).is_err());
        assert!(BoardSize::new(-1).is_err());
        assert!(BoardSize::new(i64::MIN).is_err());
    }

    #[test]
    fn test_rejects_oversized() {
        assert_eq!(
            BoardSize::new(9),
            Err(EngineError::InvalidBoardSize { size: 9, max: 8 })
        );
        assert!(BoardSize::new(i64::MAX).is_err());
    }

    #[test]
    fn test_accepts_full_range() {
        for n in 1..=MAX_BOARD_SIZE as i64 {
            assert_eq!(BoardSize::new(n).map(BoardSize::get), Ok(n as usize));
        }
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(BoardSize::new(1).unwrap().full_mask(), 0b1);
        assert_eq!(BoardSize::new(3).unwrap().full_mask(), 0x1FF);
        assert_eq!(BoardSize::new(8).unwrap().full_mask(), u64::MAX);
    }

    #[test]
    fn test_index_bounds() {
        let size = BoardSize::new(3).unwrap();
        assert_eq!(size.index(0, 0), Some(0));
        assert_eq!(size.index(2, 1), Some(7));
        assert_eq!(size.index(3, 0), None);
        assert_eq!(size.index(0, -1), None);
        assert_eq!(size.coordinates(7), (2, 1));
    }

    #[test]
    fn test_serde_validates() {
        let size: BoardSize = serde_json::from_str("4").unwrap();
        assert_eq!(size.get(), 4);
        assert!(serde_json::from_str::<BoardSize>("0").is_err());
    }
}
