//! Draw detection.

use crate::board_size::{BoardSize, Mask};
use tracing::instrument;

/// Checks whether the combined occupancy covers every cell.
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(size: BoardSize, occupied: Mask) -> bool {
    occupied == size.full_mask()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let size = BoardSize::new(3).unwrap();
        assert!(!is_full(size, 0));
    }

    #[test]
    fn test_partial_board_not_full() {
        let size = BoardSize::new(3).unwrap();
        assert!(!is_full(size, 0b0_1111_1111 >> 1));
    }

    #[test]
    fn test_full_board() {
        let size = BoardSize::new(3).unwrap();
        assert!(is_full(size, 0x1FF));
    }

    #[test]
    fn test_largest_board() {
        let size = BoardSize::new(8).unwrap();
        assert!(is_full(size, u64::MAX));
        assert!(!is_full(size, u64::MAX >> 1));
    }
}
