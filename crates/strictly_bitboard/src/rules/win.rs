//! Win detection over precomputed line masks.

use crate::board_size::{BoardSize, Mask};
use tracing::instrument;

/// Every line that wins the game on a board of one size.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal. [`first_match`](Self::first_match)
/// scans in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningPatterns {
    size: BoardSize,
    patterns: Vec<Mask>,
}

impl WinningPatterns {
    /// Builds the 2N+2 line masks for a board size.
    #[instrument]
    pub fn for_size(size: BoardSize) -> Self {
        let n = size.get();
        let bit = |row: usize, col: usize| -> Mask { 1 << (row * n + col) };

        let rows = (0..n).map(|row| (0..n).fold(0, |acc, col| acc | bit(row, col)));
        let cols = (0..n).map(|col| (0..n).fold(0, |acc, row| acc | bit(row, col)));
        let main = (0..n).fold(0, |acc, i| acc | bit(i, i));
        let anti = (0..n).fold(0, |acc, i| acc | bit(i, n - 1 - i));

        let patterns = rows
            .chain(cols)
            .chain([main, anti])
            .collect::<Vec<_>>();

        Self { size, patterns }
    }

    /// Board size the table was built for.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of patterns (always 2N+2).
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Never true; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Mask> + '_ {
        self.patterns.iter().copied()
    }

    /// First pattern wholly contained in `player_mask`.
    pub fn first_match(&self, player_mask: Mask) -> Option<Mask> {
        self.iter()
            .find(|&pattern| player_mask & pattern == pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(n: i64) -> WinningPatterns {
        WinningPatterns::for_size(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_three_by_three_layout() {
        let table = patterns(3);
        let expected = [
            0b000_000_111,
            0b000_111_000,
            0b111_000_000,
            0b001_001_001,
            0b010_010_010,
            0b100_100_100,
            0b100_010_001,
            0b001_010_100,
        ];
        assert_eq!(table.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_every_pattern_has_n_bits() {
        for n in 1..=8 {
            let table = patterns(n);
            assert_eq!(table.len(), 2 * n as usize + 2);
            assert!(table.iter().all(|p| p.count_ones() == n as u32));
        }
    }

    #[test]
    fn test_single_cell_board() {
        let table = patterns(1);
        assert!(table.iter().all(|p| p == 1));
        assert_eq!(table.first_match(1), Some(1));
    }

    #[test]
    fn test_first_match_prefers_rows() {
        let table = patterns(3);
        // Top row plus left column: both complete, row is scanned first.
        let mask = 0b001_001_111;
        assert_eq!(table.first_match(mask), Some(0b000_000_111));
    }

    #[test]
    fn test_no_match_incomplete() {
        let table = patterns(3);
        assert_eq!(table.first_match(0b000_000_011), None);
        assert_eq!(table.first_match(0), None);
    }

    #[test]
    fn test_anti_diagonal_largest_board() {
        let table = patterns(8);
        let anti = (0..8).fold(0u64, |acc, i| acc | 1 << (i * 8 + 7 - i));
        assert_eq!(table.iter().last(), Some(anti));
        assert_eq!(table.first_match(anti), Some(anti));
    }
}
