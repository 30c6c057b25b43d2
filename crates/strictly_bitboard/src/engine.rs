//! Bit-mask game engine for N×N tic-tac-toe.

use crate::action::MoveOutcome;
use crate::board_size::{BoardSize, Mask};
use crate::error::EngineError;
use crate::invariants::assert_invariants;
use crate::rules::{WinningPatterns, is_full};
use crate::snapshot::Snapshot;
use crate::types::{Cell, GameStatus, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine.
///
/// Occupancy is held as one mask per player, bit index `row * N + col`.
/// The winning-line table is built once per engine and owned by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub(crate) size: BoardSize,
    patterns: WinningPatterns,
    pub(crate) x_mask: Mask,
    pub(crate) o_mask: Mask,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    winning_pattern: Option<Mask>,
}

impl Engine {
    /// Creates an engine for an `n`×`n` board with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] when `n < 1` or `n * n`
    /// does not fit in a [`Mask`].
    #[instrument]
    pub fn new(n: i64) -> Result<Self, EngineError> {
        let size = BoardSize::new(n)?;
        Ok(Self::with_size(size))
    }

    /// Creates an engine from an already validated size.
    #[instrument]
    pub fn with_size(size: BoardSize) -> Self {
        let patterns = WinningPatterns::for_size(size);
        debug!(patterns = patterns.len(), "Built winning patterns");
        Self {
            size,
            patterns,
            x_mask: 0,
            o_mask: 0,
            current_player: Player::X,
            status: GameStatus::Ongoing,
            winning_pattern: None,
        }
    }

    /// Board size.
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Player whose turn it is (or who just ended the game).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winning-line table for this board size.
    pub fn patterns(&self) -> &WinningPatterns {
        &self.patterns
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks run in a fixed order: coordinates, game over, occupancy.
    /// Any rejection leaves the engine unchanged.
    #[instrument(skip(self), fields(player = %self.current_player, status = %self.status))]
    pub fn make_move(&mut self, row: i64, col: i64) -> MoveOutcome {
        let Some(bit) = self.size.bit(row, col) else {
            debug!("Rejected move outside the board");
            return MoveOutcome::InvalidCoordinates;
        };

        if self.is_over() {
            debug!("Rejected move after game end");
            return MoveOutcome::GameAlreadyOver;
        }

        if self.occupied() & bit != 0 {
            debug!("Rejected move on occupied cell");
            return MoveOutcome::PositionTaken;
        }

        let player = self.current_player;
        let player_mask = match player {
            Player::X => &mut self.x_mask,
            Player::O => &mut self.o_mask,
        };
        *player_mask |= bit;
        let player_mask = *player_mask;

        if let Some(pattern) = self.patterns.first_match(player_mask) {
            self.winning_pattern = Some(pattern);
            self.status = GameStatus::Won(player);
            info!(%player, "Game won");
        } else if is_full(self.size, self.occupied()) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Turn passed");
        }

        assert_invariants(self);
        MoveOutcome::Success
    }

    /// Owner of `(row, col)`; `None` when empty or outside the board.
    pub fn player_at(&self, row: i64, col: i64) -> Option<Player> {
        let bit = self.size.bit(row, col)?;
        if self.x_mask & bit != 0 {
            Some(Player::X)
        } else if self.o_mask & bit != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Cell contents at `(row, col)`; out-of-range reads as empty.
    pub fn cell(&self, row: i64, col: i64) -> Cell {
        self.player_at(row, col).into()
    }

    /// Cells of the winning line in ascending row-major order.
    ///
    /// The first and last entries are the two ends of the line.
    /// Returns `None` unless the game has been won.
    pub fn winning_coordinates(&self) -> Option<Vec<(usize, usize)>> {
        if !matches!(self.status, GameStatus::Won(_)) {
            return None;
        }
        let pattern = self.winning_pattern?;
        Some(
            (0..self.size.cells())
                .filter(|&index| pattern & (1 << index) != 0)
                .map(|index| self.size.coordinates(index))
                .collect(),
        )
    }

    /// Empty cells in row-major order; empty once the game is over.
    pub fn available_moves(&self) -> Vec<(usize, usize)> {
        if self.is_over() {
            return Vec::new();
        }
        let occupied = self.occupied();
        (0..self.size.cells())
            .filter(|&index| occupied & (1 << index) == 0)
            .map(|index| self.size.coordinates(index))
            .collect()
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn reset(&mut self) {
        self.x_mask = 0;
        self.o_mask = 0;
        self.status = GameStatus::Ongoing;
        self.winning_pattern = None;
        self.current_player = Player::X;
        debug!("Engine reset");
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_size: self.size,
            x_mask: self.x_mask,
            o_mask: self.o_mask,
            current_player: self.current_player,
            status: self.status,
            winning_coordinates: self.winning_coordinates(),
        }
    }

    pub(crate) fn occupied(&self) -> Mask {
        self.x_mask | self.o_mask
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.size.get() as i64;
        for row in 0..n {
            let line = (0..n)
                .map(|col| self.cell(row, col).symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
