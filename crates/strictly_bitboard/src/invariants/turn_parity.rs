//! Turn parity invariant: mark counts agree with whose turn it is.

use super::Invariant;
use crate::{Engine, GameStatus, Player};

/// Invariant: X has as many marks as O, or exactly one more.
///
/// While the game is ongoing X is to move exactly when the counts are
/// equal. After the game ends the current player is whoever moved last.
pub struct TurnParityInvariant;

impl Invariant<Engine> for TurnParityInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.x_mask.count_ones();
        let o = engine.o_mask.count_ones();
        if x != o && x != o + 1 {
            return false;
        }

        let expected = match engine.status {
            GameStatus::Ongoing if x == o => Player::X,
            GameStatus::Ongoing => Player::O,
            GameStatus::Won(_) | GameStatus::Draw if x == o => Player::O,
            GameStatus::Won(_) | GameStatus::Draw => Player::X,
        };
        let winner_moved_last = engine
            .status
            .winner()
            .is_none_or(|winner| winner == expected);

        engine.current_player == expected && winner_moved_last
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = Engine::new(3).unwrap();
        for (i, (row, col)) in [(0, 0), (1, 1), (2, 2), (0, 2)].into_iter().enumerate() {
            engine.make_move(row, col);
            assert!(TurnParityInvariant::holds(&engine), "after move {i}");
        }
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_holds_after_o_wins() {
        let mut engine = Engine::new(2).unwrap();
        // 2x2: O can't win before X completes a line, so build it directly.
        engine.o_mask = 0b0011;
        engine.x_mask = 0b0100 | 0b1000;
        engine.status = GameStatus::Won(Player::O);
        engine.current_player = Player::O;
        assert!(TurnParityInvariant::holds(&engine));
    }

    #[test]
    fn test_o_moving_twice_violates() {
        let mut engine = Engine::new(3).unwrap();
        engine.o_mask = 0b11;
        engine.current_player = Player::X;
        assert!(!TurnParityInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut engine = Engine::new(3).unwrap();
        engine.make_move(0, 0);
        engine.current_player = Player::X;
        assert!(!TurnParityInvariant::holds(&engine));
    }
}
