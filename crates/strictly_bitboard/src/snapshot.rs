//! Serializable view of engine state.

use crate::board_size::{BoardSize, Mask};
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of an engine, for renderers and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board side length.
    pub board_size: BoardSize,
    /// Cells held by X.
    pub x_mask: Mask,
    /// Cells held by O.
    pub o_mask: Mask,
    /// Player to move, or the player who made the final move.
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Winning line in row-major order, when the game is won.
    pub winning_coordinates: Option<Vec<(usize, usize)>>,
}

impl Snapshot {
    /// Renders the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Engine;

    #[test]
    fn test_snapshot_json_shape() {
        let mut engine = Engine::new(1).unwrap();
        engine.make_move(0, 0);
        let json: serde_json::Value =
            serde_json::from_str(&engine.snapshot().to_json().unwrap()).unwrap();
        assert_eq!(json["board_size"], 1);
        assert_eq!(json["x_mask"], 1);
        assert_eq!(json["status"]["Won"], "X");
        assert_eq!(json["winning_coordinates"], serde_json::json!([[0, 0]]));
    }

    #[test]
    fn test_snapshot_round_trips() {
        let mut engine = Engine::new(3).unwrap();
        engine.make_move(1, 1);
        let snapshot = engine.snapshot();
        let json = snapshot.to_json().unwrap();
        let parsed: super::Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
