//! Tests for non-interactive replay.

use strictly_bitboard::{EngineError, GameStatus, MoveOutcome, Player};
use strictly_bitboard_cli::replay;

#[test]
fn test_replay_records_each_outcome() {
    let report = replay(3, &[(0, 0), (0, 0), (1, 0), (0, 1), (3, 3), (1, 1), (0, 2)]).unwrap();
    assert_eq!(
        report.outcomes,
        vec![
            MoveOutcome::Success,
            MoveOutcome::PositionTaken,
            MoveOutcome::Success,
            MoveOutcome::Success,
            MoveOutcome::InvalidCoordinates,
            MoveOutcome::Success,
            MoveOutcome::Success,
        ]
    );
    assert_eq!(report.snapshot.status, GameStatus::Won(Player::X));
    assert_eq!(
        report.snapshot.winning_coordinates,
        Some(vec![(0, 0), (0, 1), (0, 2)])
    );
}

#[test]
fn test_replay_rejects_bad_size() {
    assert!(matches!(
        replay(0, &[]),
        Err(EngineError::InvalidBoardSize { size: 0, .. })
    ));
}

#[test]
fn test_replay_report_serializes() {
    let report = replay(2, &[(0, 0)]).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"], serde_json::json!(["Success"]));
    assert_eq!(json["snapshot"]["current_player"], "O");
}
