//! Snapshots as seen by an external renderer reading JSON

use serde::Deserialize;
use tetris_arena::core::{Session, SessionConfig};
use tetris_arena::types::ShapeId;

/// The subset of a snapshot a score display would read
#[derive(Debug, Deserialize)]
struct ScoreView {
    score: u32,
    lines: u32,
    games_over: u32,
}

#[derive(Debug, Deserialize)]
struct ActiveView {
    shape: ShapeId,
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct BoardView {
    width: usize,
    height: usize,
    grid: Vec<Vec<u8>>,
    active: ActiveView,
}

#[test]
fn snapshot_json_feeds_score_display() {
    let mut session = Session::with_config(SessionConfig {
        width: 4,
        height: 4,
        shapes: vec![ShapeId::O],
        ..SessionConfig::default()
    })
    .unwrap();

    // Two O pieces side by side clear the bottom two rows
    session.move_left();
    while session.soft_drop() == tetris_arena::core::DropOutcome::Fell {}
    session.move_right();
    while session.soft_drop() == tetris_arena::core::DropOutcome::Fell {}

    let json = serde_json::to_string(&session.snapshot()).unwrap();
    let view: ScoreView = serde_json::from_str(&json).unwrap();

    assert_eq!(view.score, 30);
    assert_eq!(view.lines, 2);
    assert_eq!(view.games_over, 0);
}

#[test]
fn snapshot_json_feeds_board_renderer() {
    let mut session = Session::with_config(SessionConfig {
        shapes: vec![ShapeId::T],
        ..SessionConfig::default()
    })
    .unwrap();
    session.soft_drop();
    session.soft_drop();

    let json = serde_json::to_string(&session.snapshot()).unwrap();
    let view: BoardView = serde_json::from_str(&json).unwrap();

    assert_eq!(view.width, 12);
    assert_eq!(view.height, 20);
    assert_eq!(view.grid.len(), 20);
    assert!(view.grid.iter().all(|row| row.len() == 12 && row.iter().all(|&c| c == 0)));
    assert_eq!(view.active.shape, ShapeId::T);
    assert_eq!((view.active.x, view.active.y), (5, 2));
}

#[test]
fn snapshot_active_cells_match_composited_view() {
    let mut session = Session::new(77);
    for _ in 0..5 {
        session.soft_drop();
    }
    let snap = session.snapshot();
    let composited = session.composited();

    for (x, y, value) in snap.active_cells() {
        assert_eq!(composited[y as usize * snap.width + x as usize], value);
    }
    assert_eq!(snap.active_cells().count(), 4);
}
