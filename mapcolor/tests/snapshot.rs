use mapcolor::{
    Board, BoardSnapshot, Brush, Completion, EngineConfig, LevelDescriptor, SnapshotError,
    UndoEntry, UndoOutcome, Vec2, Viewport,
};
use pretty_assertions::assert_eq;

const LEVEL: &str = r#"{
    "id": "triangle",
    "name": "Triangle",
    "regions": [
        {"id": 1, "points": [[0,0],[10,0],[10,10],[0,10]], "neighbors": [2, 3]},
        {"id": 2, "points": [[10,0],[20,0],[20,10],[10,10]], "neighbors": [1, 3]},
        {"id": 3, "points": [[0,10],[20,10],[20,20],[0,20]], "neighbors": [1, 2]}
    ]
}"#;

fn board() -> Board {
    let level = LevelDescriptor::from_json_str(LEVEL).unwrap();
    let mut b = Board::new(&EngineConfig::compact());
    b.load_level(&level, Viewport::new(640.0, 480.0));
    b
}

#[test]
fn empty_board_has_no_snapshot() {
    let b = Board::default();
    assert!(b.snapshot().is_none());
}

#[test]
fn snapshot_restores_colors_brush_view_and_history() {
    let mut b = board();
    b.color_region(1, Brush::Paint(0));
    b.color_region(2, Brush::Paint(1));
    b.color_region(3, Brush::Paint(1));
    b.select_eraser();
    b.zoom_by(1.5, Some(Vec2::new(100.0, 100.0)));
    b.pan_by(Vec2::new(-12.0, 30.0));
    let snap = b.snapshot().unwrap();
    assert_eq!(snap.selected_color, -1);
    assert!(snap.eraser_mode);

    let json = snap.to_json_value().to_string();
    let parsed = BoardSnapshot::from_json_str(&json).unwrap();
    assert_eq!(parsed, snap);

    let mut fresh = board();
    fresh.restore(&parsed).unwrap();
    assert_eq!(fresh.snapshot().unwrap(), snap);
    assert_eq!(fresh.status(), Completion { complete: true, valid: false });
    assert_eq!(fresh.brush(), Brush::Eraser);
    assert_eq!(fresh.undo(), UndoOutcome::Reverted(3));
    assert_eq!(fresh.region(3).unwrap().color(), None);
}

#[test]
fn flags_come_from_colors_not_from_storage() {
    let json = r#"{
        "level_id": "triangle",
        "region_colors": {"1": 0, "2": 1, "3": 2},
        "selected_color": 2,
        "eraser_mode": false,
        "zoom": 2.0,
        "pan": [10.0, 20.0],
        "complete": false,
        "valid": false
    }"#;
    let snap = BoardSnapshot::from_json_str(json).unwrap();
    let mut b = board();
    b.restore(&snap).unwrap();
    assert_eq!(b.status(), Completion { complete: true, valid: true });
    assert_eq!(b.brush(), Brush::Paint(2));
    assert_eq!(b.view().zoom(), 2.0);
    assert_eq!(b.view().pan(), Vec2::new(10.0, 20.0));
    assert!(b.history().is_empty());
}

#[test]
fn restore_drops_entries_for_unknown_regions() {
    let mut snap = board().snapshot().unwrap();
    snap.region_colors.insert(1, Some(3));
    snap.region_colors.insert(77, Some(1));
    snap.region_colors.insert(2, Some(9));
    snap.undo_history = vec![
        UndoEntry { region_id: 77, previous_color: None },
        UndoEntry { region_id: 1, previous_color: None },
        UndoEntry { region_id: 2, previous_color: Some(8) },
    ];
    let mut b = board();
    b.restore(&snap).unwrap();
    assert_eq!(b.region(1).unwrap().color(), Some(3));
    assert_eq!(b.region(2).unwrap().color(), None);
    assert_eq!(b.history().len(), 1);
}

#[test]
fn restore_clamps_zoom_and_rejects_bad_view() {
    let mut snap = board().snapshot().unwrap();
    snap.zoom = 1000.0;
    let mut b = board();
    b.restore(&snap).unwrap();
    assert_eq!(b.view().zoom(), 5.0);

    let fitted = board().view().clone();
    snap.zoom = f64::NAN;
    b.restore(&snap).unwrap();
    assert_eq!(b.view(), &fitted);
}

#[test]
fn restore_trims_history_to_capacity() {
    let mut snap = board().snapshot().unwrap();
    snap.undo_history = (0..30)
        .map(|i| UndoEntry { region_id: 1 + i % 3, previous_color: Some((i % 4) as u8) })
        .collect();
    let mut b = board();
    b.restore(&snap).unwrap();
    assert_eq!(b.history().len(), 20);
    assert_eq!(b.history().iter().last(), snap.undo_history.last());
}

#[test]
fn restore_requires_matching_level() {
    let mut snap = board().snapshot().unwrap();
    snap.level_id = "other".into();
    let mut b = board();
    let err = b.restore(&snap).unwrap_err();
    assert!(matches!(err, SnapshotError::LevelMismatch { .. }));
    assert_eq!(err.code(), "level_mismatch");

    let err = Board::default().restore(&snap).unwrap_err();
    assert!(matches!(err, SnapshotError::NoLevel));
}
