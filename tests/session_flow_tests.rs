//! Integrationstests für den Zeichen-Flow der `DrawingSession`:
//! - Klicks, Auto-Abschluss und Vorschau
//! - Undo/Redo über mehrere Striche
//! - Werkzeugwechsel und Abbruch

use geo_plotting::{
    DrawingSession, HaversineGeodesy, Outline, PlottingOptions, SessionEvent, SymbolKind,
};
use glam::DVec2;

fn session_with(kind: SymbolKind) -> DrawingSession {
    let mut session = DrawingSession::default();
    session
        .handle_event(SessionEvent::SelectTool(kind))
        .expect("Werkzeugwechsel sollte ohne Fehler durchlaufen");
    session
}

fn click(session: &mut DrawingSession, x: f64, y: f64) {
    session
        .handle_event(SessionEvent::PointerClick {
            pos: DVec2::new(x, y),
        })
        .expect("Klick sollte ohne Fehler durchlaufen");
}

fn move_to(session: &mut DrawingSession, x: f64, y: f64) {
    session
        .handle_event(SessionEvent::PointerMove {
            pos: DVec2::new(x, y),
        })
        .expect("Zeigerbewegung sollte ohne Fehler durchlaufen");
}

// ─── Auto-Abschluss ─────────────────────────────────────────────────

#[test]
fn test_circle_commits_and_resets_after_second_click() {
    let mut session = session_with(SymbolKind::Circle);
    click(&mut session, 13.40, 52.50);
    click(&mut session, 13.41, 52.50);

    assert_eq!(session.layer().shape_count(), 1);
    assert!(session.active_points().is_empty());
    let shape = session.layer().iter().next().expect("Kreis platziert");
    assert_eq!(shape.kind, SymbolKind::Circle);
    assert_eq!(
        shape.outline.point_count(),
        PlottingOptions::default().circle_segments
    );

    // Nächster Klick beginnt einen neuen Kreis
    click(&mut session, 13.50, 52.50);
    click(&mut session, 13.51, 52.50);
    assert_eq!(session.layer().shape_count(), 2);
}

#[test]
fn test_double_arrow_commits_with_fourth_point() {
    let mut session = session_with(SymbolKind::DoubleArrow);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 10.0, 0.0);
    click(&mut session, 8.0, 6.0);
    assert!(session.layer().is_empty());

    move_to(&mut session, 2.0, 6.0);
    assert!(matches!(session.preview(), Some(Outline::Polygon(_))));

    click(&mut session, 2.0, 6.0);
    assert_eq!(session.layer().shape_count(), 1);
    assert!(session.preview().is_none());
    assert!(session.active_points().is_empty());
}

#[test]
fn test_lune_previews_semicircle_then_commits_arc() {
    let mut session = session_with(SymbolKind::Lune);
    click(&mut session, 0.0, 0.0);
    move_to(&mut session, 4.0, 0.0);
    assert!(session.preview().is_some());

    click(&mut session, 4.0, 0.0);
    assert!(session.layer().is_empty(), "Mondsichel braucht drei Punkte");

    click(&mut session, 2.0, 1.0);
    assert_eq!(session.layer().shape_count(), 1);
    assert!(session.active_points().is_empty());
}

// ─── Fortlaufende Striche ───────────────────────────────────────────

#[test]
fn test_polygon_grows_in_place() {
    let mut session = session_with(SymbolKind::Polygon);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 1.0, 0.0);
    assert!(session.layer().is_empty(), "Polygon braucht drei Punkte");

    click(&mut session, 1.0, 1.0);
    click(&mut session, 0.0, 1.0);
    assert_eq!(session.layer().shape_count(), 1);
    let shape = session.layer().iter().next().expect("Polygon");
    match &shape.outline {
        Outline::Polygon(points) => assert_eq!(points.len(), 4),
        other => panic!("Polygon erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_cancel_keeps_placed_shape() {
    let mut session = session_with(SymbolKind::StraightArrow);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 6.0, 0.0);
    session.handle_event(SessionEvent::Cancel).expect("Abbruch");

    assert_eq!(session.layer().shape_count(), 1);
    assert!(session.active_points().is_empty());

    // Neuer Strich erzeugt ein zweites Symbol
    click(&mut session, 0.0, 5.0);
    click(&mut session, 6.0, 5.0);
    assert_eq!(session.layer().shape_count(), 2);
}

#[test]
fn test_rectangle_third_click_moves_corner() {
    let mut session = session_with(SymbolKind::Rectangle);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 4.0, 2.0);
    click(&mut session, 5.0, 3.0);

    assert_eq!(session.layer().shape_count(), 1);
    let shape = session.layer().iter().next().expect("Rechteck");
    let max_x = shape.outline.points().map(|p| p.x).fold(f64::MIN, f64::max);
    let max_y = shape.outline.points().map(|p| p.y).fold(f64::MIN, f64::max);
    assert_eq!((max_x, max_y), (5.0, 3.0));
}

// ─── Undo / Redo ────────────────────────────────────────────────────

#[test]
fn test_undo_redo_across_strokes() {
    let mut session = session_with(SymbolKind::SectorSearch);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 0.0, 3.0);
    click(&mut session, 10.0, 0.0);
    click(&mut session, 10.0, 3.0);
    assert_eq!(session.layer().shape_count(), 2);

    session.handle_event(SessionEvent::Undo).expect("undo");
    assert_eq!(session.layer().shape_count(), 1);
    session.handle_event(SessionEvent::Undo).expect("undo");
    assert!(session.layer().is_empty());
    assert!(!session.can_undo());

    session.handle_event(SessionEvent::Redo).expect("redo");
    session.handle_event(SessionEvent::Redo).expect("redo");
    assert_eq!(session.layer().shape_count(), 2);
    assert!(!session.can_redo());
}

#[test]
fn test_new_stroke_after_undo_clears_redo() {
    let mut session = session_with(SymbolKind::GatheringPlace);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 3.0, 0.0);
    session.handle_event(SessionEvent::Undo).expect("undo");
    assert!(session.can_redo());

    click(&mut session, 5.0, 5.0);
    click(&mut session, 8.0, 5.0);
    assert!(!session.can_redo());
    assert_eq!(session.layer().shape_count(), 1);
}

#[test]
fn test_undo_restores_layer_snapshot_not_copy() {
    let mut session = session_with(SymbolKind::Line);
    click(&mut session, 0.0, 0.0);
    click(&mut session, 1.0, 1.0);
    let before_second = session.shared_layer();

    session.handle_event(SessionEvent::Cancel).expect("Abbruch");
    click(&mut session, 2.0, 2.0);
    click(&mut session, 3.0, 3.0);
    session.handle_event(SessionEvent::Undo).expect("undo");

    assert!(std::sync::Arc::ptr_eq(&before_second, &session.shared_layer()));
}

#[test]
fn test_history_depth_from_options() {
    let options = PlottingOptions {
        history_depth: 2,
        ..PlottingOptions::default()
    };
    let mut session = DrawingSession::new(options, Box::new(HaversineGeodesy));
    session
        .handle_event(SessionEvent::SelectTool(SymbolKind::Circle))
        .expect("Werkzeugwechsel");
    for i in 0..4 {
        let x = i as f64;
        click(&mut session, x, 0.0);
        click(&mut session, x + 0.5, 0.0);
    }
    assert_eq!(session.layer().shape_count(), 4);

    let mut undos = 0;
    while session.can_undo() {
        session.handle_event(SessionEvent::Undo).expect("undo");
        undos += 1;
    }
    assert_eq!(undos, 2);
    assert_eq!(session.layer().shape_count(), 2);
}

// ─── Werkzeugwechsel ────────────────────────────────────────────────

#[test]
fn test_select_tool_discards_stroke_and_preview() {
    let mut session = session_with(SymbolKind::DiagonalArrow);
    click(&mut session, 0.0, 0.0);
    move_to(&mut session, 5.0, 5.0);
    assert!(session.preview().is_some());

    session
        .handle_event(SessionEvent::SelectTool(SymbolKind::ParallelSearch))
        .expect("Werkzeugwechsel");
    assert_eq!(session.active_kind(), SymbolKind::ParallelSearch);
    assert!(session.preview().is_none());
    assert!(session.active_points().is_empty());
}

#[test]
fn test_parallel_search_preview_needs_two_placed_points() {
    let mut session = session_with(SymbolKind::ParallelSearch);
    click(&mut session, 0.0, 0.0);
    move_to(&mut session, 4.0, 0.0);
    assert!(session.preview().is_none());

    click(&mut session, 4.0, 0.0);
    move_to(&mut session, 4.0, 3.0);
    assert!(matches!(session.preview(), Some(Outline::MultiLineString(_))));
    assert!(session.layer().is_empty());
}
