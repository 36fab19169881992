//! Integration tests: pointer gestures against the editor state.
//!
//! Covers the drag delta-transfer rule under nesting and alignment, the
//! eight-handle resize protocol, grid snapping, palette-drop debouncing,
//! and batched keyboard actions.

use ovl_core::geometry::effective_size;
use ovl_core::{CanvasConfig, WidgetCatalog};
use ovl_editor::input::{Modifiers, ResizeHandle};
use ovl_editor::state::{EditorState, WidgetPatch};
use ovl_editor::CanvasEngine;

fn editor() -> EditorState {
    EditorState::new(WidgetCatalog::builtin())
}

fn snapping_canvas() -> CanvasConfig {
    CanvasConfig {
        snap_to_grid: true,
        ..CanvasConfig::default()
    }
}

// ─── Drag ───────────────────────────────────────────────────────────────

#[test]
fn drag_applies_display_delta_to_anchor() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("text", 100.0, 100.0, None).unwrap();

    // Rendered at its anchor; grab 5px inside the widget
    assert!(engine.begin_drag(&state, id, (100.0, 100.0), (105.0, 105.0)));
    engine.drag_to(&mut state, (155.0, 125.0));
    assert!(engine.end_drag(&mut state));

    let w = state.find_widget(id).unwrap();
    assert_eq!((w.x, w.y), (150.0, 120.0));
}

#[test]
fn drag_nested_centered_widget_moves_by_exact_delta() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    // Two containers deep, center-aligned: anchor and display diverge,
    // but the drag delta must transfer 1:1 onto the anchor.
    let outer = state.add_widget("composite", 200.0, 200.0, None).unwrap();
    let inner = state.add_widget("translate", 40.0, 40.0, Some(outer)).unwrap();
    let id = state.add_widget("text", 100.0, 100.0, Some(inner)).unwrap();
    state.set_property(id, "align", "centre".into());

    // The surface reports whatever it painted; only deltas matter
    let display = (265.0, 340.0);
    assert!(engine.begin_drag(&state, id, display, (270.0, 345.0)));
    engine.drag_to(&mut state, (270.0 + 50.0, 345.0 + 0.0));
    engine.end_drag(&mut state);

    let w = state.find_widget(id).unwrap();
    assert_eq!(
        (w.x, w.y),
        (150.0, 100.0),
        "anchor delta must equal display delta regardless of alignment or nesting"
    );
}

#[test]
fn drag_snaps_display_position_to_grid() {
    let mut state = editor();
    state.set_canvas(snapping_canvas());
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("text", 100.0, 100.0, None).unwrap();

    engine.begin_drag(&state, id, (100.0, 100.0), (100.0, 100.0));
    engine.drag_to(&mut state, (123.0, 118.0));
    engine.end_drag(&mut state);

    let w = state.find_widget(id).unwrap();
    assert_eq!((w.x, w.y), (120.0, 120.0));
}

#[test]
fn locked_widget_refuses_drag() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("text", 0.0, 0.0, None).unwrap();
    state.update_widget(id, &WidgetPatch {
        locked: Some(true),
        ..WidgetPatch::default()
    });
    state.commit();

    assert!(!engine.begin_drag(&state, id, (0.0, 0.0), (0.0, 0.0)));
}

#[test]
fn unmoved_drag_leaves_no_history_entry() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("text", 50.0, 50.0, None).unwrap();
    let undo_before = state.can_undo();

    engine.begin_drag(&state, id, (50.0, 50.0), (55.0, 55.0));
    engine.drag_to(&mut state, (55.0, 55.0)); // pointer never left the spot
    assert!(!engine.end_drag(&mut state));

    assert_eq!(state.can_undo(), undo_before);
    state.undo();
    assert!(
        state.find_widget(id).is_none(),
        "single undo should reach back past the add"
    );
}

// ─── Resize ─────────────────────────────────────────────────────────────

#[test]
fn se_resize_keeps_anchor_fixed() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("frame", 100.0, 100.0, None).unwrap();

    engine.begin_resize(&state, id, ResizeHandle::Se, (400.0, 300.0));
    engine.resize_to(&mut state, (450.0, 340.0));
    engine.end_resize(&mut state);

    let w = state.find_widget(id).unwrap();
    assert_eq!((w.x, w.y), (100.0, 100.0), "far-side handles never move the anchor");
    // frame declares width/height properties; both grow by the pointer delta
    assert_eq!(w.properties.get("width").and_then(|v| v.as_f64()), Some(350.0));
    assert_eq!(w.properties.get("height").and_then(|v| v.as_f64()), Some(240.0));
}

#[test]
fn nw_resize_pins_bottom_right_corner() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("frame", 100.0, 100.0, None).unwrap();
    let (w0, h0) = {
        let w = state.find_widget(id).unwrap();
        effective_size(w, state.catalog().get("frame"))
    };
    let corner = (100.0 + w0, 100.0 + h0);

    engine.begin_resize(&state, id, ResizeHandle::Nw, (100.0, 100.0));
    engine.resize_to(&mut state, (130.0, 120.0));
    engine.end_resize(&mut state);

    let w = state.find_widget(id).unwrap();
    let (w1, h1) = effective_size(w, state.catalog().get("frame"));
    assert_eq!((w1, h1), (w0 - 30.0, h0 - 20.0));
    assert_eq!(
        (w.x + w1, w.y + h1),
        corner,
        "near-side handles must keep the opposite corner fixed"
    );
}

#[test]
fn resize_enforces_minimum_size() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("frame", 0.0, 0.0, None).unwrap();

    engine.begin_resize(&state, id, ResizeHandle::Se, (300.0, 200.0));
    engine.resize_to(&mut state, (-500.0, -500.0));
    engine.end_resize(&mut state);

    let w = state.find_widget(id).unwrap();
    assert_eq!(w.properties.get("width").and_then(|v| v.as_f64()), Some(20.0));
    assert_eq!(w.properties.get("height").and_then(|v| v.as_f64()), Some(20.0));
}

#[test]
fn square_typed_widget_resizes_through_size_property() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("compass", 50.0, 50.0, None).unwrap();

    engine.begin_resize(&state, id, ResizeHandle::Se, (306.0, 306.0));
    engine.resize_to(&mut state, (306.0 + 44.0, 306.0 + 94.0));
    engine.end_resize(&mut state);

    let w = state.find_widget(id).unwrap();
    // size takes min(new_w, new_h) = min(300, 350); the square stays square
    assert_eq!(w.properties.get("size").and_then(|v| v.as_f64()), Some(300.0));
    assert!(w.display_width.is_none());
}

#[test]
fn sizeless_type_resizes_into_display_override() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    // text has neither width/height nor square size properties
    let id = state.add_widget("text", 0.0, 0.0, None).unwrap();

    engine.begin_resize(&state, id, ResizeHandle::E, (150.0, 15.0));
    engine.resize_to(&mut state, (210.0, 15.0));
    engine.end_resize(&mut state);

    let w = state.find_widget(id).unwrap();
    assert_eq!(w.display_width, Some(210.0));
    assert_eq!(w.display_height, Some(30.0));
    assert!(!w.properties.contains_key("width"));
}

#[test]
fn resize_floor_applies_before_grid_snap() {
    let mut state = editor();
    state.set_canvas(CanvasConfig {
        snap_to_grid: true,
        grid_size: 15,
        ..CanvasConfig::default()
    });
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("frame", 0.0, 0.0, None).unwrap();

    engine.begin_resize(&state, id, ResizeHandle::Se, (300.0, 200.0));
    engine.resize_to(&mut state, (-500.0, -500.0));
    engine.end_resize(&mut state);

    let w = state.find_widget(id).unwrap();
    // floored to 20, then snapped to the nearest multiple of 15
    assert_eq!(w.properties.get("width").and_then(|v| v.as_f64()), Some(15.0));
}

#[test]
fn resize_is_one_history_entry() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("frame", 100.0, 100.0, None).unwrap();

    engine.begin_resize(&state, id, ResizeHandle::Se, (400.0, 300.0));
    for i in 1..=8 {
        engine.resize_to(&mut state, (400.0 + f64::from(i) * 10.0, 300.0));
    }
    engine.end_resize(&mut state);

    assert!(state.undo());
    let w = state.find_widget(id).unwrap();
    assert_eq!(
        w.properties.get("width").and_then(|v| v.as_f64()),
        Some(300.0),
        "one undo must unwind the whole gesture"
    );
}

// ─── Palette drop ───────────────────────────────────────────────────────

#[test]
fn duplicate_drop_within_window_is_discarded() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let first = engine
        .drop_from_palette(&mut state, "metric", (100.0, 100.0), 1_000)
        .unwrap();
    assert!(first.is_some());

    let dupe = engine
        .drop_from_palette(&mut state, "metric", (102.0, 101.0), 1_150)
        .unwrap();
    assert!(dupe.is_none(), "same-type drop inside 300ms is a browser echo");

    let later = engine
        .drop_from_palette(&mut state, "metric", (300.0, 100.0), 1_400)
        .unwrap();
    assert!(later.is_some());

    assert_eq!(state.layout().widgets.len(), 2);
}

#[test]
fn different_type_drop_is_not_debounced() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    engine
        .drop_from_palette(&mut state, "metric", (0.0, 0.0), 1_000)
        .unwrap();
    let other = engine
        .drop_from_palette(&mut state, "icon", (50.0, 0.0), 1_050)
        .unwrap();
    assert!(other.is_some());
}

#[test]
fn drop_of_unknown_type_reports_error() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let result = engine.drop_from_palette(&mut state, "tachyon_field", (0.0, 0.0), 0);
    assert!(result.is_err());
    assert!(state.layout().widgets.is_empty());
}

#[test]
fn drop_snaps_to_grid() {
    let mut state = editor();
    state.set_canvas(snapping_canvas());
    let mut engine = CanvasEngine::new();

    let id = engine
        .drop_from_palette(&mut state, "icon", (47.0, 93.0), 0)
        .unwrap()
        .unwrap();
    let w = state.find_widget(id).unwrap();
    assert_eq!((w.x, w.y), (50.0, 90.0));
}

// ─── Keyboard ───────────────────────────────────────────────────────────

#[test]
fn delete_selection_is_one_undo_step() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let a = state.add_widget("text", 0.0, 0.0, None).unwrap();
    let b = state.add_widget("icon", 50.0, 0.0, None).unwrap();
    let c = state.add_widget("metric", 100.0, 0.0, None).unwrap();
    state.set_selection(&[a, b]);

    assert_eq!(engine.delete_selection(&mut state), 2);
    assert!(state.find_widget(a).is_none());
    assert!(state.find_widget(c).is_some());
    assert!(state.selection().is_empty());

    state.undo();
    assert_eq!(state.layout().widgets.len(), 3, "batch delete undoes as one step");
}

#[test]
fn nudge_moves_unlocked_selection_once() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let a = state.add_widget("text", 10.0, 10.0, None).unwrap();
    let b = state.add_widget("icon", 20.0, 20.0, None).unwrap();
    state.update_widget(b, &WidgetPatch {
        locked: Some(true),
        ..WidgetPatch::default()
    });
    state.commit();
    state.set_selection(&[a, b]);

    assert_eq!(engine.nudge_selection(&mut state, 10.0, 0.0), 1);
    assert_eq!(state.find_widget(a).unwrap().x, 20.0);
    assert_eq!(state.find_widget(b).unwrap().x, 20.0, "locked widgets stay put");

    state.undo();
    assert_eq!(state.find_widget(a).unwrap().x, 10.0, "one key press, one undo step");
}

#[test]
fn select_all_covers_nested_widgets() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let group = state.add_widget("composite", 0.0, 0.0, None).unwrap();
    state.add_widget("text", 0.0, 0.0, Some(group)).unwrap();
    state.add_widget("icon", 0.0, 0.0, None).unwrap();

    engine.select_all(&mut state);
    assert_eq!(state.selection().len(), 3);
}

// ─── Click selection ────────────────────────────────────────────────────

#[test]
fn click_replaces_modifier_click_toggles() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let a = state.add_widget("text", 0.0, 0.0, None).unwrap();
    let b = state.add_widget("icon", 0.0, 0.0, None).unwrap();

    engine.click(&mut state, Some(a), Modifiers::NONE);
    assert_eq!(state.selection(), &[a]);

    engine.click(&mut state, Some(b), Modifiers::SHIFT);
    assert_eq!(state.selection(), &[a, b]);

    engine.click(&mut state, Some(a), Modifiers::SHIFT);
    assert_eq!(state.selection(), &[b]);

    engine.click(&mut state, None, Modifiers::NONE);
    assert!(state.selection().is_empty());
}

// ─── Gesture abort ──────────────────────────────────────────────────────

#[test]
fn lost_pointer_capture_commits_transient_state() {
    let mut state = editor();
    let mut engine = CanvasEngine::new();

    let id = state.add_widget("text", 100.0, 100.0, None).unwrap();

    engine.begin_drag(&state, id, (100.0, 100.0), (100.0, 100.0));
    engine.drag_to(&mut state, (160.0, 100.0));
    engine.cancel_gesture(&mut state);

    assert!(!engine.gesture_active());
    let w = state.find_widget(id).unwrap();
    assert_eq!(w.x, 160.0, "no rollback on abort; last applied state stays");

    state.undo();
    assert_eq!(state.find_widget(id).unwrap().x, 100.0, "abort committed one entry");
}
