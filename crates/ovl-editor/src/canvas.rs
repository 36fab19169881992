//! Canvas interaction engine.
//!
//! Translates pointer and keyboard input into `EditorState` mutations:
//! viewport→canvas coordinate transform under zoom, drag and eight-handle
//! resize gestures with grid snapping, palette drop placement with
//! duplicate-drop suppression, nudges, and click selection.
//!
//! Gesture frames go through the non-snapshotting mutation paths; only
//! the release commits a history entry. All gesture math runs in
//! canvas-logical space.

use crate::input::{Modifiers, ResizeHandle};
use crate::state::{EditorError, EditorState, WidgetPatch};
use ovl_core::WidgetId;
use ovl_core::geometry::effective_size;

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 2.0;
const ZOOM_STEP: f64 = 0.1;

/// Minimum widget size, per dimension, enforced before grid snapping.
const MIN_SIZE: f64 = 20.0;

/// Browsers can deliver the same palette drop twice; drops of the same
/// type inside this window are discarded.
const DROP_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    id: WidgetId,
    /// Anchor at pointer-down.
    start_anchor: (f64, f64),
    /// Rendered display top-left at pointer-down, supplied by the render
    /// surface. Pure geometry cannot reconstruct nested-container paint
    /// offsets, so the surface reports what it actually painted.
    start_display: (f64, f64),
    /// Pointer offset inside the widget at pointer-down.
    grab_offset: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
struct ResizeGesture {
    id: WidgetId,
    handle: ResizeHandle,
    start_pointer: (f64, f64),
    start_size: (f64, f64),
    start_anchor: (f64, f64),
}

#[derive(Debug, Clone)]
struct DropStamp {
    at_ms: u64,
    kind: String,
}

/// Pointer/keyboard front-end over an `EditorState`.
pub struct CanvasEngine {
    scale: f64,
    drag: Option<DragGesture>,
    resize: Option<ResizeGesture>,
    last_drop: Option<DropStamp>,
}

impl CanvasEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            drag: None,
            resize: None,
            last_drop: None,
        }
    }

    // ── Zoom & coordinates ──

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - ZOOM_STEP);
    }

    /// Convert viewport coordinates to canvas-logical coordinates:
    /// subtract the canvas origin, divide by the zoom scale.
    pub fn to_canvas(&self, viewport: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
        (
            (viewport.0 - origin.0) / self.scale,
            (viewport.1 - origin.1) / self.scale,
        )
    }

    pub fn gesture_active(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    // ── Drag ──

    /// Pointer-down on an unlocked widget. `display_pos` is the rendered
    /// top-left reported by the render surface; `pointer` is in canvas
    /// space.
    pub fn begin_drag(
        &mut self,
        state: &EditorState,
        id: WidgetId,
        display_pos: (f64, f64),
        pointer: (f64, f64),
    ) -> bool {
        let Some(widget) = state.find_widget(id) else {
            return false;
        };
        if widget.locked {
            return false;
        }
        self.drag = Some(DragGesture {
            id,
            start_anchor: (widget.x, widget.y),
            start_display: display_pos,
            grab_offset: (pointer.0 - display_pos.0, pointer.1 - display_pos.1),
        });
        log::trace!("drag start on {id} at {display_pos:?}");
        true
    }

    /// Pointer-move during a drag. Computes the new display position
    /// (snapped, clamped non-negative), then applies the *display delta*
    /// to the original anchor. Display and anchor positions diverge under
    /// alignment and nested-container offsets, but their deltas are equal,
    /// so delta transfer is the one move that stays correct for nested and
    /// aligned widgets at once. No snapshot per frame.
    pub fn drag_to(&mut self, state: &mut EditorState, pointer: (f64, f64)) -> bool {
        let Some(g) = self.drag else {
            return false;
        };
        let canvas = &state.layout().canvas;
        let snap_enabled = canvas.snap_to_grid;
        let grid = f64::from(canvas.grid_size);

        let mut display = (pointer.0 - g.grab_offset.0, pointer.1 - g.grab_offset.1);
        if snap_enabled {
            display = (snap(display.0, grid), snap(display.1, grid));
        }
        display = (display.0.max(0.0), display.1.max(0.0));

        let delta = (display.0 - g.start_display.0, display.1 - g.start_display.1);
        state.update_widget(
            g.id,
            &WidgetPatch::position(g.start_anchor.0 + delta.0, g.start_anchor.1 + delta.1),
        )
    }

    /// Pointer-up: one snapshot, and only if the anchor actually moved.
    pub fn end_drag(&mut self, state: &mut EditorState) -> bool {
        let Some(g) = self.drag.take() else {
            return false;
        };
        let moved = state
            .find_widget(g.id)
            .is_some_and(|w| (w.x, w.y) != g.start_anchor);
        if moved {
            state.commit();
        }
        moved
    }

    // ── Resize ──

    /// Pointer-down on one of the eight handles of an unlocked widget.
    pub fn begin_resize(
        &mut self,
        state: &EditorState,
        id: WidgetId,
        handle: ResizeHandle,
        pointer: (f64, f64),
    ) -> bool {
        let Some(widget) = state.find_widget(id) else {
            return false;
        };
        if widget.locked {
            return false;
        }
        let meta = state.catalog().get(&widget.kind);
        self.resize = Some(ResizeGesture {
            id,
            handle,
            start_pointer: pointer,
            start_size: effective_size(widget, meta),
            start_anchor: (widget.x, widget.y),
        });
        true
    }

    /// Pointer-move during a resize. Near-side handles (`w`, `n` and their
    /// corners) resize the dimension and shift the anchor so the opposite
    /// edge stays fixed; far-side handles only resize. The 20 px floor is
    /// applied per dimension before grid snapping.
    pub fn resize_to(&mut self, state: &mut EditorState, pointer: (f64, f64)) -> bool {
        let Some(g) = self.resize else {
            return false;
        };
        let canvas = &state.layout().canvas;
        let snap_enabled = canvas.snap_to_grid;
        let grid = f64::from(canvas.grid_size);

        let dx = pointer.0 - g.start_pointer.0;
        let dy = pointer.1 - g.start_pointer.1;
        let (start_w, start_h) = g.start_size;

        let mut width = if g.handle.east() {
            start_w + dx
        } else if g.handle.west() {
            start_w - dx
        } else {
            start_w
        };
        let mut height = if g.handle.south() {
            start_h + dy
        } else if g.handle.north() {
            start_h - dy
        } else {
            start_h
        };

        width = width.max(MIN_SIZE);
        height = height.max(MIN_SIZE);

        // Near-side edges pin the opposite edge by absorbing the size
        // delta into the anchor.
        let mut x = if g.handle.west() {
            g.start_anchor.0 + (start_w - width)
        } else {
            g.start_anchor.0
        };
        let mut y = if g.handle.north() {
            g.start_anchor.1 + (start_h - height)
        } else {
            g.start_anchor.1
        };

        if snap_enabled {
            width = snap(width, grid);
            height = snap(height, grid);
            x = snap(x, grid);
            y = snap(y, grid);
        }

        state.resize_widget(g.id, width, height, x, y)
    }

    /// Pointer-up: one snapshot (history dedup absorbs a no-op resize).
    pub fn end_resize(&mut self, state: &mut EditorState) -> bool {
        if self.resize.take().is_none() {
            return false;
        }
        state.commit();
        true
    }

    /// Lost pointer capture mid-gesture: treated as a release. The last
    /// applied transient state stays; no rollback.
    pub fn cancel_gesture(&mut self, state: &mut EditorState) {
        if self.drag.is_some() {
            self.end_drag(state);
        }
        if self.resize.is_some() {
            self.end_resize(state);
        }
    }

    // ── Palette drop ──

    /// A drag from the widget palette released over the canvas. `now_ms`
    /// is the event timestamp; a drop of the same type within the
    /// debounce window of the previous one is a duplicate browser event
    /// and is discarded (`Ok(None)`).
    pub fn drop_from_palette(
        &mut self,
        state: &mut EditorState,
        kind: &str,
        pointer: (f64, f64),
        now_ms: u64,
    ) -> Result<Option<WidgetId>, EditorError> {
        if let Some(stamp) = &self.last_drop
            && stamp.kind == kind
            && now_ms.saturating_sub(stamp.at_ms) < DROP_DEBOUNCE_MS
        {
            log::trace!("suppressed duplicate drop of `{kind}`");
            return Ok(None);
        }

        let canvas = &state.layout().canvas;
        let (mut x, mut y) = pointer;
        if canvas.snap_to_grid {
            let grid = f64::from(canvas.grid_size);
            x = snap(x, grid);
            y = snap(y, grid);
        }

        let id = state.add_widget(kind, x, y, None)?;
        self.last_drop = Some(DropStamp {
            at_ms: now_ms,
            kind: kind.to_string(),
        });
        Ok(Some(id))
    }

    // ── Keyboard ──

    /// Delete everything selected as one discrete action (one snapshot).
    pub fn delete_selection(&mut self, state: &mut EditorState) -> usize {
        let ids: Vec<WidgetId> = state.selection().to_vec();
        state.remove_widgets(&ids)
    }

    /// Arrow-key nudge of all selected, unlocked widgets. One snapshot
    /// per key press regardless of how many widgets moved.
    pub fn nudge_selection(&mut self, state: &mut EditorState, dx: f64, dy: f64) -> usize {
        let ids: Vec<WidgetId> = state.selection().to_vec();
        let mut moved = 0;
        for id in ids {
            let Some(widget) = state.find_widget(id) else {
                continue;
            };
            if widget.locked {
                continue;
            }
            let patch = WidgetPatch::position(widget.x + dx, widget.y + dy);
            if state.update_widget(id, &patch) {
                moved += 1;
            }
        }
        if moved > 0 {
            state.commit();
        }
        moved
    }

    pub fn select_all(&mut self, state: &mut EditorState) {
        state.select_all();
    }

    // ── Click selection ──

    /// Click resolution: plain click replaces the selection, a modifier
    /// click toggles membership, empty canvas clears.
    pub fn click(&mut self, state: &mut EditorState, hit: Option<WidgetId>, modifiers: Modifiers) {
        match hit {
            Some(id) if modifiers.shift || modifiers.command() => state.toggle_selected(id),
            Some(id) => state.select_one(id),
            None => state.clear_selection(),
        }
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to the nearest grid multiple.
fn snap(value: f64, grid: f64) -> f64 {
    (value / grid).round() * grid
}
