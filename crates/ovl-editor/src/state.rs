//! The aggregate editor state.
//!
//! `EditorState` is an explicit context object — no ambient singletons —
//! owning the live document, the widget-type catalog, the selection set,
//! the dirty flag, and the undo/redo history. Every other component
//! mutates the document exclusively through it.
//!
//! Mutation discipline: every visible change marks the document dirty and
//! emits one event; every *discrete* user action (add, remove, property
//! commit, gesture release) takes exactly one history snapshot, while
//! continuous gesture frames take none and end with a `commit()`.

use crate::events::{EditorEvent, EventBus, ListenerId};
use crate::history::History;
use ovl_core::geometry::{is_out_of_bounds, resolved_bounds};
use ovl_core::{CanvasConfig, Layout, PropertyValue, Widget, WidgetCatalog, WidgetId};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Add was requested for a type absent from the metadata catalog.
    /// The operation aborts with no partial mutation and no snapshot.
    #[error("unknown widget type `{0}`")]
    UnknownWidgetType(String),
}

/// Partial update for a widget's first-class fields. `None` fields are
/// left untouched (shallow merge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub name: Option<String>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub display_width: Option<f64>,
    pub display_height: Option<f64>,
}

impl WidgetPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }
}

type Selection = SmallVec<[WidgetId; 8]>;

pub struct EditorState {
    layout: Layout,
    catalog: WidgetCatalog,
    selection: Selection,
    dirty: bool,
    history: History,
    bus: EventBus,
    /// Guards against a history restore re-triggering a snapshot.
    restoring: bool,
}

impl EditorState {
    /// Fresh editor over a blank document.
    #[must_use]
    pub fn new(catalog: WidgetCatalog) -> Self {
        let layout = Layout::default();
        let mut history = History::default();
        history.snapshot(&layout);
        Self {
            layout,
            catalog,
            selection: Selection::new(),
            dirty: false,
            history,
            bus: EventBus::new(),
            restoring: false,
        }
    }

    // ── Access ──

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn find_widget(&self, id: WidgetId) -> Option<&Widget> {
        self.layout.find(id)
    }

    pub fn selection(&self) -> &[WidgetId] {
        &self.selection
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by external save collaborators after persisting.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ── Events ──

    pub fn subscribe(&mut self, listener: impl FnMut(&EditorEvent) + 'static) -> ListenerId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    // ── Structural mutation ──

    /// Create a widget of `kind` at `(x, y)`, property defaults drawn from
    /// the catalog, appended under `parent` (root list when `parent` is
    /// `None`, missing, or not a container type).
    pub fn add_widget(
        &mut self,
        kind: &str,
        x: f64,
        y: f64,
        parent: Option<WidgetId>,
    ) -> Result<WidgetId, EditorError> {
        if !self.catalog.contains(kind) {
            log::warn!("rejected add of unknown widget type `{kind}`");
            return Err(EditorError::UnknownWidgetType(kind.to_string()));
        }

        // Loaded documents may already contain generated-looking ids;
        // retry until the candidate is absent from the whole tree.
        let mut id = WidgetId::generate(kind);
        while self.layout.contains(id) {
            id = WidgetId::generate(kind);
        }

        let mut widget = Widget::new(id, kind, x, y);
        widget.properties = self.catalog.default_properties(kind);

        let target = parent.filter(|pid| {
            self.layout
                .find(*pid)
                .is_some_and(|p| self.catalog.is_container(&p.kind))
        });
        self.layout.insert(widget, target);

        self.dirty = true;
        self.bus.emit(&EditorEvent::WidgetAdded { id });
        self.take_snapshot();
        Ok(id)
    }

    /// Remove a widget and its entire subtree. One history snapshot.
    pub fn remove_widget(&mut self, id: WidgetId) -> bool {
        if !self.remove_one(id) {
            return false;
        }
        self.take_snapshot();
        true
    }

    /// Remove several widgets as one discrete action — a single snapshot
    /// for the whole batch, so one undo brings them all back.
    pub fn remove_widgets(&mut self, ids: &[WidgetId]) -> usize {
        let removed = ids.iter().filter(|id| self.remove_one(**id)).count();
        if removed > 0 {
            self.take_snapshot();
        }
        removed
    }

    fn remove_one(&mut self, id: WidgetId) -> bool {
        if self.layout.remove(id).is_none() {
            return false;
        }
        self.dirty = true;
        self.prune_selection();
        self.bus.emit(&EditorEvent::WidgetRemoved { id });
        true
    }

    /// Shallow-merge `patch` into a widget's first-class fields. Silent
    /// no-op when the id is gone. Takes NO snapshot — this is the
    /// continuous-gesture path; callers end a gesture with `commit()`.
    pub fn update_widget(&mut self, id: WidgetId, patch: &WidgetPatch) -> bool {
        let Some(widget) = self.layout.find_mut(id) else {
            return false;
        };
        if let Some(x) = patch.x {
            widget.x = x;
        }
        if let Some(y) = patch.y {
            widget.y = y;
        }
        if let Some(name) = &patch.name {
            widget.name = Some(name.clone());
        }
        if let Some(locked) = patch.locked {
            widget.locked = locked;
        }
        if let Some(visible) = patch.visible {
            widget.visible = visible;
        }
        if let Some(w) = patch.display_width {
            widget.display_width = Some(w);
        }
        if let Some(h) = patch.display_height {
            widget.display_height = Some(h);
        }
        self.dirty = true;
        self.bus.emit(&EditorEvent::WidgetUpdated { id });
        true
    }

    /// Commit one property value. `x`/`y` route to the first-class anchor
    /// fields instead of the property map. A property commit is a discrete
    /// action: one snapshot.
    pub fn set_property(&mut self, id: WidgetId, key: &str, value: PropertyValue) -> bool {
        let Some(widget) = self.layout.find_mut(id) else {
            return false;
        };
        match key {
            "x" => {
                if let Some(x) = value.as_f64() {
                    widget.x = x;
                }
            }
            "y" => {
                if let Some(y) = value.as_f64() {
                    widget.y = y;
                }
            }
            _ => {
                widget.properties.insert(key.to_string(), value);
            }
        }
        self.dirty = true;
        self.bus.emit(&EditorEvent::PropertyChanged {
            id,
            key: key.to_string(),
        });
        self.take_snapshot();
        true
    }

    /// Apply an in-progress resize: new size plus the (possibly shifted)
    /// anchor. Where the size lands follows the type's schema — `width`+
    /// `height` properties when declared, a square `size` property when
    /// declared (kept square via the smaller dimension), otherwise the
    /// display-size override. Takes NO snapshot; `commit()` ends the
    /// gesture.
    pub fn resize_widget(&mut self, id: WidgetId, width: f64, height: f64, x: f64, y: f64) -> bool {
        let Some(kind) = self.layout.find(id).map(|w| w.kind.clone()) else {
            return false;
        };
        let declared = |name: &str| {
            self.catalog
                .get(&kind)
                .is_some_and(|m| m.properties.iter().any(|p| p.name == name))
        };
        let has_width_height = declared("width") && declared("height");
        // `size` only counts when it denotes a square bounding box; on
        // label types the same property name is a font size.
        let has_square_size =
            ovl_core::catalog::SQUARE_SIZED.contains(&kind.as_str()) && declared("size");

        let widget = self.layout.find_mut(id).expect("widget found above");
        if has_width_height {
            widget.properties.insert("width".into(), width.into());
            widget.properties.insert("height".into(), height.into());
        } else if has_square_size {
            widget.properties.insert("size".into(), width.min(height).into());
        } else {
            widget.display_width = Some(width);
            widget.display_height = Some(height);
        }
        widget.x = x;
        widget.y = y;

        self.dirty = true;
        self.bus.emit(&EditorEvent::WidgetUpdated { id });
        true
    }

    /// Snapshot checkpoint for the end of a continuous gesture or a
    /// batched keyboard action.
    pub fn commit(&mut self) {
        self.take_snapshot();
    }

    /// Replace the canvas settings. Dimensions and grid size must stay
    /// positive; invalid configs are rejected.
    pub fn set_canvas(&mut self, canvas: CanvasConfig) -> bool {
        if !canvas.is_valid() {
            log::warn!("rejected invalid canvas config {canvas:?}");
            return false;
        }
        if self.layout.canvas == canvas {
            return true;
        }
        self.layout.canvas = canvas;
        self.dirty = true;
        self.bus.emit(&EditorEvent::CanvasChanged);
        self.take_snapshot();
        true
    }

    // ── Z-order ──

    pub fn bring_forward(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Layout::bring_forward)
    }

    pub fn send_backward(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Layout::send_backward)
    }

    pub fn bring_to_front(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Layout::bring_to_front)
    }

    pub fn send_to_back(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Layout::send_to_back)
    }

    fn reorder(&mut self, id: WidgetId, op: fn(&mut Layout, WidgetId) -> bool) -> bool {
        if !op(&mut self.layout, id) {
            return false;
        }
        self.dirty = true;
        self.bus.emit(&EditorEvent::WidgetUpdated { id });
        self.take_snapshot();
        true
    }

    // ── Selection ──

    /// Replace the selection. Ids absent from the tree are dropped.
    pub fn set_selection(&mut self, ids: &[WidgetId]) {
        let next: Selection = ids
            .iter()
            .copied()
            .filter(|id| self.layout.contains(*id))
            .collect();
        self.apply_selection(next);
    }

    pub fn select_one(&mut self, id: WidgetId) {
        self.set_selection(&[id]);
    }

    /// Toggle membership (modifier-click behavior).
    pub fn toggle_selected(&mut self, id: WidgetId) {
        if !self.layout.contains(id) {
            return;
        }
        let mut next = self.selection.clone();
        if let Some(pos) = next.iter().position(|s| *s == id) {
            next.remove(pos);
        } else {
            next.push(id);
        }
        self.apply_selection(next);
    }

    pub fn clear_selection(&mut self) {
        self.apply_selection(Selection::new());
    }

    /// Select every widget in the document, nested included.
    pub fn select_all(&mut self) {
        let next: Selection = self.layout.all_ids().into_iter().collect();
        self.apply_selection(next);
    }

    fn apply_selection(&mut self, next: Selection) {
        if next == self.selection {
            return;
        }
        self.selection = next;
        self.bus.emit(&EditorEvent::SelectionChanged {
            selected: self.selection.to_vec(),
        });
    }

    /// Drop selection entries whose widgets no longer exist.
    fn prune_selection(&mut self) {
        let next: Selection = self
            .selection
            .iter()
            .copied()
            .filter(|id| self.layout.contains(*id))
            .collect();
        self.apply_selection(next);
    }

    // ── Document lifecycle ──

    /// Start over with a blank document. Old history is meaningless for a
    /// different document, so it is cleared and re-seeded.
    pub fn new_document(&mut self, canvas: CanvasConfig) {
        self.replace_document(Layout::new(canvas));
    }

    /// Wholesale replacement from an external loader.
    pub fn load_document(&mut self, layout: Layout) {
        self.replace_document(layout);
    }

    fn replace_document(&mut self, layout: Layout) {
        log::debug!("document replaced: {}", layout.id);
        self.layout = layout;
        self.apply_selection(Selection::new());
        self.history.clear();
        self.history.snapshot(&self.layout);
        self.dirty = false;
        self.bus.emit(&EditorEvent::DocumentReplaced);
        self.emit_history_changed();
    }

    // ── Persistence boundary ──

    pub fn to_value(&self) -> serde_json::Value {
        self.layout.to_json_value()
    }

    pub fn load_value(&mut self, value: serde_json::Value) -> Result<(), serde_json::Error> {
        let layout = Layout::from_json_value(value)?;
        self.load_document(layout);
        Ok(())
    }

    // ── History ──

    /// Step back one snapshot. Boundary is a silent no-op (`false`).
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Step forward one snapshot. Boundary is a silent no-op (`false`).
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    fn restore(&mut self, snapshot: Layout) {
        self.restoring = true;
        self.layout = snapshot;
        self.dirty = true;
        self.prune_selection();
        self.bus.emit(&EditorEvent::DocumentReplaced);
        self.emit_history_changed();
        self.restoring = false;
    }

    fn take_snapshot(&mut self) {
        if self.restoring {
            return;
        }
        if self.history.snapshot(&self.layout) {
            self.emit_history_changed();
        }
    }

    fn emit_history_changed(&mut self) {
        let event = EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        };
        self.bus.emit(&event);
    }

    // ── Advisory checks ──

    /// Top-level widgets whose resolved bounds spill past the canvas.
    /// Purely informational; never blocks an edit.
    pub fn out_of_bounds(&self) -> Vec<WidgetId> {
        self.layout
            .widgets
            .iter()
            .filter(|w| {
                let bounds = resolved_bounds(w, &self.catalog);
                is_out_of_bounds(&bounds, &self.layout.canvas)
            })
            .map(|w| w.id)
            .collect()
    }
}
