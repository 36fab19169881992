//! Layout document model for the overlay editor.
//!
//! The document is an ordered forest of `Widget` nodes: sibling order is
//! paint order (later = on top), and a widget is exclusively owned by its
//! parent list. Moving a widget between parents is a structural relocation,
//! never a copy. Anchor coordinates `(x, y)` are parent-local logical
//! pixels; how the anchor maps to an edge is decided by the `align`
//! property during geometry resolution.

use crate::id::WidgetId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Property values ─────────────────────────────────────────────────────

/// A single widget property value. The property set is an open,
/// catalog-driven map, so values stay a small sum type rather than a
/// per-type schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// ─── Canvas settings ─────────────────────────────────────────────────────

/// Canvas dimensions and grid behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub grid_enabled: bool,
    pub grid_size: u32,
    pub snap_to_grid: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            grid_enabled: true,
            grid_size: 10,
            snap_to_grid: false,
        }
    }
}

impl CanvasConfig {
    /// Width, height and grid size must all be positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.grid_size > 0
    }
}

// ─── Document metadata ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
}

impl Default for LayoutMetadata {
    fn default() -> Self {
        Self {
            name: "Untitled Layout".into(),
            description: None,
            version: "1.0".into(),
        }
    }
}

// ─── Widgets ─────────────────────────────────────────────────────────────

/// A positioned, typed, configurable element placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,

    /// Widget type; must exist in the session's metadata catalog.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Anchor position in parent-local logical pixels. Whether the anchor
    /// is the left edge, center, or right edge depends on `align`.
    pub x: f64,
    pub y: f64,

    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,

    /// Only meaningful for container types; leaves keep this empty.
    #[serde(default)]
    pub children: Vec<Widget>,

    #[serde(default)]
    pub locked: bool,

    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Display-size override written by resize gestures on types with no
    /// native size property. Not part of the exported overlay format;
    /// downstream converters skip it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_height: Option<f64>,
}

fn default_visible() -> bool {
    true
}

impl Widget {
    pub fn new(id: WidgetId, kind: &str, x: f64, y: f64) -> Self {
        Self {
            id,
            kind: kind.to_string(),
            name: None,
            x,
            y,
            properties: HashMap::new(),
            children: Vec::new(),
            locked: false,
            visible: true,
            display_width: None,
            display_height: None,
        }
    }
}

// ─── Layout document ─────────────────────────────────────────────────────

/// The complete layout document: canvas settings plus the widget forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: String,
    #[serde(default)]
    pub metadata: LayoutMetadata,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Layout {
    /// Create a fresh, empty document.
    #[must_use]
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            metadata: LayoutMetadata::default(),
            canvas,
            widgets: Vec::new(),
        }
    }

    /// Depth-first search over the forest; first match wins.
    pub fn find(&self, id: WidgetId) -> Option<&Widget> {
        find_in(&self.widgets, id)
    }

    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        find_in_mut(&mut self.widgets, id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.find(id).is_some()
    }

    /// Detach a widget (and its entire subtree) from its owning list.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        remove_in(&mut self.widgets, id)
    }

    /// Append a widget to `parent`'s child list, or to the root list when
    /// `parent` is `None` or absent from the tree.
    pub fn insert(&mut self, widget: Widget, parent: Option<WidgetId>) {
        if let Some(pid) = parent
            && let Some(target) = self.find_mut(pid)
        {
            target.children.push(widget);
            return;
        }
        self.widgets.push(widget);
    }

    /// The id of the widget owning `id`'s sibling list, if any.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        fn walk(list: &[Widget], id: WidgetId) -> Option<WidgetId> {
            for w in list {
                if w.children.iter().any(|c| c.id == id) {
                    return Some(w.id);
                }
                if let Some(found) = walk(&w.children, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.widgets, id)
    }

    /// Pre-order walk over every widget in the document.
    pub fn visit<F: FnMut(&Widget)>(&self, f: &mut F) {
        visit_in(&self.widgets, f);
    }

    pub fn all_ids(&self) -> Vec<WidgetId> {
        let mut ids = Vec::new();
        self.visit(&mut |w| ids.push(w.id));
        ids
    }

    // ── Z-order (within the owning sibling list) ──

    /// Swap with the next sibling (paint later = on top). Returns whether
    /// the order changed.
    pub fn bring_forward(&mut self, id: WidgetId) -> bool {
        let Some(list) = owning_list_mut(&mut self.widgets, id) else {
            return false;
        };
        let Some(pos) = list.iter().position(|w| w.id == id) else {
            return false;
        };
        if pos + 1 >= list.len() {
            return false;
        }
        list.swap(pos, pos + 1);
        true
    }

    /// Swap with the previous sibling.
    pub fn send_backward(&mut self, id: WidgetId) -> bool {
        let Some(list) = owning_list_mut(&mut self.widgets, id) else {
            return false;
        };
        let Some(pos) = list.iter().position(|w| w.id == id) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        list.swap(pos, pos - 1);
        true
    }

    /// Move to the end of the sibling list (painted last, on top).
    pub fn bring_to_front(&mut self, id: WidgetId) -> bool {
        let Some(list) = owning_list_mut(&mut self.widgets, id) else {
            return false;
        };
        let Some(pos) = list.iter().position(|w| w.id == id) else {
            return false;
        };
        if pos == list.len() - 1 {
            return false;
        }
        let w = list.remove(pos);
        list.push(w);
        true
    }

    /// Move to the start of the sibling list (painted first, at the back).
    pub fn send_to_back(&mut self, id: WidgetId) -> bool {
        let Some(list) = owning_list_mut(&mut self.widgets, id) else {
            return false;
        };
        let Some(pos) = list.iter().position(|w| w.id == id) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        let w = list.remove(pos);
        list.insert(0, w);
        true
    }

    // ── Plain-data persistence boundary ──

    /// Serialize for external collaborators (save, export pipelines).
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("layout serialization is infallible")
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

// ─── Forest helpers ──────────────────────────────────────────────────────

fn find_in(list: &[Widget], id: WidgetId) -> Option<&Widget> {
    for w in list {
        if w.id == id {
            return Some(w);
        }
        if let Some(found) = find_in(&w.children, id) {
            return Some(found);
        }
    }
    None
}

fn subtree_contains(w: &Widget, id: WidgetId) -> bool {
    w.id == id || w.children.iter().any(|c| subtree_contains(c, id))
}

fn find_in_mut(list: &mut [Widget], id: WidgetId) -> Option<&mut Widget> {
    if let Some(pos) = list.iter().position(|w| w.id == id) {
        return Some(&mut list[pos]);
    }
    let sub = list.iter().position(|w| subtree_contains(w, id))?;
    find_in_mut(&mut list[sub].children, id)
}

fn remove_in(list: &mut Vec<Widget>, id: WidgetId) -> Option<Widget> {
    if let Some(pos) = list.iter().position(|w| w.id == id) {
        return Some(list.remove(pos));
    }
    let sub = list.iter().position(|w| subtree_contains(w, id))?;
    remove_in(&mut list[sub].children, id)
}

/// The sibling list that directly owns `id`.
fn owning_list_mut(list: &mut Vec<Widget>, id: WidgetId) -> Option<&mut Vec<Widget>> {
    if list.iter().any(|w| w.id == id) {
        return Some(list);
    }
    let sub = list.iter().position(|w| subtree_contains(w, id))?;
    owning_list_mut(&mut list[sub].children, id)
}

fn visit_in<F: FnMut(&Widget)>(list: &[Widget], f: &mut F) {
    for w in list {
        f(w);
        visit_in(&w.children, f);
    }
}
