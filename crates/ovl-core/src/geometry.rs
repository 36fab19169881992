//! Pure geometry resolution: effective size and bounds for widgets,
//! container auto-bounds, and canvas-bounds checks.
//!
//! Stateless by design — everything here is a function of a widget, its
//! type metadata, and the canvas settings. Containers never store a size:
//! their rendered box is the union of their visible children, so they
//! grow and shrink to fit without touching child coordinates.

use crate::catalog::{SQUARE_SIZED, WidgetCatalog, WidgetMetadata};
use crate::model::{CanvasConfig, Widget};

/// Fallback box for widgets whose type metadata is missing or carries no
/// usable size information.
pub const FALLBACK_WIDTH: f64 = 100.0;
pub const FALLBACK_HEIGHT: f64 = 50.0;

/// An axis-aligned rectangle in logical canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        Rect::new(x, y, right - x, bottom - y)
    }
}

/// Resolve a widget's display size.
///
/// Per-axis resolution order: explicit `width`/`height` property, then the
/// resize display override, then the `size` property for square-sized
/// types, then the type's declared default, then the hard fallback.
pub fn effective_size(widget: &Widget, meta: Option<&WidgetMetadata>) -> (f64, f64) {
    let square = SQUARE_SIZED.contains(&widget.kind.as_str());
    let size_prop = if square {
        widget.properties.get("size").and_then(|v| v.as_f64())
    } else {
        None
    };

    let width = widget
        .properties
        .get("width")
        .and_then(|v| v.as_f64())
        .or(widget.display_width)
        .or(size_prop)
        .or(meta.map(|m| f64::from(m.default_width)))
        .unwrap_or(FALLBACK_WIDTH);

    let height = widget
        .properties
        .get("height")
        .and_then(|v| v.as_f64())
        .or(widget.display_height)
        .or(size_prop)
        .or(meta.map(|m| f64::from(m.default_height)))
        .unwrap_or(FALLBACK_HEIGHT);

    (width, height)
}

/// Resolve a widget's bounds in its parent's coordinate space.
///
/// The stored anchor is the left edge unless `align` says otherwise:
/// `right` anchors the right edge, `center`/`centre` the horizontal
/// midpoint. `y` is never alignment-adjusted.
pub fn effective_bounds(widget: &Widget, meta: Option<&WidgetMetadata>) -> Rect {
    let (width, height) = effective_size(widget, meta);
    let x = match widget.properties.get("align").and_then(|v| v.as_str()) {
        Some("right") => widget.x - width,
        Some("center") | Some("centre") => widget.x - width / 2.0,
        _ => widget.x,
    };
    Rect::new(x, widget.y, width, height)
}

/// Union box of all visible children, in the container's local space.
/// `None` when no child is visible. Nested containers contribute their
/// own union box offset by their anchor.
pub fn container_bounds(children: &[Widget], catalog: &WidgetCatalog) -> Option<Rect> {
    children
        .iter()
        .filter(|c| c.visible)
        .map(|c| resolved_bounds(c, catalog))
        .reduce(|acc, b| acc.union(&b))
}

/// A widget's rendered bounds in its parent's space: leaves use
/// `effective_bounds`; containers with visible children use the children's
/// union box shifted by the container anchor. Children keep their stored
/// coordinates — rendering compensates with the negated union origin.
pub fn resolved_bounds(widget: &Widget, catalog: &WidgetCatalog) -> Rect {
    let meta = catalog.get(&widget.kind);
    if meta.is_some_and(|m| m.is_container)
        && let Some(union) = container_bounds(&widget.children, catalog)
    {
        return Rect::new(
            widget.x + union.x,
            widget.y + union.y,
            union.width,
            union.height,
        );
    }
    effective_bounds(widget, meta)
}

/// Advisory check: does any edge of `bounds` fall outside the canvas?
/// Never blocks an operation; render surfaces use it for warnings.
pub fn is_out_of_bounds(bounds: &Rect, canvas: &CanvasConfig) -> bool {
    bounds.x < 0.0
        || bounds.y < 0.0
        || bounds.x + bounds.width > f64::from(canvas.width)
        || bounds.y + bounds.height > f64::from(canvas.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::WidgetId;

    fn catalog() -> WidgetCatalog {
        WidgetCatalog::builtin()
    }

    fn widget(kind: &str, x: f64, y: f64) -> Widget {
        Widget::new(WidgetId::generate(kind), kind, x, y)
    }

    #[test]
    fn size_falls_back_through_the_chain() {
        let cat = catalog();

        // Type default
        let text = widget("text", 0.0, 0.0);
        assert_eq!(effective_size(&text, cat.get("text")), (150.0, 30.0));

        // Square `size` property wins over the type default
        let mut map = widget("moving_map", 0.0, 0.0);
        map.properties.insert("size".into(), 128.into());
        assert_eq!(effective_size(&map, cat.get("moving_map")), (128.0, 128.0));

        // Display override beats the square size
        map.display_width = Some(200.0);
        let (w, h) = effective_size(&map, cat.get("moving_map"));
        assert_eq!((w, h), (200.0, 128.0));

        // Explicit width/height properties beat everything
        let mut bar = widget("bar", 0.0, 0.0);
        bar.properties.insert("width".into(), 640.into());
        bar.properties.insert("height".into(), 48.into());
        bar.display_width = Some(999.0);
        assert_eq!(effective_size(&bar, cat.get("bar")), (640.0, 48.0));
    }

    #[test]
    fn missing_metadata_uses_hard_fallback() {
        let stale = widget("retired_gauge", 10.0, 20.0);
        assert_eq!(effective_size(&stale, None), (FALLBACK_WIDTH, FALLBACK_HEIGHT));
        let b = effective_bounds(&stale, None);
        assert_eq!(b, Rect::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn alignment_shifts_x_only() {
        let cat = catalog();
        let mut w = widget("text", 100.0, 40.0);

        w.properties.insert("align".into(), "right".into());
        let b = effective_bounds(&w, cat.get("text"));
        assert_eq!(b.x, -50.0); // 100 - 150
        assert_eq!(b.y, 40.0);

        w.properties.insert("align".into(), "centre".into());
        let b = effective_bounds(&w, cat.get("text"));
        assert_eq!(b.x, 25.0); // 100 - 75

        w.properties.insert("align".into(), "left".into());
        let b = effective_bounds(&w, cat.get("text"));
        assert_eq!(b.x, 100.0);
    }

    #[test]
    fn container_union_skips_hidden_children() {
        let cat = catalog();
        let mut parent = widget("composite", 0.0, 0.0);

        let mut a = widget("icon", 0.0, 0.0);
        a.properties.insert("size".into(), 50.into());
        let mut b = widget("icon", 100.0, 100.0);
        b.properties.insert("size".into(), 20.into());
        let mut hidden = widget("icon", 500.0, 500.0);
        hidden.visible = false;

        parent.children.extend([a, b, hidden]);

        let union = container_bounds(&parent.children, &cat).unwrap();
        assert_eq!(union, Rect::new(0.0, 0.0, 120.0, 120.0));
    }

    #[test]
    fn empty_container_has_no_bounds() {
        let cat = catalog();
        let parent = widget("composite", 0.0, 0.0);
        assert!(container_bounds(&parent.children, &cat).is_none());

        // With no visible children, resolved bounds fall back to metadata size
        let b = resolved_bounds(&parent, &cat);
        assert_eq!((b.width, b.height), (200.0, 100.0));
    }

    #[test]
    fn nested_containers_resolve_recursively() {
        let cat = catalog();
        let mut outer = widget("composite", 10.0, 10.0);
        let mut inner = widget("translate", 30.0, 40.0);
        let mut leaf = widget("icon", 5.0, 5.0);
        leaf.properties.insert("size".into(), 10.into());
        inner.children.push(leaf);
        outer.children.push(inner);

        // inner resolves to its leaf union (5,5,10,10) offset by (30,40)
        let b = resolved_bounds(&outer, &cat);
        assert_eq!(b, Rect::new(45.0, 55.0, 10.0, 10.0));
    }

    #[test]
    fn out_of_bounds_flags_alignment_overhang() {
        let cat = catalog();
        let canvas = CanvasConfig::default();

        let mut w = widget("text", 50.0, 10.0);
        w.properties.insert("width".into(), 100.into());
        w.properties.insert("align".into(), "right".into());
        let b = effective_bounds(&w, cat.get("text"));
        assert_eq!(b.x, -50.0);
        assert!(is_out_of_bounds(&b, &canvas));

        let inside = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert!(!is_out_of_bounds(&inside, &canvas));
        let spill = Rect::new(1900.0, 0.0, 40.0, 20.0);
        assert!(is_out_of_bounds(&spill, &canvas));
    }
}
