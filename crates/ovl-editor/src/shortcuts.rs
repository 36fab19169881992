//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `EditorAction`s. Nudge actions
//! come back pre-scaled: 1 logical px, or 10 with Shift held.

use crate::input::Modifiers;

/// Actions that keyboard input can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    Undo,
    Redo,
    Delete,
    SelectAll,
    Deselect,
    ZoomIn,
    ZoomOut,
    /// Move the selection by `(dx, dy)` logical pixels.
    Nudge { dx: f64, dy: f64 },
}

/// Resolves key events into editor actions.
///
/// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`,
/// `"ArrowLeft"`). The command modifier is ⌘ on macOS and Ctrl elsewhere.
pub struct ShortcutMap;

impl ShortcutMap {
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<EditorAction> {
        if modifiers.command() {
            return match key {
                "z" | "Z" if modifiers.shift => Some(EditorAction::Redo),
                "z" | "Z" => Some(EditorAction::Undo),
                "y" | "Y" => Some(EditorAction::Redo),
                "a" | "A" => Some(EditorAction::SelectAll),
                "=" | "+" => Some(EditorAction::ZoomIn),
                "-" => Some(EditorAction::ZoomOut),
                _ => None,
            };
        }

        let step = if modifiers.shift { 10.0 } else { 1.0 };
        match key {
            "Delete" | "Backspace" => Some(EditorAction::Delete),
            "Escape" => Some(EditorAction::Deselect),
            "ArrowLeft" => Some(EditorAction::Nudge { dx: -step, dy: 0.0 }),
            "ArrowRight" => Some(EditorAction::Nudge { dx: step, dy: 0.0 }),
            "ArrowUp" => Some(EditorAction::Nudge { dx: 0.0, dy: -step }),
            "ArrowDown" => Some(EditorAction::Nudge { dx: 0.0, dy: step }),
            _ => None,
        }
    }
}
