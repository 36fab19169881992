pub mod canvas;
pub mod events;
pub mod history;
pub mod input;
pub mod shortcuts;
pub mod state;

pub use canvas::CanvasEngine;
pub use events::{EditorEvent, ListenerId};
pub use history::History;
pub use input::{Modifiers, ResizeHandle};
pub use shortcuts::{EditorAction, ShortcutMap};
pub use state::{EditorError, EditorState, WidgetPatch};
