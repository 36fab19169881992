//! Typed editor event bus.
//!
//! Render surfaces subscribe to the aggregate state and re-render from the
//! current document when notified. Payloads carry only what a subscriber
//! needs to scope its re-render: ids, keys, or nothing (full-document
//! events). Listener panics are isolated per-listener so one faulty
//! subscriber cannot break delivery to the rest.

use ovl_core::WidgetId;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Everything a render surface can react to.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The whole document was swapped out (new, load, or history restore).
    DocumentReplaced,
    WidgetAdded { id: WidgetId },
    WidgetRemoved { id: WidgetId },
    WidgetUpdated { id: WidgetId },
    PropertyChanged { id: WidgetId, key: String },
    SelectionChanged { selected: Vec<WidgetId> },
    CanvasChanged,
    HistoryChanged { can_undo: bool, can_redo: bool },
}

/// Handle returned by `subscribe`, used to unsubscribe.
pub type ListenerId = usize;

type Listener = Box<dyn FnMut(&EditorEvent)>;

/// Ordered list of subscribers with stable ids.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: ListenerId,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&EditorEvent) + 'static) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was actually removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener, isolating panics per listener.
    pub fn emit(&mut self, event: &EditorEvent) {
        for (id, listener) in &mut self.listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                log::warn!("editor event listener {id} panicked on {event:?}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_receive_events() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        bus.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        bus.emit(&EditorEvent::CanvasChanged);
        bus.emit(&EditorEvent::DocumentReplaced);

        assert_eq!(
            *seen.borrow(),
            vec![EditorEvent::CanvasChanged, EditorEvent::DocumentReplaced]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        let sink = count.clone();
        let id = bus.subscribe(move |_| *sink.borrow_mut() += 1);

        bus.emit(&EditorEvent::CanvasChanged);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id), "second unsubscribe is a no-op");
        bus.emit(&EditorEvent::CanvasChanged);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn panicking_listener_does_not_break_others() {
        let mut bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        bus.subscribe(|_| panic!("bad subscriber"));
        let sink = count.clone();
        bus.subscribe(move |_| *sink.borrow_mut() += 1);

        bus.emit(&EditorEvent::CanvasChanged);
        assert_eq!(*count.borrow(), 1);
    }
}
