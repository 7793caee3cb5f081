//! Page event dispatch.
//!
//! DOM listeners stay thin: they translate a browser event into a
//! [`PageEvent`] and publish it. Subscribers registered at boot do the work,
//! which keeps the work itself testable without a browser.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Rc<dyn Fn(&E)>;

/// Single-threaded publish/subscribe.
///
/// Handlers run in subscription order. A handler may publish or subscribe
/// while being called; it sees the subscriber list as it was when the
/// current publish started.
pub struct EventBus<E> {
    handlers: RefCell<Vec<(SubscriptionId, Handler<E>)>>,
    next_id: Cell<u64>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self { handlers: RefCell::new(Vec::new()), next_id: Cell::new(1) }
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").field("subscribers", &self.len()).finish()
    }
}

impl<E> EventBus<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(sid, _)| *sid != id);
        handlers.len() != before
    }

    /// Deliver `event` to every subscriber. Returns how many were called.
    pub fn publish(&self, event: &E) -> usize {
        let snapshot: Vec<Handler<E>> = self.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the page reacts to outside the carousel's own gestures.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ThemeToggleRequested,
    LanguageToggleRequested,
    /// A download trigger was clicked.
    DownloadRequested { control_id: String },
    /// `keydown` on the document, by `KeyboardEvent.key`.
    KeyPressed(String),
    Resized,
    Scrolled { y: f64 },
    /// A section crossed the nav-highlight threshold.
    SectionInFocus { id: String },
    /// `window` load finished.
    Loaded,
}

impl PageEvent {
    /// Whether the DOM event that produced this one must have its default
    /// action suppressed. Download triggers are links; their `href` must not
    /// navigate while the release lookup runs.
    #[must_use]
    pub fn cancels_default(&self) -> bool {
        matches!(self, Self::DownloadRequested { .. })
    }
}
