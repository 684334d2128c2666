//! Event handler registry shared between the accordion and the host runtime.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A handler bound to an element event.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Press event raised by pressables.
pub const ON_PRESS: &str = "on_press";

/// Completion event raised by the animator once a region settles.
pub const ON_ANIMATION_END: &str = "on_animation_end";

/// Registry mapping `(element_id, event)` pairs to handlers.
///
/// Widgets register handlers while building their elements; the host runtime
/// dispatches into the registry when input or animation events arrive.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Invoke the handler for an element event.
    ///
    /// Returns false when nothing is registered. The lock is released before
    /// the handler runs.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                log::trace!("[accordion] dispatch {event} on {element_id}");
                handler();
                true
            }
            None => false,
        }
    }

    /// Clear all handlers.
    ///
    /// Hosts call this before rebuilding the tree so stale handlers from the
    /// previous render cycle cannot fire.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
