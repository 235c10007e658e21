//! # State Events
//!
//! Notify-on-change events emitted by the view model using the observer
//! pattern. Derived fields are recomputed deterministically before the event
//! fires, so handlers only ever observe a consistent snapshot.

use crate::models::Category;

/// Type alias for state event handlers to reduce complexity
pub type StateEventHandler = Box<dyn Fn(&StateEvent) + Send + Sync>;

/// Events emitted when observable view-model state changes
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// A fetch started for a category
    LoadingStarted { category: Category },

    /// A fetch resolved successfully and the snapshot was replaced
    DataLoaded { record_count: usize },

    /// A fetch resolved with a failure; `message` is already translated
    FetchFailed { message: String },

    /// Available years were recomputed from a new snapshot
    YearsRecomputed {
        available_years: Vec<String>,
        selected_year: String,
    },

    /// The rendered subset was recomputed
    FilterApplied {
        visible_count: usize,
        search_text: String,
    },

    /// The category selector changed
    CategoryChanged {
        old_category: Category,
        new_category: Category,
    },
}

/// Observer registration list for state events
pub struct StateEventBus {
    handlers: Vec<StateEventHandler>,
}

impl StateEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Subscribe to all state events
    pub fn subscribe(&mut self, handler: StateEventHandler) {
        self.handlers.push(handler);
    }

    /// Publish one event to every subscriber
    pub fn publish(&self, event: StateEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }
}

impl Default for StateEventBus {
    fn default() -> Self {
        Self::new()
    }
}
