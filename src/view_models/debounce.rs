//! # Search Debouncer
//!
//! Coalesces rapid search-text edits into one refilter. Each edit resets a
//! single pending deadline to a fixed quiescence window; only the text
//! present when the window elapses fires, intermediate values are dropped.
//! Built on `tokio::time::Instant` so tests can drive it with a paused clock.

use tokio::time::{Duration, Instant};

/// Single-slot debounce timer for search text
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<(Instant, String)>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a text edit, resetting the quiescence deadline
    pub fn push(&mut self, text: String) {
        self.pending = Some((Instant::now() + self.window, text));
    }

    /// Deadline of the pending edit, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending text if its quiescence window has elapsed
    pub fn poll(&mut self) -> Option<String> {
        match &self.pending {
            Some((deadline, _)) if Instant::now() >= *deadline => {
                self.pending.take().map(|(_, text)| text)
            }
            _ => None,
        }
    }

    /// Drop any pending edit without firing
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
