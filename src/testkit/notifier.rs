//! Event-capturing notifier for asserting on confirmations.

use std::sync::{Arc, Mutex};

use crate::port::{Event, Notifier};

/// A [`Notifier`] that records every event it receives.
///
/// Clones share the same recording, so a test can hand one clone to the
/// service and keep another to assert on.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}
