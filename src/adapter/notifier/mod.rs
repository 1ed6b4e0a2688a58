//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for confirmation backends. The
//! display layer of a storefront would render these as user-visible
//! messages; here the default backend is the log.

use tracing::info;

use crate::port::{Event, Notifier};

pub use crate::port::outbound::NullNotifier;

/// Notifier that writes confirmations to the tracing log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::ProductCreated { id } => {
                info!(id = %id, "Product created successfully");
            }
            Event::ProductUpdated { id } => {
                info!(id = %id, "Product updated successfully");
            }
            Event::ProductDeleted { id } => {
                info!(id = %id, "Product deleted successfully");
            }
        }
    }
}

/// Registry of notifiers, fanning one event out to every backend.
#[derive(Default)]
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }
}
