//! Notifier port for success confirmations.
//!
//! The storefront confirms every successful mutation to the user. The
//! confirmation is an interaction concern, not a data concern, so it is
//! expressed as an event emission the display layer subscribes to.

use crate::domain::ProductId;

/// Events that can trigger notifications.
///
/// Each event carries the identifier from the backend's response, not
/// the one the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A product was created; the backend assigned this identifier.
    ProductCreated { id: ProductId },
    /// A product was updated in the backend.
    ProductUpdated { id: ProductId },
    /// A product was removed from the backend.
    ProductDeleted { id: ProductId },
}

/// Sink for confirmation events.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: Event);
}

/// A no-op notifier for testing or when confirmations are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}
