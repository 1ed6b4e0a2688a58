//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points of the crate. They are traits that
//! adapters implement to integrate with external systems (the products
//! backend, notification surfaces).
//!
//! # Available Ports
//!
//! - [`CatalogApi`] - The remote products collection
//! - [`Notifier`] - Success confirmations (logging, UI, etc.)

pub mod outbound;

pub use outbound::{CatalogApi, Event, Notifier};
