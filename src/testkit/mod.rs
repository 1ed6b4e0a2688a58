//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`catalog`] — [`StubCatalog`], a scripted [`CatalogApi`](crate::port::CatalogApi)
//!   implementation.
//! - [`notifier`] — [`RecordingNotifier`], capturing emitted events.
//! - [`domain`] — Builders for domain primitives.

pub mod catalog;
pub mod domain;
pub mod notifier;

pub use catalog::StubCatalog;
pub use domain::product;
pub use notifier::RecordingNotifier;
