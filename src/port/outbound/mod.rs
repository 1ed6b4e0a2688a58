//! Outbound ports: dependencies the application calls out to.

mod catalog;
mod notifier;

pub use catalog::CatalogApi;
pub use notifier::{Event, Notifier, NullNotifier};
