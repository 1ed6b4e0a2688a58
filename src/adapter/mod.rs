//! Adapters: concrete implementations of the ports.

pub mod notifier;
pub mod outbound;
