//! REST adapter for the products backend.

mod client;
mod dto;

pub use client::RestCatalog;
pub use dto::MutationAck;
