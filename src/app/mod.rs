//! Application layer: catalog state and the service driving it.

mod service;
mod state;

pub use service::CatalogService;
pub use state::{CatalogEvent, CatalogState};
