//! Storefront - product catalog client and cart pricing.
//!
//! This crate provides the data-access core of a small storefront: an
//! in-memory product catalog synchronized with a remote `/products`
//! collection over REST, plus pure pricing utilities for cart totals.
//!
//! # Architecture
//!
//! The crate uses a ports-and-adapters layout:
//!
//! - **`domain`** - Catalog-agnostic types: products, cart items, money
//! - **`port`** - Trait seams adapters implement (`CatalogApi`, `Notifier`)
//! - **`adapter`** - REST client and notification backends
//! - **`app`** - The catalog state machine and the service driving it
//!
//! State transitions are expressed as pure reducer steps
//! ([`app::CatalogState::apply`]) so catalog behavior is testable without
//! a network or a display surface.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`domain`] - Products, cart items, and euro formatting
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for catalog and notification backends
//! - [`adapter`] - reqwest-backed REST adapter, tracing-backed notifier
//! - [`app`] - Catalog state, events, and the `CatalogService`
//!
//! # Example
//!
//! ```no_run
//! use storefront::adapter::outbound::rest::RestCatalog;
//! use storefront::adapter::notifier::LogNotifier;
//! use storefront::app::CatalogService;
//!
//! # async fn run() {
//! let api = RestCatalog::new("http://localhost:3000".into());
//! let mut catalog = CatalogService::new(Box::new(api), Box::new(LogNotifier));
//! catalog.refresh().await;
//! if let Some(err) = catalog.last_error() {
//!     eprintln!("listing failed: {err}");
//! }
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
