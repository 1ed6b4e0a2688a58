//! Outbound adapters: backends the application calls out to.

pub mod rest;
