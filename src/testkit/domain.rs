//! Builders for domain primitives used across tests.

use crate::domain::{Price, Product, ProductId};

/// A product named after its id, with no descriptive fields.
#[must_use]
pub fn product(id: &str, price: Price) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("product {id}"),
        price,
        category: None,
        image: None,
        description: None,
    }
}
