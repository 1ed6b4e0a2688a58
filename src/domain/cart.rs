//! Cart items and pure pricing helpers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Price;
use super::product::Product;

/// One cart line: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Positive count of this product in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line for `quantity` units of `product`.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Sum of quantities across the cart. Zero for an empty cart.
#[must_use]
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of line totals across the cart. Zero for an empty cart.
#[must_use]
pub fn total_price(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::subtotal).sum()
}
