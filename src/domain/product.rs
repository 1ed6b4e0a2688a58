//! Product catalog records and their wire forms.
//!
//! - [`Product`] - A full catalog record as the backend stores it
//! - [`NewProduct`] - A record to create; the backend assigns the identifier
//! - [`ProductPatch`] - A partial update addressed by identifier

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Price;

/// A catalog item as held locally and exchanged with the backend.
///
/// Beyond the identifier, name, and price, records carry descriptive
/// fields (category, image, description) that the catalog treats as
/// opaque: they are cached and merged but never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Merge the patch's supplied fields into this record.
    ///
    /// Fields the patch leaves as `None` keep their current value.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(image) = &patch.image {
            self.image = Some(image.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
    }
}

/// A product to create. Carries no identifier; the backend assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A partial update for one product, addressed by identifier.
///
/// Only `Some` fields are serialized, so the PATCH body carries exactly
/// the fields the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductPatch {
    /// A patch that changes nothing for the given product.
    #[must_use]
    pub fn for_id(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            price: None,
            category: None,
            image: None,
            description: None,
        }
    }

    /// Set the price to change.
    #[must_use]
    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the name to change.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
