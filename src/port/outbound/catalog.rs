//! Catalog port for the remote products collection.

use async_trait::async_trait;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::Result;

/// The remote products collection.
///
/// Adapters implement this against a concrete backend (REST, an
/// in-memory stub for tests). Each method maps to one collection
/// operation; none of them touch local state.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<Product>>;

    /// Create a product. Returns the record the backend stored,
    /// including the identifier it assigned.
    async fn create(&self, product: &NewProduct) -> Result<Product>;

    /// Apply a partial update to the product the patch addresses.
    /// Returns the identifier the backend confirmed.
    async fn update(&self, patch: &ProductPatch) -> Result<ProductId>;

    /// Remove a product from the collection.
    async fn delete(&self, id: &ProductId) -> Result<()>;
}
