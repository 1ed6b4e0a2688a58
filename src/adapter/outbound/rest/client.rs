//! REST client for the products backend.
//!
//! The backend exposes one collection resource:
//!
//! - `GET /products` — full collection as a JSON array
//! - `POST /products` — create; body is the record without an id,
//!   response is the stored record with the assigned id
//! - `PATCH /products/{id}` — partial update; response echoes at least
//!   the id
//! - `DELETE /products/{id}` — remove

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::dto::MutationAck;
use crate::config::ApiConfig;
use crate::domain::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::{Error, Result};
use crate::port::CatalogApi;

/// HTTP client for the products REST backend.
pub struct RestCatalog {
    http: HttpClient,
    base_url: String,
}

impl RestCatalog {
    /// Create a new client with the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the products backend
    ///   (e.g., `http://localhost:3000`)
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

#[async_trait]
impl CatalogApi for RestCatalog {
    async fn list(&self) -> Result<Vec<Product>> {
        let url = self.collection_url();
        info!(url = %url, "Fetching products");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                action: "fetch products",
                status,
            });
        }

        let products: Vec<Product> = response.json().await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product> {
        let url = self.collection_url();
        info!(url = %url, name = %product.name, "Creating product");

        let response = self.http.post(&url).json(product).send().await?;
        if !response.status().is_success() {
            return Err(Error::Rejected {
                action: "create product",
            });
        }

        let created: Product = response.json().await?;
        debug!(id = %created.id, "Created product");
        Ok(created)
    }

    async fn update(&self, patch: &ProductPatch) -> Result<ProductId> {
        let url = self.item_url(&patch.id);
        info!(url = %url, id = %patch.id, "Updating product");

        let response = self.http.patch(&url).json(patch).send().await?;
        if !response.status().is_success() {
            return Err(Error::Rejected {
                action: "update product",
            });
        }

        let ack: MutationAck = response.json().await?;
        debug!(id = %ack.id, "Updated product");
        Ok(ack.id)
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        let url = self.item_url(id);
        info!(url = %url, id = %id, "Deleting product");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                action: "delete product",
                status,
            });
        }

        debug!(id = %id, "Deleted product");
        Ok(())
    }
}


// -------------------------------------------------------------------------
// Integration Tests (behind feature flag)
// -------------------------------------------------------------------------
