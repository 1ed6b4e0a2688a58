//! Scripted catalog backend for service tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::Result;
use crate::port::CatalogApi;

/// A [`CatalogApi`] whose outcomes are scripted up front.
///
/// Each operation pops the next scripted outcome for that operation; a
/// call with nothing scripted panics, which surfaces over-calling in
/// tests immediately.
#[derive(Default)]
pub struct StubCatalog {
    list: Mutex<VecDeque<Result<Vec<Product>>>>,
    create: Mutex<VecDeque<Result<Product>>>,
    update: Mutex<VecDeque<Result<ProductId>>>,
    delete: Mutex<VecDeque<Result<()>>>,
}

impl StubCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of the next unscripted list call.
    #[must_use]
    pub fn on_list(self, outcome: Result<Vec<Product>>) -> Self {
        self.list.lock().unwrap().push_back(outcome);
        self
    }

    /// Script the outcome of the next unscripted create call.
    #[must_use]
    pub fn on_create(self, outcome: Result<Product>) -> Self {
        self.create.lock().unwrap().push_back(outcome);
        self
    }

    /// Script the outcome of the next unscripted update call.
    #[must_use]
    pub fn on_update(self, outcome: Result<ProductId>) -> Self {
        self.update.lock().unwrap().push_back(outcome);
        self
    }

    /// Script the outcome of the next unscripted delete call.
    #[must_use]
    pub fn on_delete(self, outcome: Result<()>) -> Self {
        self.delete.lock().unwrap().push_back(outcome);
        self
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn list(&self) -> Result<Vec<Product>> {
        self.list
            .lock()
            .unwrap()
            .pop_front()
            .expect("list called with no scripted outcome")
    }

    async fn create(&self, _product: &NewProduct) -> Result<Product> {
        self.create
            .lock()
            .unwrap()
            .pop_front()
            .expect("create called with no scripted outcome")
    }

    async fn update(&self, _patch: &ProductPatch) -> Result<ProductId> {
        self.update
            .lock()
            .unwrap()
            .pop_front()
            .expect("update called with no scripted outcome")
    }

    async fn delete(&self, _id: &ProductId) -> Result<()> {
        self.delete
            .lock()
            .unwrap()
            .pop_front()
            .expect("delete called with no scripted outcome")
    }
}
