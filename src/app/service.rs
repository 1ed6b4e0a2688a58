//! The catalog service: drives backend operations and owns the state.

use std::mem;

use tracing::error;

use super::state::{CatalogEvent, CatalogState};
use crate::domain::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::Error;
use crate::port::{CatalogApi, Event, Notifier};

/// Synchronizes the local product list with the remote collection.
///
/// Each operation raises the in-flight flag, calls the backend through
/// the [`CatalogApi`] port, and settles the state with one event. No
/// operation returns an error: failures land in the error slot, and the
/// caller inspects [`CatalogService::last_error`] afterwards. Successful
/// mutations are confirmed through the [`Notifier`] port with the
/// identifier the backend returned.
///
/// Operations take `&mut self`, so one service never has two operations
/// in flight. There are no retries and no rollback: a mutation that the
/// backend accepted but the client failed to decode leaves the cache
/// stale until the next [`refresh`](CatalogService::refresh).
pub struct CatalogService {
    api: Box<dyn CatalogApi>,
    notifier: Box<dyn Notifier>,
    state: CatalogState,
}

impl CatalogService {
    #[must_use]
    pub fn new(api: Box<dyn CatalogApi>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: CatalogState::new(),
        }
    }

    /// The cached product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.state.products()
    }

    /// Whether an operation is currently awaiting completion.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.in_flight()
    }

    /// The last operation's failure message, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    /// The full state, for callers that render it wholesale.
    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Replace the local list with the backend's collection.
    pub async fn refresh(&mut self) {
        self.transition(CatalogEvent::Started);
        match self.api.list().await {
            Ok(products) => self.transition(CatalogEvent::Loaded(products)),
            Err(err) => self.record_failure("list", err),
        }
    }

    /// Create a product and cache the record the backend stored.
    pub async fn create(&mut self, product: NewProduct) {
        self.transition(CatalogEvent::Started);
        match self.api.create(&product).await {
            Ok(created) => {
                let id = created.id.clone();
                self.transition(CatalogEvent::Created(created));
                self.notifier.notify(Event::ProductCreated { id });
            }
            Err(err) => self.record_failure("create", err),
        }
    }

    /// Apply a partial update to the product the patch addresses.
    pub async fn update(&mut self, patch: ProductPatch) {
        self.transition(CatalogEvent::Started);
        match self.api.update(&patch).await {
            Ok(id) => {
                self.transition(CatalogEvent::Patched(patch));
                self.notifier.notify(Event::ProductUpdated { id });
            }
            Err(err) => self.record_failure("update", err),
        }
    }

    /// Remove a product from the backend and the local list.
    pub async fn delete(&mut self, id: ProductId) {
        self.transition(CatalogEvent::Started);
        match self.api.delete(&id).await {
            Ok(()) => {
                self.transition(CatalogEvent::Removed(id.clone()));
                self.notifier.notify(Event::ProductDeleted { id });
            }
            Err(err) => self.record_failure("delete", err),
        }
    }

    fn transition(&mut self, event: CatalogEvent) {
        self.state = mem::take(&mut self.state).apply(event);
    }

    /// Single funnel for every caught failure: log it, stringify it into
    /// the error slot. [`Error::Unknown`] covers failures that carry no
    /// structure of their own.
    fn record_failure(&mut self, operation: &'static str, err: Error) {
        error!(operation, error = %err, "Catalog operation failed");
        self.transition(CatalogEvent::Failed(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{product, RecordingNotifier, StubCatalog};
    use reqwest::StatusCode;
    use rust_decimal_macros::dec;

    fn service(stub: StubCatalog) -> (CatalogService, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let service = CatalogService::new(Box::new(stub), Box::new(notifier.clone()));
        (service, notifier)
    }

    // -------------------------------------------------------------------------
    // List
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn refresh_replaces_the_list_and_clears_the_error() {
        let stub = StubCatalog::new()
            .on_list(Err(Error::Status {
                action: "fetch products",
                status: StatusCode::BAD_GATEWAY,
            }))
            .on_list(Ok(vec![product("1", dec!(10))]));
        let (mut catalog, _) = service(stub);

        catalog.refresh().await;
        assert!(catalog.last_error().is_some());

        catalog.refresh().await;
        assert_eq!(catalog.products(), &[product("1", dec!(10))]);
        assert!(catalog.last_error().is_none());
        assert!(!catalog.is_loading());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_list() {
        let stub = StubCatalog::new()
            .on_list(Ok(vec![product("1", dec!(10))]))
            .on_list(Err(Error::Status {
                action: "fetch products",
                status: StatusCode::NOT_FOUND,
            }));
        let (mut catalog, _) = service(stub);

        catalog.refresh().await;
        catalog.refresh().await;

        assert_eq!(catalog.products(), &[product("1", dec!(10))]);
        assert_eq!(
            catalog.last_error(),
            Some("failed to fetch products: 404 Not Found")
        );
        assert!(!catalog.is_loading());
    }

    // -------------------------------------------------------------------------
    // Create
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn create_caches_the_stored_record_and_confirms_with_its_id() {
        let stored = product("server-7", dec!(25));
        let stub = StubCatalog::new().on_create(Ok(stored.clone()));
        let (mut catalog, notifier) = service(stub);

        catalog
            .create(NewProduct {
                name: stored.name.clone(),
                price: stored.price,
                category: None,
                image: None,
                description: None,
            })
            .await;

        assert_eq!(catalog.products(), &[stored]);
        assert!(catalog.last_error().is_none());
        assert_eq!(
            notifier.events(),
            vec![Event::ProductCreated {
                id: ProductId::from("server-7")
            }]
        );
    }

    #[tokio::test]
    async fn failed_create_sets_the_fixed_message_and_stays_silent() {
        let stub = StubCatalog::new().on_create(Err(Error::Rejected {
            action: "create product",
        }));
        let (mut catalog, notifier) = service(stub);

        catalog
            .create(NewProduct {
                name: "Teapot".into(),
                price: dec!(25.50),
                category: None,
                image: None,
                description: None,
            })
            .await;

        assert!(catalog.products().is_empty());
        assert_eq!(catalog.last_error(), Some("failed to create product"));
        assert!(notifier.events().is_empty());
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn update_merges_the_patch_into_the_matching_entry() {
        let stub = StubCatalog::new()
            .on_list(Ok(vec![product("1", dec!(10)), product("2", dec!(5))]))
            .on_update(Ok(ProductId::from("1")));
        let (mut catalog, notifier) = service(stub);

        catalog.refresh().await;
        catalog.update(ProductPatch::for_id("1").price(dec!(20))).await;

        assert_eq!(catalog.products()[0].price, dec!(20));
        assert_eq!(catalog.products()[0].name, "product 1");
        assert_eq!(catalog.products()[1], product("2", dec!(5)));
        assert_eq!(
            notifier.events(),
            vec![Event::ProductUpdated {
                id: ProductId::from("1")
            }]
        );
    }

    #[tokio::test]
    async fn failed_update_leaves_entries_untouched() {
        let stub = StubCatalog::new()
            .on_list(Ok(vec![product("1", dec!(10))]))
            .on_update(Err(Error::Rejected {
                action: "update product",
            }));
        let (mut catalog, notifier) = service(stub);

        catalog.refresh().await;
        catalog.update(ProductPatch::for_id("1").price(dec!(99))).await;

        assert_eq!(catalog.products(), &[product("1", dec!(10))]);
        assert_eq!(catalog.last_error(), Some("failed to update product"));
        assert!(notifier.events().is_empty());
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn delete_removes_the_entry_and_preserves_order() {
        let stub = StubCatalog::new()
            .on_list(Ok(vec![
                product("1", dec!(10)),
                product("2", dec!(5)),
                product("3", dec!(7)),
            ]))
            .on_delete(Ok(()));
        let (mut catalog, notifier) = service(stub);

        catalog.refresh().await;
        catalog.delete(ProductId::from("1")).await;

        assert_eq!(
            catalog.products(),
            &[product("2", dec!(5)), product("3", dec!(7))]
        );
        assert_eq!(
            notifier.events(),
            vec![Event::ProductDeleted {
                id: ProductId::from("1")
            }]
        );
    }

    #[tokio::test]
    async fn failed_delete_embeds_the_status_text() {
        let stub = StubCatalog::new()
            .on_list(Ok(vec![product("1", dec!(10))]))
            .on_delete(Err(Error::Status {
                action: "delete product",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            }));
        let (mut catalog, notifier) = service(stub);

        catalog.refresh().await;
        catalog.delete(ProductId::from("1")).await;

        assert_eq!(catalog.products(), &[product("1", dec!(10))]);
        assert_eq!(
            catalog.last_error(),
            Some("failed to delete product: 500 Internal Server Error")
        );
        assert!(notifier.events().is_empty());
    }

    // -------------------------------------------------------------------------
    // Shared Error Funnel
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn unstructured_failures_report_the_unknown_message() {
        let stub = StubCatalog::new().on_list(Err(Error::Unknown("it broke".into())));
        let (mut catalog, _) = service(stub);

        catalog.refresh().await;

        assert_eq!(catalog.last_error(), Some("unknown error: it broke"));
    }

    #[tokio::test]
    async fn in_flight_flag_is_down_after_every_outcome() {
        let stub = StubCatalog::new()
            .on_list(Ok(vec![]))
            .on_list(Err(Error::Unknown("down".into())));
        let (mut catalog, _) = service(stub);

        catalog.refresh().await;
        assert!(!catalog.is_loading());

        catalog.refresh().await;
        assert!(!catalog.is_loading());
    }
}
