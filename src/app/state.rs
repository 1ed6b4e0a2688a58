//! Catalog state and its pure transitions.
//!
//! The local product list is a cache of backend state. It is updated at
//! exactly four points (load, create, patch, remove) and is not
//! reconciled with the backend beyond those, so after a partial failure
//! it may diverge until the next load.
//!
//! All mutation goes through [`CatalogState::apply`], a pure transition
//! from one state to the next, so every behavior is testable by feeding
//! events to a value.

use crate::domain::{Product, ProductId, ProductPatch};

/// One step in the catalog's life.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// An operation went in flight.
    Started,
    /// A list operation succeeded; this is the whole collection.
    Loaded(Vec<Product>),
    /// A create succeeded; this is the record the backend stored.
    Created(Product),
    /// An update succeeded; merge these fields into the matching entry.
    Patched(ProductPatch),
    /// A delete succeeded; drop the matching entry.
    Removed(ProductId),
    /// An operation failed with this message.
    Failed(String),
}

/// The catalog as seen by callers: the cached product list, whether an
/// operation is in flight, and the last operation's error if it failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    in_flight: bool,
    last_error: Option<String>,
}

impl CatalogState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether an operation is currently awaiting completion.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// The last operation's failure message. Cleared by every success,
    /// overwritten by every failure.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one event, producing the next state.
    ///
    /// Every terminal event (success or failure) clears the in-flight
    /// flag; successes additionally clear the error slot. A failure
    /// leaves the product list untouched.
    #[must_use]
    pub fn apply(mut self, event: CatalogEvent) -> Self {
        match event {
            CatalogEvent::Started => {
                self.in_flight = true;
            }
            CatalogEvent::Loaded(products) => {
                self.products = products;
                self.settle_ok();
            }
            CatalogEvent::Created(product) => {
                self.products.push(product);
                self.settle_ok();
            }
            CatalogEvent::Patched(patch) => {
                if let Some(entry) = self.products.iter_mut().find(|p| p.id == patch.id) {
                    entry.apply_patch(&patch);
                }
                self.settle_ok();
            }
            CatalogEvent::Removed(id) => {
                self.products.retain(|p| p.id != id);
                self.settle_ok();
            }
            CatalogEvent::Failed(message) => {
                self.last_error = Some(message);
                self.in_flight = false;
            }
        }
        self
    }

    fn settle_ok(&mut self) {
        self.last_error = None;
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::product;
    use rust_decimal_macros::dec;

    // -------------------------------------------------------------------------
    // Flag Transitions
    // -------------------------------------------------------------------------

    #[test]
    fn started_raises_the_in_flight_flag() {
        let state = CatalogState::new().apply(CatalogEvent::Started);
        assert!(state.in_flight());
    }

    #[test]
    fn every_terminal_event_clears_the_in_flight_flag() {
        let loaded = CatalogState::new()
            .apply(CatalogEvent::Started)
            .apply(CatalogEvent::Loaded(vec![]));
        assert!(!loaded.in_flight());

        let failed = CatalogState::new()
            .apply(CatalogEvent::Started)
            .apply(CatalogEvent::Failed("boom".into()));
        assert!(!failed.in_flight());
    }

    #[test]
    fn success_clears_a_previous_error() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Failed("boom".into()))
            .apply(CatalogEvent::Loaded(vec![]));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn each_failure_overwrites_the_error_slot() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Failed("first".into()))
            .apply(CatalogEvent::Failed("second".into()));
        assert_eq!(state.last_error(), Some("second"));
    }

    // -------------------------------------------------------------------------
    // List Transitions
    // -------------------------------------------------------------------------

    #[test]
    fn loaded_replaces_the_whole_list() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Loaded(vec![product("stale", dec!(1))]))
            .apply(CatalogEvent::Loaded(vec![product("1", dec!(10))]));

        assert_eq!(state.products(), &[product("1", dec!(10))]);
    }

    #[test]
    fn failure_leaves_the_list_unchanged() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Loaded(vec![product("1", dec!(10))]))
            .apply(CatalogEvent::Failed("backend down".into()));

        assert_eq!(state.products(), &[product("1", dec!(10))]);
        assert_eq!(state.last_error(), Some("backend down"));
    }

    // -------------------------------------------------------------------------
    // Mutation Transitions
    // -------------------------------------------------------------------------

    #[test]
    fn created_appends_the_stored_record() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Loaded(vec![product("1", dec!(10))]))
            .apply(CatalogEvent::Created(product("2", dec!(5))));

        assert_eq!(
            state.products(),
            &[product("1", dec!(10)), product("2", dec!(5))]
        );
    }

    #[test]
    fn patched_merges_into_the_matching_entry_only() {
        let patch = ProductPatch::for_id("1").price(dec!(20));
        let state = CatalogState::new()
            .apply(CatalogEvent::Loaded(vec![
                product("1", dec!(10)),
                product("2", dec!(5)),
            ]))
            .apply(CatalogEvent::Patched(patch));

        assert_eq!(state.products()[0].price, dec!(20));
        assert_eq!(state.products()[0].name, "product 1");
        assert_eq!(state.products()[1], product("2", dec!(5)));
    }

    #[test]
    fn patched_for_an_unknown_id_is_a_no_op() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Loaded(vec![product("1", dec!(10))]))
            .apply(CatalogEvent::Patched(ProductPatch::for_id("404").price(dec!(1))));

        assert_eq!(state.products(), &[product("1", dec!(10))]);
    }

    #[test]
    fn removed_drops_the_entry_and_preserves_order() {
        let state = CatalogState::new()
            .apply(CatalogEvent::Loaded(vec![
                product("1", dec!(10)),
                product("2", dec!(5)),
                product("3", dec!(7)),
            ]))
            .apply(CatalogEvent::Removed(ProductId::from("2")));

        assert_eq!(
            state.products(),
            &[product("1", dec!(10)), product("3", dec!(7))]
        );
    }

    // -------------------------------------------------------------------------
    // Purity
    // -------------------------------------------------------------------------

    #[test]
    fn transitions_are_deterministic() {
        let seed = CatalogState::new().apply(CatalogEvent::Loaded(vec![product("1", dec!(10))]));
        let event = CatalogEvent::Removed(ProductId::from("1"));

        assert_eq!(seed.clone().apply(event.clone()), seed.apply(event));
    }
}
