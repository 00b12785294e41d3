// Cart store: the storefront's cart, kept within the bounds of the latest catalog.
//
// Purpose
// - One object owning every cart operation, with storage, catalog and checkout injected.
//
// Responsibilities
// - Read the persisted cart fresh on every operation; storage is the source of truth.
// - Decide mutations against the cached catalog snapshot, then persist the whole cart.
// - Refresh the snapshot on demand and after a successful checkout, purging or clamping
//   lines the new catalog can no longer honor.
// - Allow one checkout at a time.
//
// Boundaries
// - Concurrent writers to the same storage are not coordinated. The last write wins.

use crate::modules::cart::adapters::outbound::catalog_provider::{CatalogError, CatalogProvider};
use crate::modules::cart::adapters::outbound::checkout_gateway::CheckoutGateway;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::reconcile::{Reconciliation, reconcile};
use crate::modules::cart::core::view::CartView;
use crate::modules::cart::use_cases::add_item::decide::decide_add;
use crate::modules::cart::use_cases::decision::{DecideError, Decision};
use crate::modules::cart::use_cases::remove_item::decide::decide_remove;
use crate::modules::cart::use_cases::set_quantity::decide::decide_set_quantity;
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::modules::orders::core::order::{CheckoutRequest, OrderConfirmation};
use crate::shared::core::primitives::{ProductId, Quantity};
use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

pub const CART_STORAGE_KEY: &str = "carrinho";

#[derive(Debug, Error)]
pub enum CartError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Checkout(String),

    #[error("Carrinho vazio")]
    EmptyCart,

    #[error("checkout already in progress")]
    CheckoutInProgress,

    #[error("could not encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(
        "Pedido {} confirmado, mas o carrinho não pôde ser limpo: {reason}",
        confirmation.order_id
    )]
    NotCleared {
        confirmation: OrderConfirmation,
        reason: String,
    },
}

pub struct CartStore<TStorage, TCatalog, TCheckout>
where
    TStorage: KeyValueStorage + 'static,
    TCatalog: CatalogProvider + 'static,
    TCheckout: CheckoutGateway + 'static,
{
    storage: Arc<TStorage>,
    catalog_provider: Arc<TCatalog>,
    checkout_gateway: Arc<TCheckout>,
    snapshot: RwLock<CatalogSnapshot>,
    checkout_guard: Mutex<()>,
}

impl<TStorage, TCatalog, TCheckout> CartStore<TStorage, TCatalog, TCheckout>
where
    TStorage: KeyValueStorage + 'static,
    TCatalog: CatalogProvider + 'static,
    TCheckout: CheckoutGateway + 'static,
{
    pub fn new(
        storage: Arc<TStorage>,
        catalog_provider: Arc<TCatalog>,
        checkout_gateway: Arc<TCheckout>,
    ) -> Self {
        Self {
            storage,
            catalog_provider,
            checkout_gateway,
            snapshot: RwLock::new(CatalogSnapshot::empty()),
            checkout_guard: Mutex::new(()),
        }
    }

    /// The persisted cart. Missing, malformed or unreadable storage reads as an empty cart.
    pub async fn load(&self) -> Cart {
        match self.storage.get(CART_STORAGE_KEY).await {
            Ok(None) => Cart::empty(),
            Ok(Some(raw)) => Cart::decode(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "discarding malformed persisted cart");
                Cart::empty()
            }),
            Err(err) => {
                tracing::warn!(error = %err, "cart storage unavailable, starting empty");
                Cart::empty()
            }
        }
    }

    pub async fn catalog(&self) -> CatalogSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Replace the cached snapshot and bring the persisted cart back within it.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh_catalog(&self) -> Result<Reconciliation, CartError> {
        let fresh = self
            .catalog_provider
            .fetch_catalog()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "catalog refresh failed"))?;
        *self.snapshot.write().await = fresh;
        self.reconcile().await
    }

    /// Purge lines for vanished or sold out products and clamp lines above their stock.
    pub async fn reconcile(&self) -> Result<Reconciliation, CartError> {
        let cart = self.load().await;
        let reconciliation = reconcile(&cart, &*self.snapshot.read().await);
        if reconciliation.changed() {
            tracing::info!(
                purged = ?reconciliation.purged,
                clamped = ?reconciliation.clamped,
                "cart reconciled with catalog"
            );
            self.persist(&reconciliation.cart).await?;
        }
        Ok(reconciliation)
    }

    pub async fn add_item(&self, product_id: ProductId, delta: Quantity) -> Result<Cart, CartError> {
        let cart = self.load().await;
        let decision = decide_add(&cart, &*self.snapshot.read().await, product_id, delta);
        self.apply(decision).await
    }

    pub async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Cart, CartError> {
        let cart = self.load().await;
        let decision =
            decide_set_quantity(&cart, &*self.snapshot.read().await, product_id, quantity);
        self.apply(decision).await
    }

    pub async fn remove_item(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let cart = self.load().await;
        self.apply(decide_remove(&cart, product_id)).await
    }

    /// Sum of quantity times unit price. Lines missing from the snapshot count as zero.
    pub async fn total(&self) -> Decimal {
        self.view().await.total
    }

    pub async fn item_count(&self) -> u64 {
        self.load().await.item_count()
    }

    pub async fn view(&self) -> CartView {
        let cart = self.load().await;
        CartView::project(&cart, &*self.snapshot.read().await)
    }

    /// Submit the whole cart. On success the cart is cleared and the catalog refreshed.
    ///
    /// A placed order whose cart cannot be cleared comes back as `CartError::NotCleared`.
    pub async fn checkout(&self, coupon: Option<&str>) -> Result<OrderConfirmation, CartError> {
        let _guard = self
            .checkout_guard
            .try_lock()
            .map_err(|_| CartError::CheckoutInProgress)?;

        let cart = self.load().await;
        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let request = CheckoutRequest {
            items: cart.to_order_items(),
            coupon: coupon
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string),
        };

        let confirmation = self
            .checkout_gateway
            .confirm(&request)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "checkout failed, cart kept");
                CartError::Checkout(err.user_message())
            })?;
        tracing::info!(
            order_id = confirmation.order_id,
            total_final = %confirmation.total_final,
            "order placed"
        );

        let cleared = self.clear().await;
        if let Err(err) = self.refresh_catalog().await {
            tracing::warn!(error = %err, "catalog not refreshed after checkout");
        }
        match cleared {
            Ok(()) => Ok(confirmation),
            Err(err) => {
                tracing::error!(
                    order_id = confirmation.order_id,
                    error = %err,
                    "order placed but the cart was not cleared"
                );
                Err(CartError::NotCleared {
                    confirmation,
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Drop the persisted cart, falling back to writing an empty one.
    async fn clear(&self) -> Result<(), StorageError> {
        match self.storage.remove(CART_STORAGE_KEY).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(error = %err, "could not remove the cart, storing an empty one");
                self.storage.set(CART_STORAGE_KEY, "[]").await
            }
        }
    }

    async fn apply(&self, decision: Decision) -> Result<Cart, CartError> {
        match decision {
            Decision::Accepted { cart } => {
                self.persist(&cart).await?;
                Ok(cart)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "cart change rejected");
                Err(reason.into())
            }
        }
    }

    async fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let encoded = cart.encode()?;
        self.storage.set(CART_STORAGE_KEY, &encoded).await?;
        Ok(())
    }
}

#[cfg(test)]
mod cart_store_tests {
    use super::*;
    use crate::modules::cart::adapters::outbound::catalog_provider_in_memory::InMemoryCatalogProvider;
    use crate::modules::cart::adapters::outbound::checkout_gateway::CHECKOUT_FALLBACK_MESSAGE;
    use crate::modules::cart::adapters::outbound::checkout_gateway_in_memory::InMemoryCheckoutGateway;
    use crate::modules::cart::core::cart::CartLine;
    use crate::shared::infrastructure::key_value_storage::in_memory::InMemoryKeyValueStorage;
    use crate::tests::fixtures::products::ProductBuilder;
    use rstest::{fixture, rstest};

    type Store =
        CartStore<InMemoryKeyValueStorage, InMemoryCatalogProvider, InMemoryCheckoutGateway>;

    struct Harness {
        storage: Arc<InMemoryKeyValueStorage>,
        catalog: Arc<InMemoryCatalogProvider>,
        gateway: Arc<InMemoryCheckoutGateway>,
        store: Store,
    }

    fn harness(storage: InMemoryKeyValueStorage) -> Harness {
        let storage = Arc::new(storage);
        let catalog = Arc::new(InMemoryCatalogProvider::new(vec![
            ProductBuilder::new(1)
                .name("Caderno")
                .price(Decimal::new(200, 2))
                .stock(5)
                .build(),
            ProductBuilder::new(2)
                .name("Lápis")
                .price(Decimal::new(150, 2))
                .stock(10)
                .build(),
        ]));
        let gateway = Arc::new(InMemoryCheckoutGateway::new(catalog.clone()));
        let store = CartStore::new(storage.clone(), catalog.clone(), gateway.clone());
        Harness {
            storage,
            catalog,
            gateway,
            store,
        }
    }

    #[fixture]
    async fn before_each() -> Harness {
        let harness = harness(InMemoryKeyValueStorage::new());
        harness.store.refresh_catalog().await.unwrap();
        harness
    }

    fn line(product_id: ProductId, quantity: Quantity) -> CartLine {
        CartLine {
            product_id,
            quantity,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_empty_cart_when_nothing_is_stored(
        #[future] before_each: Harness,
    ) {
        let h = before_each.await;
        assert!(h.store.load().await.is_empty());
        assert_eq!(h.store.total().await, Decimal::ZERO);
        assert_eq!(h.store.item_count().await, 0);
    }

    #[rstest]
    #[case("{not json")]
    #[case(r#"{"id":1}"#)]
    #[tokio::test]
    async fn it_should_load_an_empty_cart_from_a_malformed_value(#[case] raw: &str) {
        let h = harness(InMemoryKeyValueStorage::with_value(CART_STORAGE_KEY, raw));
        assert!(h.store.load().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_empty_cart_when_storage_is_offline(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 1).await.unwrap();
        h.storage.set_offline(true);
        assert!(h.store.load().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clamp_repeated_adds_to_the_stock(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 3).await.unwrap();
        let cart = h.store.add_item(1, 3).await.unwrap();
        assert_eq!(cart.quantity_of(1), 5);
        assert_eq!(h.store.load().await.quantity_of(1), 5);
        let result = h.store.add_item(1, 1).await;
        assert!(matches!(
            result,
            Err(CartError::Rejected(DecideError::AtStockCeiling(1)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_persist_the_canonical_shape(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(2, 2).await.unwrap();
        h.store.add_item(1, 1).await.unwrap();
        assert_eq!(
            h.storage.get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some(r#"[{"id":2,"qtd":2},{"id":1,"qtd":1}]"#)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_persist_a_rejected_change(#[future] before_each: Harness) {
        let h = before_each.await;
        let result = h.store.add_item(99, 1).await;
        assert!(matches!(
            result,
            Err(CartError::Rejected(DecideError::UnknownProduct(99)))
        ));
        assert_eq!(h.storage.get(CART_STORAGE_KEY).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clamp_set_quantity_to_at_least_one(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 3).await.unwrap();
        assert_eq!(h.store.set_quantity(1, 0).await.unwrap().quantity_of(1), 1);
        assert_eq!(h.store.set_quantity(1, 50).await.unwrap().quantity_of(1), 5);
        assert!(matches!(
            h.store.set_quantity(2, 1).await,
            Err(CartError::Rejected(DecideError::NotInCart(2)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_items_idempotently(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 2).await.unwrap();
        h.store.remove_item(1).await.unwrap();
        h.store.remove_item(1).await.unwrap();
        assert_eq!(h.store.load().await.line(1), None);
        assert_eq!(
            h.storage.get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_total_only_lines_known_to_the_catalog() {
        let h = harness(InMemoryKeyValueStorage::with_value(
            CART_STORAGE_KEY,
            r#"[{"id":1,"qtd":2},{"id":2,"qtd":1},{"id":77,"qtd":4}]"#,
        ));
        h.catalog.remove_product(2).await;
        *h.store.snapshot.write().await = h.catalog.fetch_catalog().await.unwrap();
        assert_eq!(h.store.total().await, Decimal::new(400, 2));
        assert_eq!(h.store.item_count().await, 7);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_purge_and_clamp_on_refresh(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 5).await.unwrap();
        h.store.add_item(2, 3).await.unwrap();
        h.catalog.set_stock(1, 2).await;
        h.catalog.remove_product(2).await;

        let reconciliation = h.store.refresh_catalog().await.unwrap();
        assert_eq!(reconciliation.purged, vec![2]);
        assert_eq!(reconciliation.clamped, vec![1]);
        assert_eq!(h.store.load().await.lines(), &[line(1, 2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_stale_snapshot_when_refresh_fails(#[future] before_each: Harness) {
        let h = before_each.await;
        h.catalog.set_offline(true);
        let result = h.store.refresh_catalog().await;
        assert!(matches!(result, Err(CartError::Catalog(_))));
        assert_eq!(h.store.catalog().await.len(), 2);
        assert!(h.store.add_item(2, 1).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_the_cart_and_refresh_after_checkout(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 2).await.unwrap();
        h.store.add_item(2, 4).await.unwrap();

        let confirmation = h.store.checkout(Some(" aluno10 ")).await.unwrap();
        assert_eq!(confirmation.total_final, Decimal::new(900, 2));
        assert!(h.store.load().await.is_empty());
        assert_eq!(h.storage.get(CART_STORAGE_KEY).await.unwrap(), None);
        assert_eq!(h.store.catalog().await.get(1).unwrap().stock, 3);
        assert_eq!(h.catalog.fetch_count(), 3);

        let submitted = h.gateway.requests().await;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].items.len(), 2);
        assert_eq!(submitted[0].coupon.as_deref(), Some("aluno10"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_cart_when_checkout_fails(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 2).await.unwrap();
        h.gateway.reject_next("Estoque insuficiente para Caderno").await;

        let result = h.store.checkout(None).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Estoque insuficiente para Caderno"
        );
        assert_eq!(h.store.load().await.lines(), &[line(1, 2)]);

        h.gateway.set_offline(true);
        let result = h.store.checkout(None).await;
        assert_eq!(result.unwrap_err().to_string(), CHECKOUT_FALLBACK_MESSAGE);
        assert_eq!(h.store.load().await.lines(), &[line(1, 2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_empty_checkout_locally(#[future] before_each: Harness) {
        let h = before_each.await;
        assert!(matches!(h.store.checkout(None).await, Err(CartError::EmptyCart)));
        assert!(h.gateway.requests().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_second_checkout_in_flight(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 1).await.unwrap();
        h.gateway.set_delay_confirm_ms(20);

        let (first, second) = tokio::join!(h.store.checkout(None), h.store.checkout(None));
        assert!(first.is_ok());
        assert!(matches!(second, Err(CartError::CheckoutInProgress)));
        assert_eq!(h.gateway.requests().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_an_empty_cart_when_removal_fails(#[future] before_each: Harness) {
        let h = before_each.await;
        h.store.add_item(1, 2).await.unwrap();
        h.storage.set_fail_removes(true);

        let confirmation = h.store.checkout(None).await.unwrap();
        assert_eq!(confirmation.order_id, 1);
        assert!(h.store.load().await.is_empty());
        assert_eq!(
            h.storage.get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_placed_order_whose_cart_was_not_cleared(
        #[future] before_each: Harness,
    ) {
        let h = before_each.await;
        h.store.add_item(1, 2).await.unwrap();
        h.gateway.set_delay_confirm_ms(50);

        let (result, _) = tokio::join!(h.store.checkout(None), async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            h.storage.set_offline(true);
        });
        match result {
            Err(CartError::NotCleared { confirmation, .. }) => {
                assert_eq!(confirmation.order_id, 1);
                assert_eq!(confirmation.total_final, Decimal::new(400, 2));
            }
            other => panic!("expected NotCleared, got {other:?}"),
        }

        h.storage.set_offline(false);
        assert_eq!(h.store.load().await.lines(), &[line(1, 2)]);
        assert_eq!(h.store.catalog().await.get(1).unwrap().stock, 3);
    }
}
