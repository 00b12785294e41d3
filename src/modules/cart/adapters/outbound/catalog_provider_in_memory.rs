// In memory catalog provider.
//
// Purpose
// - Serve the offline stationery catalog, and let tests move stock around between fetches.
//
// Responsibilities
// - Answer listing queries the same way the storefront API does.
// - Count full catalog fetches so tests can assert refreshes.
// - Fail every call while switched offline.

use crate::modules::cart::adapters::outbound::catalog_provider::{CatalogError, CatalogProvider};
use crate::modules::catalog::adapters::outbound::seed::stationery_mock;
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::core::query::{ProductPage, ProductQuery};
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::shared::core::primitives::{ProductId, Quantity};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalogProvider {
    products: RwLock<BTreeMap<ProductId, Product>>,
    is_offline: AtomicBool,
    fetches: AtomicUsize,
}

impl InMemoryCatalogProvider {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
            ..Self::default()
        }
    }

    pub fn stationery() -> Self {
        Self::new(stationery_mock())
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub async fn set_stock(&self, product_id: ProductId, stock: Quantity) {
        if let Some(product) = self.products.write().await.get_mut(&product_id) {
            product.stock = stock;
        }
    }

    pub async fn upsert(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    pub async fn remove_product(&self, product_id: ProductId) {
        self.products.write().await.remove(&product_id);
    }

    /// Take stock out for a confirmed order. Unknown ids are ignored.
    pub async fn decrement_stock(&self, items: &[(ProductId, Quantity)]) {
        let mut products = self.products.write().await;
        for (product_id, quantity) in items {
            if let Some(product) = products.get_mut(product_id) {
                product.stock = product.stock.saturating_sub(*quantity);
            }
        }
    }

    pub async fn product(&self, product_id: ProductId) -> Option<Product> {
        self.products.read().await.get(&product_id).cloned()
    }

    fn ensure_online(&self) -> Result<(), CatalogError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("Catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogProvider for InMemoryCatalogProvider {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError> {
        self.ensure_online()?;
        Ok(query.apply(self.products.read().await.values().cloned()))
    }

    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.ensure_online()?;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(CatalogSnapshot::from_products(
            self.products.read().await.values().cloned(),
        ))
    }
}
