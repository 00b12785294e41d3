// In memory product repository.
//
// Purpose
// - Back the storefront API without a database, and exercise handlers in tests.
//
// Responsibilities
// - Store products by id and hand out ids sequentially, starting after the highest seeded id.
// - Serve the catalog listing query (filter, sort, page).
// - Reserve stock for an order atomically under a single write lock.

use crate::modules::catalog::adapters::outbound::product_repository::{
    ProductRepository, RepositoryError, StockReservation,
};
use crate::modules::catalog::adapters::outbound::seed::school_catalog;
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::core::query::{ProductPage, ProductQuery};
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::list_products::queries_port::ProductQueries;
use crate::shared::core::primitives::ProductId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Products {
    by_id: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Products>,
    is_offline: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut repository = Self::default();
        let inner = repository.products.get_mut();
        for product in products {
            inner.last_id = inner.last_id.max(product.id);
            inner.by_id.insert(product.id, product);
        }
        repository
    }

    /// The twenty-product school catalog, ids 1..=20.
    pub fn seeded() -> Self {
        let mut repository = Self::default();
        let inner = repository.products.get_mut();
        for draft in school_catalog() {
            inner.last_id += 1;
            inner
                .by_id
                .insert(inner.last_id, Product::from_draft(inner.last_id, draft));
        }
        repository
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Product repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.products.read().await.by_id.values().cloned().collect())
    }

    async fn get(&self, product_id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.products.read().await.by_id.get(&product_id).cloned())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.products.write().await;
        guard.last_id += 1;
        let product = Product::from_draft(guard.last_id, draft);
        guard.by_id.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.products.write().await;
        let slot = guard
            .by_id
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound(product_id))?;
        let image = slot.image.take();
        *slot = Product::from_draft(product_id, draft);
        if slot.image.is_none() {
            slot.image = image;
        }
        Ok(slot.clone())
    }

    async fn delete(&self, product_id: ProductId) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.products
            .write()
            .await
            .by_id
            .remove(&product_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(product_id))
    }

    async fn reserve_stock(
        &self,
        reservations: &[StockReservation],
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.products.write().await;

        for reservation in reservations {
            let product = guard
                .by_id
                .get(&reservation.product_id)
                .ok_or(RepositoryError::NotFound(reservation.product_id))?;
            if product.stock < reservation.quantity {
                return Err(RepositoryError::InsufficientStock {
                    product_id: product.id,
                    name: product.name.clone(),
                });
            }
        }

        for reservation in reservations {
            if let Some(product) = guard.by_id.get_mut(&reservation.product_id) {
                product.stock -= reservation.quantity;
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductQueries for InMemoryProductRepository {
    async fn list_products(&self, query: &ProductQuery) -> anyhow::Result<ProductPage> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Product repository offline"));
        }
        let guard = self.products.read().await;
        Ok(query.apply(guard.by_id.values().cloned()))
    }
}
