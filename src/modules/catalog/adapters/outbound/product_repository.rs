use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::shared::core::primitives::{ProductId, Quantity};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Produto não encontrado")]
    NotFound(ProductId),

    #[error("Estoque insuficiente para {name}")]
    InsufficientStock { product_id: ProductId, name: String },

    #[error("repository backend error: {0}")]
    Backend(String),
}

/// Units to take out of stock for one product when an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockReservation {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get(&self, product_id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, product_id: ProductId) -> Result<(), RepositoryError>;

    /// Decrement stock for every reservation or for none of them.
    ///
    /// Stock is re-checked under the write lock, so a reservation decided against an older
    /// read fails with `InsufficientStock` or `NotFound` instead of overselling.
    async fn reserve_stock(&self, reservations: &[StockReservation])
    -> Result<(), RepositoryError>;
}
