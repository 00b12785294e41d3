use crate::modules::orders::core::order::{Order, OrderItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderRepositoryError {
    #[error("order repository backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store a confirmed order and assign it the next order id.
    async fn record(
        &self,
        items: Vec<OrderItem>,
        total_final: Decimal,
        placed_at: DateTime<Utc>,
    ) -> Result<Order, OrderRepositoryError>;

    async fn list(&self) -> Result<Vec<Order>, OrderRepositoryError>;
}
