use crate::modules::orders::adapters::outbound::order_repository::{
    OrderRepository, OrderRepositoryError,
};
use crate::modules::orders::core::order::{Order, OrderItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    is_offline: bool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn record(
        &self,
        items: Vec<OrderItem>,
        total_final: Decimal,
        placed_at: DateTime<Utc>,
    ) -> Result<Order, OrderRepositoryError> {
        if self.is_offline {
            return Err(OrderRepositoryError::Backend("Order repository offline".into()));
        }
        let mut orders = self.orders.lock().await;
        let order = Order {
            id: orders.len() as u64 + 1,
            items,
            total_final,
            placed_at,
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn list(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        if self.is_offline {
            return Err(OrderRepositoryError::Backend("Order repository offline".into()));
        }
        Ok(self.orders.lock().await.clone())
    }
}
