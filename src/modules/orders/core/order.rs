// Order wire types and the stored order record.
//
// Notes
// - `CheckoutRequest` is what the storefront posts to /carrinho/confirmar.
// - `OrderConfirmation` accepts `id` as an alias of `order_id`, the name older backends used.

use crate::shared::core::primitives::{OrderId, ProductId, Quantity};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "produto_id")]
    pub product_id: ProductId,
    #[serde(rename = "quantidade")]
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    #[serde(alias = "id")]
    pub order_id: OrderId,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_final: Decimal,
    #[serde(default, alias = "data", skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub total_final: Decimal,
    pub placed_at: DateTime<Utc>,
}

impl From<&Order> for OrderConfirmation {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            total_final: order.total_final,
            placed_at: Some(order.placed_at),
        }
    }
}
