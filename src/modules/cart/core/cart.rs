// Cart: ordered product lines as persisted under the `carrinho` storage key.
//
// Purpose
// - Hold the requested quantity per product, in insertion order.
// - Read every shape the storefront scripts ever wrote, write one canonical shape.
//
// Responsibilities
// - Decode `[{"id": 1, "qtd": 2}]`, also accepting `produto_id`/`quantidade` and ignoring
//   extra fields such as `nome` or `preco`.
// - Drop zero quantities and merge duplicate ids by summing on decode.
//
// Notes
// - Stock bounds are not known here. The cart decisions enforce them against a catalog.

use crate::modules::orders::core::order::OrderItem;
use crate::shared::core::primitives::{ProductId, Quantity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id", alias = "produto_id")]
    pub product_id: ProductId,
    #[serde(rename = "qtd", alias = "quantidade")]
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a cart from raw lines, normalizing zero quantities and duplicates.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::default();
        for line in lines.into_iter().filter(|line| line.quantity > 0) {
            match cart.line_mut(line.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Parse the persisted value. `null` reads as an empty cart.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        let lines: Option<Vec<CartLine>> = serde_json::from_str(raw)?;
        Ok(Self::from_lines(lines.unwrap_or_default()))
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Quantity {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Insert or overwrite the quantity for a product. A zero quantity removes the line.
    pub fn set(&mut self, product_id: ProductId, quantity: Quantity) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        match self.line_mut(product_id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine {
                product_id,
                quantity,
            }),
        }
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        before != self.lines.len()
    }

    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}
