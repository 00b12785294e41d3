// Catalog snapshot: the products known to the client for the current session.
//
// Purpose
// - Answer "what does product N cost and how many are left" for cart decisions.
//
// Responsibilities
// - Index products by id; later duplicates replace earlier ones.
// - Drop products with a negative price, which the backend never serves.
// - Remember when the snapshot was taken.

use crate::modules::catalog::core::product::Product;
use crate::shared::core::primitives::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    products: BTreeMap<ProductId, Product>,
    fetched_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .filter(|product| {
                if product.price < Decimal::ZERO {
                    tracing::warn!(product_id = product.id, "dropping product with negative price");
                    return false;
                }
                true
            })
            .map(|product| (product.id, product))
            .collect();
        Self {
            products,
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(&product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.products.contains_key(&product_id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `None` until a catalog has been fetched.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}
