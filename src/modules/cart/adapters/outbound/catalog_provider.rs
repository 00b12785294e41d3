// Catalog provider port: where the cart store gets its catalog snapshot from.
//
// Purpose
// - Decouple the cart from the catalog source (offline mock, storefront API).
//
// Boundaries
// - Implementations only serve pages. Walking every page into a snapshot is shared.

use crate::modules::catalog::core::query::{MAX_PAGE_LIMIT, ProductPage, ProductQuery};
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::shared::infrastructure::storefront_api::ApiError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError>;

    /// Collect every page until `total` products are in hand or a page comes back empty.
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        let mut products = Vec::new();
        let mut page = 1;
        loop {
            let listing = self
                .list_products(&ProductQuery::page(page, MAX_PAGE_LIMIT))
                .await?;
            if listing.items.is_empty() {
                break;
            }
            products.extend(listing.items);
            if products.len() as u64 >= listing.total {
                break;
            }
            page += 1;
        }
        tracing::debug!(products = products.len(), pages = page, "catalog fetched");
        Ok(CatalogSnapshot::from_products(products))
    }
}
