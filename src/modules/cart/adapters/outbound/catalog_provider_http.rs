// HTTP catalog provider backed by GET /produtos.
//
// Older backends answer with a bare JSON array instead of `{items, total}`. Both are
// accepted; a bare array is taken as the complete catalog.

use crate::modules::cart::adapters::outbound::catalog_provider::{CatalogError, CatalogProvider};
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::core::query::{ProductPage, ProductQuery};
use crate::shared::infrastructure::storefront_api::StorefrontApiClient;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductListing {
    Page(ProductPage),
    Bare(Vec<Product>),
}

impl From<ProductListing> for ProductPage {
    fn from(listing: ProductListing) -> Self {
        match listing {
            ProductListing::Page(page) => page,
            ProductListing::Bare(items) => ProductPage {
                total: items.len() as u64,
                items,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpCatalogProvider {
    client: StorefrontApiClient,
}

impl HttpCatalogProvider {
    pub fn new(client: StorefrontApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError> {
        let listing: ProductListing = self.client.get("/produtos", query).await?;
        Ok(listing.into())
    }
}
