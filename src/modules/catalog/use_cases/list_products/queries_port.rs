use crate::modules::catalog::core::query::{ProductPage, ProductQuery};
use async_trait::async_trait;

#[async_trait]
pub trait ProductQueries {
    async fn list_products(&self, query: &ProductQuery) -> anyhow::Result<ProductPage>;
}
