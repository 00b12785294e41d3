use crate::modules::catalog::adapters::outbound::product_repository::ProductRepository;
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::create_product::decide::validate_draft;
use crate::modules::catalog::use_cases::create_product::handler::ApplicationError;
use crate::shared::core::primitives::ProductId;
use std::sync::Arc;

/// Replace every field of an existing product. Same validation rules as creation.
pub struct UpdateProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpdateProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        product_id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ApplicationError> {
        validate_draft(&draft)?;
        let product = self.repository.update(product_id, draft).await?;
        tracing::info!(product_id, "product updated");
        Ok(product)
    }
}
