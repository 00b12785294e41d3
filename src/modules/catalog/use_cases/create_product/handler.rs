use crate::modules::catalog::adapters::outbound::product_repository::{
    ProductRepository, RepositoryError,
};
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::create_product::decide::{DraftError, validate_draft};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, draft: ProductDraft) -> Result<Product, ApplicationError> {
        validate_draft(&draft)?;
        let product = self.repository.insert(draft).await?;
        tracing::info!(product_id = product.id, name = %product.name, "product created");
        Ok(product)
    }
}

#[cfg(test)]
mod create_product_handler_tests {
    use super::*;
    use crate::modules::catalog::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
    use crate::tests::fixtures::product_drafts::ProductDraftBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryProductRepository>, CreateProductHandler<InMemoryProductRepository>) {
        let repository = Arc::new(InMemoryProductRepository::seeded());
        let handler = CreateProductHandler::new(repository.clone());
        (repository, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_a_valid_draft(
        before_each: (Arc<InMemoryProductRepository>, CreateProductHandler<InMemoryProductRepository>),
    ) {
        let (repository, handler) = before_each;
        let product = handler
            .handle(ProductDraftBuilder::new().name("Caneta Gel Verde").build())
            .await
            .unwrap();
        assert_eq!(product.id, 21);
        assert_eq!(repository.get(21).await.unwrap(), Some(product));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_draft_without_storing_it(
        before_each: (Arc<InMemoryProductRepository>, CreateProductHandler<InMemoryProductRepository>),
    ) {
        let (repository, handler) = before_each;
        let result = handler
            .handle(ProductDraftBuilder::new().name("Lá").build())
            .await;
        assert_eq!(result, Err(ApplicationError::Invalid(DraftError::InvalidName)));
        assert_eq!(repository.get(21).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_repository_failures() {
        let mut repository = InMemoryProductRepository::new();
        repository.toggle_offline();
        let handler = CreateProductHandler::new(Arc::new(repository));
        let result = handler.handle(ProductDraftBuilder::new().build()).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::Backend(_)))
        ));
    }
}
