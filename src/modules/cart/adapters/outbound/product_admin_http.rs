use crate::modules::cart::adapters::outbound::product_admin::{
    ADMIN_FALLBACK_MESSAGE, AdminError, ProductAdmin,
};
use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::create_product::decide::validate_draft;
use crate::shared::infrastructure::storefront_api::{ApiError, StorefrontApiClient};

/// Creates products through POST /produtos after checking the draft locally.
#[derive(Debug, Clone)]
pub struct HttpProductAdmin {
    client: StorefrontApiClient,
}

impl HttpProductAdmin {
    pub fn new(client: StorefrontApiClient) -> Self {
        Self { client }
    }
}

impl From<ApiError> for AdminError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api { detail, .. } => {
                Self::Rejected(detail.unwrap_or_else(|| ADMIN_FALLBACK_MESSAGE.to_string()))
            }
            other => Self::Transport(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl ProductAdmin for HttpProductAdmin {
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, AdminError> {
        validate_draft(draft)?;
        let product: Product = self.client.post("/produtos", draft).await?;
        tracing::info!(product_id = product.id, name = %product.name, "product created");
        Ok(product)
    }
}
