use crate::modules::cart::adapters::outbound::checkout_gateway::{
    CHECKOUT_FALLBACK_MESSAGE, CheckoutError, CheckoutGateway,
};
use crate::modules::orders::core::order::{CheckoutRequest, OrderConfirmation};
use crate::shared::infrastructure::storefront_api::{ApiError, StorefrontApiClient};

/// Posts orders to /carrinho/confirmar.
#[derive(Debug, Clone)]
pub struct HttpCheckoutGateway {
    client: StorefrontApiClient,
}

impl HttpCheckoutGateway {
    pub fn new(client: StorefrontApiClient) -> Self {
        Self { client }
    }
}

impl From<ApiError> for CheckoutError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api { detail, .. } => {
                Self::Rejected(detail.unwrap_or_else(|| CHECKOUT_FALLBACK_MESSAGE.to_string()))
            }
            other => Self::Transport(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn confirm(&self, request: &CheckoutRequest) -> Result<OrderConfirmation, CheckoutError> {
        Ok(self.client.post("/carrinho/confirmar", request).await?)
    }
}
