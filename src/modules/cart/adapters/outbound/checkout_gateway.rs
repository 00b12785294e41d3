use crate::modules::orders::core::order::{CheckoutRequest, OrderConfirmation};
use async_trait::async_trait;
use thiserror::Error;

pub const CHECKOUT_FALLBACK_MESSAGE: &str = "Erro ao finalizar pedido.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The backend refused the order; carries its message verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("checkout transport error: {0}")]
    Transport(String),
}

impl CheckoutError {
    /// What the shopper gets to read.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) => CHECKOUT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn confirm(&self, request: &CheckoutRequest) -> Result<OrderConfirmation, CheckoutError>;
}
