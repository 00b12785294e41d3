use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::create_product::decide::DraftError;
use async_trait::async_trait;
use thiserror::Error;

pub const ADMIN_FALLBACK_MESSAGE: &str = "Erro ao salvar produto";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    /// Refused locally; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error("{0}")]
    Rejected(String),

    #[error("admin transport error: {0}")]
    Transport(String),
}

impl AdminError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(reason) => reason.to_string(),
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) => ADMIN_FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
pub trait ProductAdmin: Send + Sync {
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, AdminError>;
}
