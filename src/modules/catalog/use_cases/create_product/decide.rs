use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use rust_decimal::Decimal;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 60;

/// Highest accepted unit price, R$ 1.000.000,00.
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("O nome deve ter entre 3 e 60 caracteres")]
    InvalidName,

    #[error("O preço deve ser maior ou igual a 0.01")]
    InvalidPrice,

    #[error("O preço deve ser no máximo 1000000.00")]
    PriceTooHigh,

    #[error("A categoria é obrigatória")]
    MissingCategory,
}

/// Check a draft against the catalog rules. Shared by the backend and the admin client.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), DraftError> {
    let name_chars = draft.name.trim().chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars) {
        return Err(DraftError::InvalidName);
    }
    if draft.price < Decimal::new(1, 2) {
        return Err(DraftError::InvalidPrice);
    }
    if draft.price > MAX_PRICE {
        return Err(DraftError::PriceTooHigh);
    }
    if draft.category.trim().is_empty() {
        return Err(DraftError::MissingCategory);
    }
    Ok(())
}
