use crate::shared::core::primitives::Quantity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as submitted by the admin form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "estoque")]
    pub stock: Quantity,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "modelo", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
