use crate::modules::catalog::adapters::outbound::product_repository::StockReservation;
use crate::shared::core::primitives::ProductId;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Carrinho vazio")]
    EmptyCart,

    #[error("Produto id {0} não encontrado")]
    ProductNotFound(ProductId),

    #[error("Estoque insuficiente para {name}")]
    InsufficientStock { product_id: ProductId, name: String },

    #[error("Quantidade inválida para o produto id {0}")]
    InvalidQuantity(ProductId),

    #[error("Valor do pedido excede o limite permitido")]
    TotalOutOfRange,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        reservations: Vec<StockReservation>,
        total_final: Decimal,
    },
    Rejected {
        reason: DecideError,
    },
}
