use crate::modules::cart::core::cart::Cart;
use crate::shared::core::primitives::{ProductId, Quantity};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Produto {0} não encontrado no catálogo")]
    UnknownProduct(ProductId),

    #[error("Produto {0} sem estoque")]
    OutOfStock(ProductId),

    #[error("Quantidade solicitada ({requested}) maior que o estoque disponível ({stock})")]
    ExceedsStock {
        product_id: ProductId,
        requested: Quantity,
        stock: Quantity,
    },

    #[error("Quantidade máxima em estoque já atingida para o produto {0}")]
    AtStockCeiling(ProductId),

    #[error("A quantidade deve ser maior que zero")]
    ZeroQuantity,

    #[error("Produto {0} não está no carrinho")]
    NotInCart(ProductId),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { cart: Cart },
    Rejected { reason: DecideError },
}
