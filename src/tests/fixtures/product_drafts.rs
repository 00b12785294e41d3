// Builder for admin product drafts.

use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::shared::core::primitives::Quantity;
use rust_decimal::Decimal;

pub struct ProductDraftBuilder {
    inner: ProductDraft,
}

impl Default for ProductDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: ProductDraft {
                name: "Caneta Esferográfica Azul".to_string(),
                description: Some("Caneta azul, escrita macia.".to_string()),
                price: Decimal::new(250, 2),
                stock: 100,
                category: "Canetas".to_string(),
                sku: Some("CAN-AZUL".to_string()),
                model: None,
                image: None,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn price(mut self, v: Decimal) -> Self {
        self.inner.price = v;
        self
    }

    pub fn stock(mut self, v: Quantity) -> Self {
        self.inner.stock = v;
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn build(self) -> ProductDraft {
        self.inner
    }
}
