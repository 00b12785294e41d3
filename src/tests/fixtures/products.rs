// Builder for catalog products used across unit tests.

use crate::modules::catalog::core::product::Product;
use crate::shared::core::primitives::{ProductId, Quantity};
use rust_decimal::Decimal;

pub struct ProductBuilder {
    inner: Product,
}

#[allow(dead_code)]
impl ProductBuilder {
    pub fn new(id: ProductId) -> Self {
        Self {
            inner: Product {
                id,
                name: format!("Produto {id}"),
                description: None,
                price: Decimal::new(200, 2),
                stock: 5,
                category: None,
                sku: None,
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
        self.inner.category = Some(v.into());
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}

#[cfg(test)]
mod product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_two_real_product_with_five_in_stock() {
        let product = ProductBuilder::new(1).build();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Produto 1");
        assert_eq!(product.price, Decimal::new(2, 0));
        assert_eq!(product.stock, 5);
    }
}
