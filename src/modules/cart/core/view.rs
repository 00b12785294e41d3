// Cart view: the cart joined with the catalog, ready for any front end.
//
// Lines whose product is missing from the catalog are left out and contribute nothing to
// the total. The item count covers every persisted line regardless.
// Amounts beyond the decimal range stop at `Decimal::MAX`.

use crate::modules::cart::core::cart::Cart;
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::shared::core::primitives::{ProductId, Quantity, format_brl};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: Quantity,
    pub stock: Quantity,
    pub subtotal: Decimal,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub item_count: u64,
}

impl CartView {
    pub fn project(cart: &Cart, catalog: &CatalogSnapshot) -> Self {
        let lines: Vec<CartLineView> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let product = catalog.get(line.product_id)?;
                Some(CartLineView {
                    product_id: product.id,
                    name: product.name.clone(),
                    unit_price: product.price,
                    quantity: line.quantity,
                    stock: product.stock,
                    subtotal: product.price.saturating_mul(Decimal::from(line.quantity)),
                    image: product.image.clone(),
                })
            })
            .collect();
        let total = lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.subtotal));
        Self {
            lines,
            total,
            item_count: cart.item_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Seu carrinho está vazio.");
        }
        for line in &self.lines {
            writeln!(
                f,
                "{:>4}  {} x{} ({} cada) = {}",
                line.product_id,
                line.name,
                line.quantity,
                format_brl(line.unit_price),
                format_brl(line.subtotal)
            )?;
        }
        writeln!(f, "Itens: {}", self.item_count)?;
        writeln!(f, "Total: {}", format_brl(self.total))
    }
}

#[cfg(test)]
mod cart_view_tests {
    use super::*;
    use crate::modules::cart::core::cart::CartLine;
    use crate::tests::fixtures::products::ProductBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> CatalogSnapshot {
        CatalogSnapshot::from_products(vec![
            ProductBuilder::new(1)
                .name("Caderno")
                .price(Decimal::new(1890, 2))
                .stock(10)
                .build(),
            ProductBuilder::new(4)
                .name("Caneta Azul")
                .price(Decimal::new(250, 2))
                .stock(40)
                .build(),
        ])
    }

    fn cart(lines: &[(u64, u32)]) -> Cart {
        Cart::from_lines(lines.iter().map(|&(product_id, quantity)| CartLine {
            product_id,
            quantity,
        }))
    }

    #[rstest]
    fn it_should_join_lines_with_the_catalog(before_each: CatalogSnapshot) {
        let view = CartView::project(&cart(&[(4, 3), (1, 1)]), &before_each);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].name, "Caneta Azul");
        assert_eq!(view.lines[0].subtotal, Decimal::new(750, 2));
        assert_eq!(view.total, Decimal::new(2640, 2));
        assert_eq!(view.item_count, 4);
    }

    #[rstest]
    fn it_should_skip_lines_missing_from_the_catalog(before_each: CatalogSnapshot) {
        let view = CartView::project(&cart(&[(1, 2), (99, 5)]), &before_each);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.total, Decimal::new(3780, 2));
        assert_eq!(view.item_count, 7);
    }

    #[rstest]
    fn it_should_stop_amounts_at_the_decimal_ceiling() {
        let catalog = CatalogSnapshot::from_products(vec![
            ProductBuilder::new(21).price(Decimal::MAX).stock(5).build(),
            ProductBuilder::new(22).price(Decimal::MAX).stock(5).build(),
        ]);
        let view = CartView::project(&cart(&[(21, 2), (22, 1)]), &catalog);
        assert_eq!(view.lines[0].subtotal, Decimal::MAX);
        assert_eq!(view.total, Decimal::MAX);
        assert_eq!(view.item_count, 3);
        assert!(view.to_string().contains("Total: R$ "));
    }

    #[rstest]
    fn it_should_render_an_empty_cart(before_each: CatalogSnapshot) {
        let view = CartView::project(&Cart::empty(), &before_each);
        assert_eq!(view.to_string(), "Seu carrinho está vazio.\n");
        assert_eq!(view.total, Decimal::ZERO);
    }

    #[rstest]
    fn it_should_render_lines_and_total(before_each: CatalogSnapshot) {
        let view = CartView::project(&cart(&[(4, 2)]), &before_each);
        let text = view.to_string();
        assert!(text.contains("Caneta Azul x2 (R$ 2.50 cada) = R$ 5.00"));
        assert!(text.ends_with("Total: R$ 5.00\n"));
    }
}
