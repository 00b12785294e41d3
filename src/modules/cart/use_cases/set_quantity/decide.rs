use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::use_cases::decision::{DecideError, Decision};
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::shared::core::primitives::{ProductId, Quantity};

/// Overwrite the quantity of an existing line, clamped into `1..=stock`.
pub fn decide_set_quantity(
    cart: &Cart,
    catalog: &CatalogSnapshot,
    product_id: ProductId,
    quantity: Quantity,
) -> Decision {
    if cart.line(product_id).is_none() {
        return Decision::Rejected {
            reason: DecideError::NotInCart(product_id),
        };
    }
    let Some(product) = catalog.get(product_id) else {
        return Decision::Rejected {
            reason: DecideError::UnknownProduct(product_id),
        };
    };
    if !product.is_in_stock() {
        return Decision::Rejected {
            reason: DecideError::OutOfStock(product_id),
        };
    }

    let mut next = cart.clone();
    next.set(product_id, quantity.clamp(1, product.stock));
    Decision::Accepted { cart: next }
}

#[cfg(test)]
mod decide_set_quantity_tests {
    use super::*;
    use crate::modules::cart::core::cart::CartLine;
    use crate::tests::fixtures::products::ProductBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Cart, CatalogSnapshot) {
        let cart = Cart::from_lines([
            CartLine {
                product_id: 1,
                quantity: 2,
            },
            CartLine {
                product_id: 2,
                quantity: 1,
            },
            CartLine {
                product_id: 3,
                quantity: 1,
            },
        ]);
        let catalog = CatalogSnapshot::from_products(vec![
            ProductBuilder::new(1).stock(5).build(),
            ProductBuilder::new(2).stock(0).build(),
        ]);
        (cart, catalog)
    }

    #[rstest]
    #[case(4, 4)]
    #[case(0, 1)]
    #[case(99, 5)]
    fn it_should_clamp_into_the_stock_range(
        before_each: (Cart, CatalogSnapshot),
        #[case] requested: Quantity,
        #[case] expected: Quantity,
    ) {
        let (cart, catalog) = before_each;
        let Decision::Accepted { cart } = decide_set_quantity(&cart, &catalog, 1, requested) else {
            panic!("expected the quantity to be accepted");
        };
        assert_eq!(cart.quantity_of(1), expected);
        assert_eq!(cart.lines()[0].product_id, 1);
    }

    #[rstest]
    #[case(7, DecideError::NotInCart(7))]
    #[case(3, DecideError::UnknownProduct(3))]
    #[case(2, DecideError::OutOfStock(2))]
    fn it_should_reject_lines_it_cannot_bound(
        before_each: (Cart, CatalogSnapshot),
        #[case] product_id: ProductId,
        #[case] reason: DecideError,
    ) {
        let (cart, catalog) = before_each;
        assert_eq!(
            decide_set_quantity(&cart, &catalog, product_id, 1),
            Decision::Rejected { reason }
        );
    }
}
