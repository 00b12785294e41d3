use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::use_cases::decision::Decision;
use crate::shared::core::primitives::ProductId;

/// Removing is always accepted, whether or not the line exists.
pub fn decide_remove(cart: &Cart, product_id: ProductId) -> Decision {
    let mut next = cart.clone();
    next.remove(product_id);
    Decision::Accepted { cart: next }
}
