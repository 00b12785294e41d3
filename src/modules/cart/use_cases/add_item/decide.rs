use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::use_cases::decision::{DecideError, Decision};
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::shared::core::primitives::{ProductId, Quantity};

/// Add `delta` units of a product, never past its stock.
///
/// An existing line is clamped to the stock and rejected only when it is already there.
/// A new line is rejected outright when `delta` alone exceeds the stock.
pub fn decide_add(
    cart: &Cart,
    catalog: &CatalogSnapshot,
    product_id: ProductId,
    delta: Quantity,
) -> Decision {
    if delta == 0 {
        return Decision::Rejected {
            reason: DecideError::ZeroQuantity,
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

    let quantity = match cart.line(product_id) {
        Some(line) => {
            let next = line.quantity.saturating_add(delta).min(product.stock);
            if next == line.quantity {
                return Decision::Rejected {
                    reason: DecideError::AtStockCeiling(product_id),
                };
            }
            next
        }
        None if delta > product.stock => {
            return Decision::Rejected {
                reason: DecideError::ExceedsStock {
                    product_id,
                    requested: delta,
                    stock: product.stock,
                },
            };
        }
        None => delta,
    };

    let mut next = cart.clone();
    next.set(product_id, quantity);
    Decision::Accepted { cart: next }
}
