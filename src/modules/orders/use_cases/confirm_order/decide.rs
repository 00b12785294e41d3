use crate::modules::catalog::adapters::outbound::product_repository::StockReservation;
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::modules::orders::core::coupon::discount_rate;
use crate::modules::orders::core::order::CheckoutRequest;
use crate::modules::orders::use_cases::confirm_order::decision::{DecideError, Decision};
use crate::shared::core::primitives::round_money;
use rust_decimal::Decimal;

/// Price an order against the catalog and decide which stock to take.
///
/// Lines for the same product are merged before the stock check, keeping the position of
/// the first one. Lines are checked in order and the first failing line decides the error.
pub fn decide_confirm(catalog: &CatalogSnapshot, request: &CheckoutRequest) -> Decision {
    if request.items.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyCart,
        };
    }

    let mut reservations: Vec<StockReservation> = Vec::with_capacity(request.items.len());
    for item in &request.items {
        if item.quantity == 0 {
            return Decision::Rejected {
                reason: DecideError::InvalidQuantity(item.product_id),
            };
        }
        match reservations
            .iter_mut()
            .find(|r| r.product_id == item.product_id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => reservations.push(StockReservation {
                product_id: item.product_id,
                quantity: item.quantity,
            }),
        }
    }

    let mut total = Decimal::ZERO;
    for reservation in &reservations {
        let Some(product) = catalog.get(reservation.product_id) else {
            return Decision::Rejected {
                reason: DecideError::ProductNotFound(reservation.product_id),
            };
        };
        if product.stock < reservation.quantity {
            return Decision::Rejected {
                reason: DecideError::InsufficientStock {
                    product_id: product.id,
                    name: product.name.clone(),
                },
            };
        }
        let Some(next) = product
            .price
            .checked_mul(Decimal::from(reservation.quantity))
            .and_then(|subtotal| total.checked_add(subtotal))
        else {
            return Decision::Rejected {
                reason: DecideError::TotalOutOfRange,
            };
        };
        total = next;
    }

    let Some(total_final) = total
        .checked_mul(discount_rate(request.coupon.as_deref()))
        .and_then(|discount| total.checked_sub(discount))
    else {
        return Decision::Rejected {
            reason: DecideError::TotalOutOfRange,
        };
    };
    Decision::Accepted {
        reservations,
        total_final: round_money(total_final),
    }
}
