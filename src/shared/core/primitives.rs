// Primitive value types shared by the catalog, cart and order modules.
//
// Purpose
// - Name the identifiers and quantities once so every module agrees on their width.
// - Keep currency arithmetic in one place (decimal, two places, BRL display).

use rust_decimal::Decimal;

pub type ProductId = u64;
pub type OrderId = u64;
pub type Quantity = u32;

/// Round a currency amount to cents.
///
/// Uses banker's rounding, the same rule the backend applied to order totals.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

/// Format an amount the way the storefront shows prices, e.g. `R$ 32.90`.
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {:.2}", round_money(amount))
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::new(3290, 2), "R$ 32.90")]
    #[case(Decimal::new(25, 1), "R$ 2.50")]
    #[case(Decimal::ZERO, "R$ 0.00")]
    #[case(Decimal::new(68_225, 3), "R$ 68.22")]
    fn it_should_format_amounts_as_brl(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_brl(amount), expected);
    }

    #[rstest]
    fn it_should_round_half_to_even() {
        assert_eq!(round_money(Decimal::new(1_005, 3)), Decimal::new(100, 2));
        assert_eq!(round_money(Decimal::new(1_015, 3)), Decimal::new(102, 2));
    }
}
