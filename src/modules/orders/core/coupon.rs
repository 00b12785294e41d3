use rust_decimal::Decimal;

pub const STUDENT_COUPON: &str = "ALUNO10";

/// Fraction of the order total taken off for a coupon code.
///
/// Codes are matched case-insensitively. Unknown codes give no discount.
pub fn discount_rate(coupon: Option<&str>) -> Decimal {
    match coupon.map(str::trim) {
        Some(code) if code.eq_ignore_ascii_case(STUDENT_COUPON) => Decimal::new(10, 2),
        _ => Decimal::ZERO,
    }
}
