//! Money calculation utilities using rust_decimal for precision
//!
//! Prices arrive and are stored as `f64`; every sum and conversion is done in
//! `Decimal` and only turned back into `f64` at the edge.

use std::str::FromStr;

use rust_decimal::prelude::*;

/// 金额保留 2 位小数
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed menu price per item
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed payment amount
pub const MAX_PAYMENT_AMOUNT: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
///
/// 按 f64 的最短十进制表示转换，`12.335` 得到精确的 `12.335`。
/// NaN/Infinity 返回 None
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// 2 位小数，0.5 远离零舍入
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Exact sum of f64 amounts; non-finite values are skipped with an error log
///
/// 溢出 `Decimal` 范围时返回 None
pub fn sum(values: impl IntoIterator<Item = f64>) -> Option<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, |total, v| match to_decimal(v) {
        Some(d) => total.checked_add(d),
        None => {
            tracing::error!(value = ?v, "Non-finite amount in monetary sum, skipped");
            Some(total)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_is_exact() {
        assert_eq!(to_decimal(12.335), Some(Decimal::new(12335, 3)));
        assert_eq!(to_decimal(0.1), Some(Decimal::new(1, 1)));
        assert_eq!(to_decimal(f64::NAN), None);
        assert_eq!(to_decimal(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        assert_eq!(round_money(Decimal::new(5, 3)), Decimal::new(1, 2));
        // 0.004 should round down to 0.00
        assert_eq!(round_money(Decimal::new(4, 3)), Decimal::ZERO);
        assert_eq!(round_money(Decimal::new(-5, 3)), Decimal::new(-1, 2));
    }

    #[test]
    fn test_sum_avoids_float_drift() {
        // 0.1 + 0.2 in f64 is 0.30000000000000004
        assert_eq!(sum([0.1, 0.2]), Some(Decimal::new(3, 1)));
        assert_eq!(sum([12.335, 12.335, 12.335]).map(to_f64), Some(37.01));
        assert_eq!(sum([1.5, f64::NAN, 2.5]), Some(Decimal::new(4, 0)));
        assert_eq!(sum(Vec::<f64>::new()), Some(Decimal::ZERO));
    }

    #[test]
    fn test_sum_overflow_returns_none() {
        assert_eq!(sum([5e28, 5e28]), None);
        assert!(sum([5e28]).is_some());
    }
}
