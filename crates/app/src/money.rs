//! Monetary amounts
//!
//! Prices and payments are stored in `NUMERIC(12, 2)` columns, so every amount
//! is checked against that shape before it reaches the database. Values that
//! would be rounded on insert are rejected instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// Decimal places kept by amount columns.
pub const AMOUNT_SCALE: u32 = 2;

/// Digits before the decimal point kept by amount columns.
const AMOUNT_INTEGER_DIGITS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("{}", self.as_str())]
    Negative,

    #[error("{}", self.as_str())]
    NotPositive,

    #[error("{}", self.as_str())]
    TooPrecise,

    #[error("{}", self.as_str())]
    TooLarge,
}

impl AmountError {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "amount must not be negative",
            Self::NotPositive => "amount must be greater than zero",
            Self::TooPrecise => "amount has more than two decimal places",
            Self::TooLarge => "amount is too large",
        }
    }
}

/// Validate a catalog price: zero is allowed, negative values are not.
///
/// # Errors
///
/// Returns an error when the price is negative or not storable.
pub fn ensure_price(price: Decimal) -> Result<Decimal, AmountError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AmountError::Negative);
    }

    ensure_storable(price)
}

/// Validate a payment amount, which must be strictly positive.
///
/// # Errors
///
/// Returns an error when the amount is zero, negative or not storable.
pub fn ensure_payment_amount(amount: Decimal) -> Result<Decimal, AmountError> {
    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }

    ensure_storable(amount)
}

fn ensure_storable(amount: Decimal) -> Result<Decimal, AmountError> {
    let normalized = amount.normalize();

    if normalized.scale() > AMOUNT_SCALE {
        return Err(AmountError::TooPrecise);
    }

    let limit = Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS));

    if normalized.abs() >= limit {
        return Err(AmountError::TooLarge);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("test decimal should parse")
    }

    #[test]
    fn price_accepts_zero_and_cents() {
        assert_eq!(ensure_price(Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(ensure_price(dec("19.99")), Ok(dec("19.99")));
    }

    #[test]
    fn price_rejects_negative() {
        assert_eq!(ensure_price(dec("-0.01")), Err(AmountError::Negative));
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision() {
        assert_eq!(ensure_price(dec("5.5000")), Ok(dec("5.5000")));
        assert_eq!(ensure_price(dec("5.555")), Err(AmountError::TooPrecise));
    }

    #[test]
    fn payment_amount_must_be_positive() {
        assert_eq!(
            ensure_payment_amount(Decimal::ZERO),
            Err(AmountError::NotPositive)
        );
        assert_eq!(
            ensure_payment_amount(dec("-10")),
            Err(AmountError::NotPositive)
        );
        assert_eq!(ensure_payment_amount(dec("0.01")), Ok(dec("0.01")));
    }

    #[test]
    fn amounts_beyond_column_range_are_rejected() {
        assert_eq!(
            ensure_price(dec("9999999999.99")),
            Ok(dec("9999999999.99"))
        );
        assert_eq!(ensure_price(dec("10000000000")), Err(AmountError::TooLarge));
    }

    #[test]
    fn messages_match_display() {
        for error in [
            AmountError::Negative,
            AmountError::NotPositive,
            AmountError::TooPrecise,
            AmountError::TooLarge,
        ] {
            assert_eq!(error.as_str(), error.to_string());
        }
    }
}
