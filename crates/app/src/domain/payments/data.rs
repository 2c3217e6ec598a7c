//! Payment Data

use rust_decimal::Decimal;

use crate::domain::{payments::models::PaymentMethodId, users::models::UserId};

/// New Payment
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub user: UserId,
    pub amount: Decimal,
    pub method: PaymentMethodId,
}
