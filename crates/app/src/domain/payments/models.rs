//! Payment Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{domain::users::models::UserId, ids::TypedId};

/// Payment Method Id
pub type PaymentMethodId = TypedId<PaymentMethod>;

/// Payment Id
pub type PaymentId = TypedId<Payment>;

/// A way of paying, such as a card scheme or bank transfer.
///
/// Methods that are not `available` carry the `reason` shown to shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub kind: String,
    pub provider: String,
    pub available: bool,
    pub reason: Option<String>,
}

/// Payment Model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: PaymentId,
    pub user_id: UserId,
    pub amount: Decimal,
    pub payment_method: PaymentMethodId,
    pub created_at: Timestamp,
}
