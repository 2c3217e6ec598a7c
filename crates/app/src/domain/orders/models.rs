//! Order Models

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{carts::models::CartId, payments::models::PaymentId, users::models::UserId},
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Model
///
/// Ties one ordered cart to the payment that settled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub cart_id: CartId,
    pub payment_id: PaymentId,
    pub created_at: Timestamp,
}
