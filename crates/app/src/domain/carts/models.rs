//! Cart Models

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{products::models::Product, users::models::User},
    ids::TypedId,
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Item Id
pub type CartItemId = TypedId<CartItem>;

/// Lifecycle of a cart. The only transition is `Open` to `Ordered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    Open,
    Ordered,
}

/// Cart Model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub id: CartId,
    pub user: User,
    pub ordered: bool,
    pub ordered_on: Option<Timestamp>,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
}

impl Cart {
    #[must_use]
    pub fn state(&self) -> CartState {
        if self.ordered {
            CartState::Ordered
        } else {
            CartState::Open
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state() == CartState::Open
    }
}

/// CartItem Model
///
/// Holds a full snapshot of the product as it was when the cart was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product: Product,
    pub added_at: Timestamp,
}
