//! Storefront Domain Concerns

pub mod carts;
pub mod categories;
pub mod offers;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod users;
