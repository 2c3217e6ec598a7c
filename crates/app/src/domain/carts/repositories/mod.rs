//! Cart Repositories

mod carts;
mod items;

pub(crate) use carts::{CartRecord, PgCartsRepository};
pub(crate) use items::PgCartItemsRepository;
