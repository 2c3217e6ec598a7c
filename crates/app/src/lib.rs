//! Shared storefront domain and persistence modules.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod money;
pub mod observability;

#[cfg(test)]
mod test;
