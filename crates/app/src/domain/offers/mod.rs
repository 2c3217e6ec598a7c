//! Offers

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::OffersServiceError;
pub use service::*;
