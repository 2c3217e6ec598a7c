//! Storefront configuration
//!
//! Settings are `clap` argument groups, so every binary can flatten the ones
//! it needs into its own parser. Each setting can also come from the
//! environment, including a `.env` file loaded before parsing.

mod db;
mod logging;

pub use db::DatabaseConfig;
pub use logging::{LogFormat, LoggingConfig};
