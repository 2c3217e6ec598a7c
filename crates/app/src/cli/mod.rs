use clap::{Parser, Subcommand};
use serde::Serialize;

use storefront_app::{
    config::{DatabaseConfig, LoggingConfig},
    context::AppContext,
    observability,
};

mod cart;
mod category;
mod db;
mod offer;
mod order;
mod payment;
mod product;
mod user;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Application database settings.
    #[command(flatten)]
    database: DatabaseConfig,

    /// Logging output settings.
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Category(category::CategoryCommand),
    Product(product::ProductCommand),
    User(user::UserCommand),
    Cart(cart::CartCommand),
    Payment(payment::PaymentCommand),
    Order(order::OrderCommand),
    Offer(offer::OfferCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init_logging(&self.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let app = AppContext::connect(&self.database)
            .await
            .map_err(|error| error.to_string())?;

        let output = match self.command {
            Commands::Db(command) => db::run(command, app.db.pool()).await?,
            Commands::Category(command) => category::run(command, app.categories.as_ref()).await?,
            Commands::Product(command) => product::run(command, app.products.as_ref()).await?,
            Commands::User(command) => user::run(command, app.users.as_ref()).await?,
            Commands::Cart(command) => cart::run(command, app.carts.as_ref()).await?,
            Commands::Payment(command) => payment::run(command, app.payments.as_ref()).await?,
            Commands::Order(command) => order::run(command, app.orders.as_ref()).await?,
            Commands::Offer(command) => offer::run(command, app.offers.as_ref()).await?,
        };

        println!("{output}");

        Ok(())
    }
}

/// Render a command result as pretty-printed JSON.
fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to serialise output: {error}"))
}
