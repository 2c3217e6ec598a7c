use clap::{Args, Subcommand};
use storefront_app::domain::{
    carts::models::CartId,
    orders::{OrdersService, models::OrderId},
    payments::models::PaymentId,
    users::models::UserId,
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Order a cart and print the new order id
    Place {
        #[arg(long)]
        user: i64,

        #[arg(long)]
        cart: i64,

        #[arg(long)]
        payment: i64,
    },

    /// Show a single order
    Get {
        #[arg(long)]
        order: i64,
    },

    /// List the user's orders
    List {
        #[arg(long)]
        user: i64,
    },
}

pub(crate) async fn run(command: OrderCommand, orders: &dyn OrdersService) -> Result<String, String> {
    match command.command {
        OrderSubcommand::Place {
            user,
            cart,
            payment,
        } => {
            let placed = orders
                .place_order(
                    UserId::from_i64(user),
                    CartId::from_i64(cart),
                    PaymentId::from_i64(payment),
                )
                .await
                .map_err(|error| format!("failed to place order: {error}"))?;

            to_json(&placed)
        }
        OrderSubcommand::Get { order } => {
            let found = orders
                .get_order(OrderId::from_i64(order))
                .await
                .map_err(|error| format!("failed to get order: {error}"))?;

            to_json(&found)
        }
        OrderSubcommand::List { user } => {
            let listed = orders
                .list_orders(UserId::from_i64(user))
                .await
                .map_err(|error| format!("failed to list orders: {error}"))?;

            to_json(&listed)
        }
    }
}
