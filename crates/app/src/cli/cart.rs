use clap::{Args, Subcommand};
use storefront_app::domain::{
    carts::{CartsService, models::CartId},
    products::models::ProductId,
    users::models::UserId,
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the user's open cart, or `null` when there is none
    Active {
        #[arg(long)]
        user: i64,
    },

    /// Show a single cart
    Show {
        #[arg(long)]
        cart: i64,
    },

    /// List the user's ordered carts
    History {
        #[arg(long)]
        user: i64,
    },

    /// Add a product to the user's open cart, or to `--cart` when given
    Add {
        #[arg(long)]
        user: i64,

        #[arg(long)]
        product: i64,

        #[arg(long)]
        cart: Option<i64>,
    },
}

pub(crate) async fn run(command: CartCommand, carts: &dyn CartsService) -> Result<String, String> {
    match command.command {
        CartSubcommand::Active { user } => {
            let active = carts
                .get_active_cart(UserId::from_i64(user))
                .await
                .map_err(|error| format!("failed to get active cart: {error}"))?;

            to_json(&active)
        }
        CartSubcommand::Show { cart } => {
            let found = carts
                .get_cart(CartId::from_i64(cart))
                .await
                .map_err(|error| format!("failed to get cart: {error}"))?;

            to_json(&found)
        }
        CartSubcommand::History { user } => {
            let previous = carts
                .get_previous_carts(UserId::from_i64(user))
                .await
                .map_err(|error| format!("failed to list previous carts: {error}"))?;

            to_json(&previous)
        }
        CartSubcommand::Add {
            user,
            product,
            cart,
        } => {
            let user = UserId::from_i64(user);
            let product = ProductId::from_i64(product);

            let added = match cart {
                Some(cart) => {
                    carts
                        .add_item_to_cart(user, CartId::from_i64(cart), product)
                        .await
                }
                None => carts.add_item(user, product).await,
            }
            .map_err(|error| format!("failed to add item: {error}"))?;

            to_json(&added)
        }
    }
}
