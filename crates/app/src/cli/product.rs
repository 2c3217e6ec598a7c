use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_app::domain::products::{
    ProductsService,
    data::{ProductQuery, ProductUpdate},
    models::ProductId,
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Sample products of a category/subcategory
    List {
        #[arg(long)]
        category: String,

        #[arg(long)]
        subcategory: String,

        /// Maximum number of products to return
        #[arg(long, default_value_t = 10)]
        count: u32,
    },

    /// Show a single product
    Get {
        #[arg(long)]
        product: i64,
    },

    /// Replace the price and stock of a product
    Update {
        #[arg(long)]
        product: i64,

        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        quantity: u32,
    },
}

pub(crate) async fn run(
    command: ProductCommand,
    products: &dyn ProductsService,
) -> Result<String, String> {
    match command.command {
        ProductSubcommand::List {
            category,
            subcategory,
            count,
        } => {
            let listed = products
                .list_products(ProductQuery {
                    category,
                    subcategory,
                    count,
                })
                .await
                .map_err(|error| format!("failed to list products: {error}"))?;

            to_json(&listed)
        }
        ProductSubcommand::Get { product } => {
            let found = products
                .get_product(ProductId::from_i64(product))
                .await
                .map_err(|error| format!("failed to get product: {error}"))?;

            to_json(&found)
        }
        ProductSubcommand::Update {
            product,
            price,
            quantity,
        } => {
            let updated = products
                .update_product(
                    ProductId::from_i64(product),
                    ProductUpdate { price, quantity },
                )
                .await
                .map_err(|error| format!("failed to update product: {error}"))?;

            to_json(&updated)
        }
    }
}
