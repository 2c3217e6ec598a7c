use clap::{Args, Subcommand};
use storefront_app::domain::categories::{CategoriesService, data::NewCategory};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    /// List every category
    List,

    /// Create a category/subcategory pair
    Create {
        #[arg(long)]
        category: String,

        #[arg(long)]
        subcategory: String,
    },
}

pub(crate) async fn run(
    command: CategoryCommand,
    categories: &dyn CategoriesService,
) -> Result<String, String> {
    match command.command {
        CategorySubcommand::List => {
            let listed = categories
                .list_categories()
                .await
                .map_err(|error| format!("failed to list categories: {error}"))?;

            to_json(&listed)
        }
        CategorySubcommand::Create {
            category,
            subcategory,
        } => {
            let created = categories
                .create_category(NewCategory {
                    category,
                    subcategory,
                })
                .await
                .map_err(|error| format!("failed to create category: {error}"))?;

            to_json(&created)
        }
    }
}
