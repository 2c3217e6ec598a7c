use clap::{Args, Subcommand};
use storefront_app::domain::offers::{OffersService, models::OfferId};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct OfferCommand {
    #[command(subcommand)]
    command: OfferSubcommand,
}

#[derive(Debug, Subcommand)]
enum OfferSubcommand {
    /// Show a single offer
    Get {
        #[arg(long)]
        offer: i64,
    },
}

pub(crate) async fn run(command: OfferCommand, offers: &dyn OffersService) -> Result<String, String> {
    match command.command {
        OfferSubcommand::Get { offer } => {
            let found = offers
                .get_offer(OfferId::from_i64(offer))
                .await
                .map_err(|error| format!("failed to get offer: {error}"))?;

            to_json(&found)
        }
    }
}
