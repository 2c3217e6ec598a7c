use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_app::domain::{
    payments::{PaymentsService, data::NewPayment, models::PaymentMethodId},
    users::models::UserId,
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct PaymentCommand {
    #[command(subcommand)]
    command: PaymentSubcommand,
}

#[derive(Debug, Subcommand)]
enum PaymentSubcommand {
    /// List payment methods
    Methods,

    /// Record a payment and print its id
    Record {
        #[arg(long)]
        user: i64,

        #[arg(long)]
        amount: Decimal,

        /// Payment method id
        #[arg(long)]
        method: i64,
    },
}

pub(crate) async fn run(
    command: PaymentCommand,
    payments: &dyn PaymentsService,
) -> Result<String, String> {
    match command.command {
        PaymentSubcommand::Methods => {
            let methods = payments
                .list_payment_methods()
                .await
                .map_err(|error| format!("failed to list payment methods: {error}"))?;

            to_json(&methods)
        }
        PaymentSubcommand::Record {
            user,
            amount,
            method,
        } => {
            let recorded = payments
                .record_payment(NewPayment {
                    user: UserId::from_i64(user),
                    amount,
                    method: PaymentMethodId::from_i64(method),
                })
                .await
                .map_err(|error| format!("failed to record payment: {error}"))?;

            to_json(&recorded)
        }
    }
}
