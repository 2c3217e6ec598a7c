use clap::{Args, Subcommand};
use sqlx::PgPool;
use storefront_app::database;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate,
}

pub(crate) async fn run(command: DbCommand, pool: &PgPool) -> Result<String, String> {
    match command.command {
        DbSubcommand::Migrate => {
            database::migrate(pool)
                .await
                .map_err(|error| format!("failed to run migrations: {error}"))?;

            Ok("migrations applied".to_string())
        }
    }
}
