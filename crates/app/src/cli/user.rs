use clap::{Args, Subcommand};
use storefront_app::domain::users::{
    UsersService,
    data::NewUser,
    models::{PasswordHash, UserId},
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Args)]
struct RegisterUserArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    /// Already-hashed credential to store
    #[arg(long, env = "STOREFRONT_PASSWORD_HASH", hide_env_values = true)]
    password_hash: String,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    mobile: Option<String>,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Register a new user
    Register(RegisterUserArgs),

    /// Show a single user
    Get {
        #[arg(long)]
        user: i64,
    },
}

pub(crate) async fn run(command: UserCommand, users: &dyn UsersService) -> Result<String, String> {
    match command.command {
        UserSubcommand::Register(args) => {
            let registered = users
                .register_user(NewUser {
                    first_name: args.first_name,
                    last_name: args.last_name,
                    email: args.email,
                    password_hash: PasswordHash::new(args.password_hash),
                    address: args.address,
                    mobile: args.mobile,
                })
                .await
                .map_err(|error| format!("failed to register user: {error}"))?;

            to_json(&registered)
        }
        UserSubcommand::Get { user } => {
            let found = users
                .get_user(UserId::from_i64(user))
                .await
                .map_err(|error| format!("failed to get user: {error}"))?;

            to_json(&found)
        }
    }
}
