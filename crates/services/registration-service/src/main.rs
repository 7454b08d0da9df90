//! Registration Service - CLI for account registration.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registration_service_lib::config::RegistrationServiceConfig;
use registration_service_lib::endpoint::RegisterRequest;
use registration_service_lib::{MigrateAction, RegisterInput};

#[derive(Parser)]
#[command(name = "registration-service")]
#[command(about = "Account registration service")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account and print the response payload
    Register {
        /// Display name
        #[arg(long, required_unless_present = "json")]
        name: Option<String>,
        /// Email address
        #[arg(long, required_unless_present = "json")]
        email: Option<String>,
        /// Plaintext password
        #[arg(long, env = "REGISTRATION_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Raw JSON request body instead of individual fields
        #[arg(long, conflicts_with_all = ["name", "email", "password"])]
        json: Option<String>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RegistrationServiceConfig::from_env();

    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            json,
        } => {
            let input = match json {
                Some(body) => RegisterInput::Json(body),
                None => RegisterInput::Fields(RegisterRequest {
                    name: name.unwrap_or_default(),
                    email: email.unwrap_or_default(),
                    password: password.unwrap_or_default(),
                }),
            };

            let response = registration_service_lib::run_register(&config, input).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);

            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            registration_service_lib::run_migrations(&config.database, migrate_action).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool, level: &str) {
    let filter = if verbose { "debug" } else { level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
