//! Registration Service Library
//!
//! Registers new accounts: validates identity and credential data, enforces
//! one account per email, persists the account and notifies subscribers.
//! The binary in `main.rs` is a thin CLI over [`run_register`] and
//! [`run_migrations`].

pub mod config;
pub mod endpoint;
pub mod infra;
pub mod notifications;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::{DatabaseConfig, EventBus};
use domain::EventKind;
use tracing::info;

use crate::config::RegistrationServiceConfig;
use crate::endpoint::{RegisterRequest, RegistrationEndpoint, RegistrationResponse};
use crate::infra::Database;
use crate::notifications::WelcomeNotifier;
use crate::repository::SeaOrmAccountStore;
use crate::service::Registrar;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Registration input accepted by the CLI.
#[derive(Debug, Clone)]
pub enum RegisterInput {
    Fields(RegisterRequest),
    Json(String),
}

/// Build the event bus with every startup subscription in place.
pub fn build_event_bus(config: &RegistrationServiceConfig) -> EventBus {
    let mut bus = EventBus::new();
    bus.subscribe(
        EventKind::AccountRegistered,
        Arc::new(WelcomeNotifier::new(config.welcome_failure_percent)),
    );
    bus
}

/// Composition root: connect the store and wire service and endpoint.
pub async fn build_endpoint(
    config: &RegistrationServiceConfig,
) -> Result<RegistrationEndpoint, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    let store = Arc::new(SeaOrmAccountStore::new(db.get_connection()));
    let events = Arc::new(build_event_bus(config));
    let service = Arc::new(Registrar::new(store, events));

    Ok(RegistrationEndpoint::new(service))
}

/// Register one account and return the response payload.
pub async fn run_register(
    config: &RegistrationServiceConfig,
    input: RegisterInput,
) -> Result<RegistrationResponse, Box<dyn std::error::Error>> {
    let endpoint = build_endpoint(config).await?;

    let response = match input {
        RegisterInput::Fields(request) => endpoint.handle(request).await,
        RegisterInput::Json(body) => endpoint.handle_json(&body).await,
    };

    Ok(response)
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    database: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
