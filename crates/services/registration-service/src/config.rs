//! Registration service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Default chance, in percent, that a simulated welcome message fails
pub const DEFAULT_WELCOME_FAILURE_PERCENT: u8 = 10;

/// Registration service configuration.
#[derive(Debug, Clone)]
pub struct RegistrationServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Account store connection settings
    pub database: DatabaseConfig,
    /// Simulated welcome delivery failure rate (0..=100)
    pub welcome_failure_percent: u8,
}

impl RegistrationServiceConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                log_level: env::var("RUST_LOG").unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: env::var("REGISTRATION_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_var("REGISTRATION_DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("REGISTRATION_DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            welcome_failure_percent: parse_var::<u8>("WELCOME_FAILURE_PERCENT")
                .map(|p| p.min(100))
                .unwrap_or(defaults.welcome_failure_percent),
        }
    }
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "registration-service".to_string(),
                log_level: "info".to_string(),
            },
            database: DatabaseConfig::default(),
            welcome_failure_percent: DEFAULT_WELCOME_FAILURE_PERCENT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
