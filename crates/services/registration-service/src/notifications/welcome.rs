//! Welcome notification handler.
//!
//! Delivery is simulated: the rendered message is logged instead of sent.
//! A configurable share of deliveries fails to mimic a flaky mail server;
//! such failures are logged here and never reported back to the bus.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use serde::Serialize;

use common::{EventHandler, HandlerError, HandlerResult};
use domain::{AccountRegistered, DomainEvent, TIMESTAMP_FORMAT};

/// Subject line of every welcome message
pub const WELCOME_SUBJECT: &str = "Welcome to Our Platform!";

/// Rendered welcome message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeMessage {
    /// Recipient email address
    pub to: String,
    /// Recipient display name
    pub name: String,
    /// Email subject line
    pub subject: String,
    /// Plain text body
    pub body: String,
}

impl WelcomeMessage {
    /// Render the welcome message for a registration.
    pub fn for_registration(event: &AccountRegistered) -> Self {
        let account = event.account();
        let name = account.name().to_string();
        let sent_at = event.occurred_at().format(TIMESTAMP_FORMAT);

        Self {
            to: account.email().to_string(),
            body: format!(
                "Hi {name},\n\n\
                 Thank you for registering on our platform. \
                 We're excited to have you with us!\n\n\
                 Sent at: {sent_at}"
            ),
            name,
            subject: WELCOME_SUBJECT.to_string(),
        }
    }
}

/// Sends (simulated) welcome messages for `AccountRegistered` events.
#[derive(Debug, Clone)]
pub struct WelcomeNotifier {
    failure_percent: u8,
}

impl WelcomeNotifier {
    /// Create a notifier whose simulated deliveries fail `failure_percent`% of the time.
    pub fn new(failure_percent: u8) -> Self {
        Self {
            failure_percent: failure_percent.min(100),
        }
    }

    /// Notifier whose deliveries always succeed
    pub fn reliable() -> Self {
        Self::new(0)
    }

    fn deliver(&self, message: &WelcomeMessage) -> HandlerResult {
        let roll = OsRng.next_u32() % 100;
        if roll < u32::from(self.failure_percent) {
            return Err(HandlerError::new("Simulated email server error"));
        }

        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "Simulating email to: {} ({})\n{}",
            message.name,
            message.to,
            message.body
        );
        Ok(())
    }
}

impl EventHandler for WelcomeNotifier {
    fn name(&self) -> &str {
        "welcome-notifier"
    }

    fn handle(&self, event: &DomainEvent) -> HandlerResult {
        let DomainEvent::AccountRegistered(registered) = event;
        let message = WelcomeMessage::for_registration(registered);
        let sent_at = registered.occurred_at().format(TIMESTAMP_FORMAT).to_string();

        match self.deliver(&message) {
            Ok(()) => tracing::info!(
                to = %message.to,
                sent_at = %sent_at,
                "Welcome email successfully simulated for {}",
                message.name
            ),
            Err(e) => tracing::warn!(
                to = %message.to,
                error = %e,
                "Failed to simulate welcome email for {}",
                message.name
            ),
        }

        Ok(())
    }
}
