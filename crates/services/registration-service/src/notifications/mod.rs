//! Event handlers that notify people about registrations.

mod welcome;

pub use welcome::{WelcomeMessage, WelcomeNotifier};
