//! Application services - registration use case and its read model.

mod account_view;
mod registration_service;

pub use account_view::AccountView;
pub use registration_service::{Registrar, RegistrationService};
