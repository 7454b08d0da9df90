//! Common building blocks shared by services.
//!
//! This crate provides:
//! - The in-process event bus
//! - Unified error taxonomy surfaced to callers
//! - Configuration structures

pub mod bus;
pub mod config;
pub mod error;

pub use bus::{EventBus, EventHandler, HandlerError, HandlerResult, PublishOutcome};
pub use config::*;
pub use error::{AppError, AppResult, StoreError, StoreResult};
