//! Registration endpoint - decodes input and maps outcomes to payloads.
//!
//! Transport-agnostic: callers hand in a decoded request (or raw JSON) and
//! get back a serializable response. The CLI is the only transport wired up.

mod register;

pub use register::{RegisterRequest, RegistrationEndpoint, RegistrationResponse};
