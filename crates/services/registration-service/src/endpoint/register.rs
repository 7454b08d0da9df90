//! Registration request/response handling.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::service::{AccountView, RegistrationService};

/// Error type reported when the request itself is unusable
pub const INVALID_ARGUMENT: &str = "InvalidArgument";

const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, email, or password";

/// Registration request payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account display name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Account email address
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response payload, tagged by `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RegistrationResponse {
    Success {
        data: AccountView,
    },
    Error {
        message: String,
        exception_type: String,
    },
}

impl RegistrationResponse {
    fn error(message: impl Into<String>, exception_type: impl Into<String>) -> Self {
        RegistrationResponse::Error {
            message: message.into(),
            exception_type: exception_type.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationResponse::Success { .. })
    }
}

/// Entry point adapting raw requests to the registration service.
pub struct RegistrationEndpoint {
    service: Arc<dyn RegistrationService>,
}

impl RegistrationEndpoint {
    pub fn new(service: Arc<dyn RegistrationService>) -> Self {
        Self { service }
    }

    /// Decode a JSON request body and handle it.
    pub async fn handle_json(&self, body: &str) -> RegistrationResponse {
        match serde_json::from_str::<RegisterRequest>(body) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed registration payload");
                RegistrationResponse::error(format!("Malformed request: {}", e), INVALID_ARGUMENT)
            }
        }
    }

    /// Handle a decoded registration request.
    pub async fn handle(&self, request: RegisterRequest) -> RegistrationResponse {
        if request.validate().is_err() {
            return RegistrationResponse::error(MISSING_FIELDS_MESSAGE, INVALID_ARGUMENT);
        }

        match self
            .service
            .register(&request.name, &request.email, &request.password)
            .await
        {
            Ok(view) => RegistrationResponse::Success { data: view },
            Err(e) => RegistrationResponse::error(e.user_message(), e.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use common::{AppError, AppResult, StoreError};
    use domain::DomainError;

    /// Stub service returning a canned outcome per email
    struct StubService;

    #[async_trait]
    impl RegistrationService for StubService {
        async fn register(&self, name: &str, email: &str, _password: &str) -> AppResult<AccountView> {
            match email {
                "taken@example.com" => Err(AppError::duplicate(email)),
                "bad" => Err(DomainError::invalid_email("Invalid email format.").into()),
                "down@example.com" => Err(StoreError::corrupt("row 7").into()),
                _ => Ok(AccountView {
                    id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
                }),
            }
        }
    }

    fn endpoint() -> RegistrationEndpoint {
        RegistrationEndpoint::new(Arc::new(StubService))
    }

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "John Doe".to_string(),
            email: email.to_string(),
            password: "StrongP@ss123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_payload() {
        let response = endpoint().handle(request("john@example.com")).await;
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["name"], "John Doe");
        assert_eq!(json["data"]["email"], "john@example.com");
        assert_eq!(json["data"]["createdAt"], "2024-01-02 03:04:05");
    }

    #[tokio::test]
    async fn test_duplicate_payload() {
        let response = endpoint().handle(request("taken@example.com")).await;
        assert_eq!(
            response,
            RegistrationResponse::error("User with this email already exists", "DuplicateAccount")
        );
    }

    #[tokio::test]
    async fn test_validation_payload() {
        let json = serde_json::to_value(endpoint().handle(request("bad")).await).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Invalid email format.");
        assert_eq!(json["exception_type"], "InvalidEmail");
    }

    #[tokio::test]
    async fn test_persistence_payload_hides_detail() {
        let response = endpoint().handle(request("down@example.com")).await;
        assert_eq!(
            response,
            RegistrationResponse::error("A database error occurred", "PersistenceFailure")
        );
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let response = endpoint()
            .handle_json(r#"{"name": "John Doe", "email": "john@example.com"}"#)
            .await;
        assert_eq!(
            response,
            RegistrationResponse::error(MISSING_FIELDS_MESSAGE, INVALID_ARGUMENT)
        );

        let response = endpoint()
            .handle_json(r#"{"name": "", "email": "john@example.com", "password": "x"}"#)
            .await;
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let response = endpoint().handle_json("{not json").await;
        match response {
            RegistrationResponse::Error { exception_type, .. } => {
                assert_eq!(exception_type, INVALID_ARGUMENT)
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_json_success() {
        let response = endpoint()
            .handle_json(
                r#"{"name": "John Doe", "email": "john@example.com", "password": "StrongP@ss123"}"#,
            )
            .await;
        assert!(response.is_success());
    }
}
