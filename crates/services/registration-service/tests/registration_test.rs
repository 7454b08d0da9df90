//! Registration integration tests.
//!
//! These run the real SeaORM account store against an in-memory SQLite
//! database, wired the same way the binary wires it.

use std::sync::{Arc, Mutex};

use common::{AppError, DatabaseConfig, EventBus};
use domain::{Account, DomainEvent, EmailAddress, EventKind, Identity};

use registration_service_lib::config::RegistrationServiceConfig;
use registration_service_lib::endpoint::{RegisterRequest, RegistrationEndpoint};
use registration_service_lib::infra::Database;
use registration_service_lib::repository::{AccountStore, SeaOrmAccountStore};
use registration_service_lib::service::{RegistrationService, Registrar};

async fn store() -> Arc<SeaOrmAccountStore> {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Arc::new(SeaOrmAccountStore::new(db.get_connection()))
}

fn registrar(store: Arc<SeaOrmAccountStore>, bus: EventBus) -> Registrar {
    Registrar::new(store, Arc::new(bus))
}

fn is_uuid_v4(s: &str) -> bool {
    Identity::parse(s).is_ok() && s == s.to_lowercase()
}

#[tokio::test]
async fn test_register_end_to_end() {
    let store = store().await;
    let service = registrar(store.clone(), EventBus::new());

    let view = service
        .register("John Doe", "john@example.com", "StrongP@ss123")
        .await
        .unwrap();

    assert_eq!(view.name, "John Doe");
    assert_eq!(view.email, "john@example.com");
    assert!(is_uuid_v4(&view.id));
    assert_eq!(view.as_map()["createdAt"].len(), "YYYY-MM-DD HH:MM:SS".len());

    let stored = store
        .find_by_email(&EmailAddress::new("john@example.com").unwrap())
        .await
        .unwrap()
        .expect("account persisted");
    assert_eq!(stored.id().to_string(), view.id);
    assert!(stored.credential().verify("StrongP@ss123"));
}

#[tokio::test]
async fn test_second_registration_with_same_email_is_duplicate() {
    let service = registrar(store().await, EventBus::new());

    service
        .register("John Doe", "john@example.com", "StrongP@ss123")
        .await
        .unwrap();
    let err = service
        .register("Johnny Doe", "john@example.com", "OtherP@ss456")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateAccount(_)));
}

#[tokio::test]
async fn test_duplicate_detection_ignores_case() {
    let service = registrar(store().await, EventBus::new());

    service
        .register("John Doe", "John@Example.com", "StrongP@ss123")
        .await
        .unwrap();
    let err = service
        .register("John Doe", "john@example.COM", "StrongP@ss123")
        .await
        .unwrap_err();

    assert_eq!(err.code(), "DuplicateAccount");
}

#[tokio::test]
async fn test_lookup_by_email_is_case_insensitive() {
    let store = store().await;
    let account = Account::create("John Doe", "Test@Example.com", "StrongP@ss123").unwrap();
    store.save(&account).await.unwrap();

    let found = store
        .find_by_email(&EmailAddress::new("test@example.com").unwrap())
        .await
        .unwrap()
        .expect("case-insensitive match");

    assert_eq!(found.id(), account.id());
    assert_eq!(found.email().as_str(), "Test@Example.com");
}

#[tokio::test]
async fn test_store_rejects_racing_duplicate_as_conflict() {
    let store = store().await;
    let first = Account::create("John Doe", "john@example.com", "StrongP@ss123").unwrap();
    let second = Account::create("John Doe", "JOHN@example.com", "StrongP@ss123").unwrap();

    store.save(&first).await.unwrap();
    let err = AppError::from(store.save(&second).await.unwrap_err());

    assert_eq!(err.code(), "PersistenceFailure");
    assert!(err.is_conflict());
}

#[tokio::test]
async fn test_find_by_id_and_delete() {
    let store = store().await;
    let account = Account::create("John Doe", "john@example.com", "StrongP@ss123").unwrap();
    store.save(&account).await.unwrap();

    let found = store.find_by_id(account.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), account.name());
    assert_eq!(found.created_at().timestamp(), account.created_at().timestamp());

    store.delete(account.id()).await.unwrap();
    assert!(store.find_by_id(account.id()).await.unwrap().is_none());

    // Deleting again is a no-op
    store.delete(account.id()).await.unwrap();
}

#[tokio::test]
async fn test_absent_lookups_return_none() {
    let store = store().await;
    assert!(store.find_by_id(&Identity::generate()).await.unwrap().is_none());
    assert!(store
        .find_by_email(&EmailAddress::new("nobody@example.com").unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_event_delivered_after_persistence() {
    let store = store().await;
    let observed = Arc::new(Mutex::new(Vec::new()));

    let mut bus = EventBus::new();
    let sink = Arc::clone(&observed);
    bus.subscribe_fn(EventKind::AccountRegistered, "observer", move |event: &DomainEvent| {
        let DomainEvent::AccountRegistered(e) = event;
        assert!(e.occurred_at() >= e.account().created_at());
        sink.lock().unwrap().push(e.account().email().to_string());
        Ok(())
    });

    registrar(store, bus)
        .register("John Doe", "john@example.com", "StrongP@ss123")
        .await
        .unwrap();

    assert_eq!(*observed.lock().unwrap(), vec!["john@example.com"]);
}

#[tokio::test]
async fn test_invalid_input_leaves_store_empty() {
    let store = store().await;
    let service = registrar(store.clone(), EventBus::new());

    for (name, email, password) in [
        ("John Doe", "invalid-email", "StrongP@ss123"),
        ("J", "john@example.com", "StrongP@ss123"),
        ("John Doe", "john@example.com", "Short1!"),
    ] {
        assert!(service.register(name, email, password).await.is_err());
    }

    assert!(store
        .find_by_email(&EmailAddress::new("john@example.com").unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_endpoint_with_welcome_notifier() {
    let config = RegistrationServiceConfig {
        welcome_failure_percent: 100,
        ..RegistrationServiceConfig::default()
    };
    let bus = registration_service_lib::build_event_bus(&config);
    assert_eq!(bus.subscriber_count(EventKind::AccountRegistered), 1);

    let store = store().await;
    let endpoint = RegistrationEndpoint::new(Arc::new(registrar(store.clone(), bus)));

    // Notification failures never reach the caller
    let response = endpoint
        .handle(RegisterRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "StrongP@ss123".to_string(),
        })
        .await;
    assert!(response.is_success());

    let json = serde_json::to_value(
        endpoint
            .handle_json(
                r#"{"name":"John Doe","email":"john@example.com","password":"StrongP@ss123"}"#,
            )
            .await,
    )
    .unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["exception_type"], "DuplicateAccount");
}

#[tokio::test]
async fn test_database_ping_and_migration_status() {
    let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    db.ping().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert!(!status.is_empty());
    assert!(status.iter().all(|(_, applied)| *applied));
}
