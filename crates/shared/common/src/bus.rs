//! In-process event bus.
//!
//! Synchronous publish/subscribe keyed by [`EventKind`]. Handlers run on the
//! publisher's thread, in registration order. A failing or panicking handler
//! is logged and skipped; the publisher never sees its failure.
//!
//! Subscriptions take `&mut self` and publishing takes `&self`, so the bus is
//! wired at startup and then shared read-only (typically behind an `Arc`).

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use domain::{DomainEvent, EventKind};
use thiserror::Error;

/// Failure reported by an event handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(msg: impl Into<String>) -> Self {
        HandlerError(msg.into())
    }
}

/// Result type alias for event handlers
pub type HandlerResult = Result<(), HandlerError>;

/// Capability implemented by anything that reacts to domain events.
pub trait EventHandler: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// React to an event.
    fn handle(&self, event: &DomainEvent) -> HandlerResult;
}

/// Adapter so plain closures can subscribe.
struct FnHandler<F> {
    name: String,
    f: F,
}

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&DomainEvent) -> HandlerResult + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, event: &DomainEvent) -> HandlerResult {
        (self.f)(event)
    }
}

/// Delivery summary of a single publish call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Handlers that returned successfully
    pub delivered: usize,
    /// Handlers that returned an error or panicked
    pub failed: usize,
}

/// Synchronous in-process event bus.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .handlers
            .iter()
            .map(|(kind, list)| (kind.as_str(), list.len()))
            .collect();
        f.debug_struct("EventBus").field("handlers", &counts).finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an event kind.
    pub fn subscribe(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        tracing::debug!(kind = %kind, handler = handler.name(), "Handler subscribed");
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Register a closure for an event kind.
    pub fn subscribe_fn<F>(&mut self, kind: EventKind, name: impl Into<String>, f: F)
    where
        F: Fn(&DomainEvent) -> HandlerResult + Send + Sync + 'static,
    {
        self.subscribe(
            kind,
            Arc::new(FnHandler {
                name: name.into(),
                f,
            }),
        );
    }

    /// Number of handlers registered for a kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Deliver an event to every handler registered for its kind.
    ///
    /// Publishing a kind with no subscribers is a no-op.
    pub fn publish(&self, event: &DomainEvent) -> PublishOutcome {
        let kind = event.kind();
        let mut outcome = PublishOutcome::default();

        let Some(handlers) = self.handlers.get(&kind) else {
            tracing::debug!(kind = %kind, "No subscribers for event");
            return outcome;
        };

        for handler in handlers {
            match catch_unwind(AssertUnwindSafe(|| handler.handle(event))) {
                Ok(Ok(())) => outcome.delivered += 1,
                Ok(Err(e)) => {
                    outcome.failed += 1;
                    tracing::error!(
                        kind = %kind,
                        handler = handler.name(),
                        error = %e,
                        "Event handler failed"
                    );
                }
                Err(panic) => {
                    outcome.failed += 1;
                    tracing::error!(
                        kind = %kind,
                        handler = handler.name(),
                        panic = panic_message(panic.as_ref()),
                        "Event handler panicked"
                    );
                }
            }
        }

        outcome
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Account, AccountRegistered};
    use std::sync::Mutex;

    fn registered_event() -> DomainEvent {
        let account = Account::create("John Doe", "john@example.com", "StrongP@ss123").unwrap();
        AccountRegistered::new(account).into()
    }

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &str) -> impl Fn(&DomainEvent) -> HandlerResult {
        let log = Arc::clone(log);
        let tag = tag.to_string();
        move |_event: &DomainEvent| {
            log.lock().unwrap().push(tag.clone());
            Ok(())
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::new();
        let outcome = bus.publish(&registered_event());
        assert_eq!(outcome, PublishOutcome::default());
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe_fn(EventKind::AccountRegistered, "first", recorder(&log, "first"));
        bus.subscribe_fn(EventKind::AccountRegistered, "second", recorder(&log, "second"));
        bus.subscribe_fn(EventKind::AccountRegistered, "third", recorder(&log, "third"));

        let outcome = bus.publish(&registered_event());

        assert_eq!(outcome.delivered, 3);
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failing_handler_does_not_stop_later_handlers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe_fn(EventKind::AccountRegistered, "broken", |_event: &DomainEvent| {
            Err(HandlerError::new("mail server down"))
        });
        bus.subscribe_fn(EventKind::AccountRegistered, "after", recorder(&log, "after"));

        let outcome = bus.publish(&registered_event());

        assert_eq!(outcome, PublishOutcome { delivered: 1, failed: 1 });
        assert_eq!(*log.lock().unwrap(), vec!["after"]);
    }

    #[test]
    fn test_panicking_handler_is_contained() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe_fn(EventKind::AccountRegistered, "panics", |_event: &DomainEvent| {
            panic!("handler blew up")
        });
        bus.subscribe_fn(EventKind::AccountRegistered, "after", recorder(&log, "after"));

        let outcome = bus.publish(&registered_event());

        assert_eq!(outcome, PublishOutcome { delivered: 1, failed: 1 });
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_handler_receives_event() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let mut bus = EventBus::new();
        bus.subscribe_fn(EventKind::AccountRegistered, "capture", move |event: &DomainEvent| {
            let DomainEvent::AccountRegistered(e) = event;
            *sink.lock().unwrap() = Some(e.account().email().to_string());
            Ok(())
        });

        bus.publish(&registered_event());

        assert_eq!(seen.lock().unwrap().as_deref(), Some("john@example.com"));
    }

    #[test]
    fn test_subscriber_count() {
        let mut bus = EventBus::new();
        assert_eq!(bus.subscriber_count(EventKind::AccountRegistered), 0);
        bus.subscribe_fn(EventKind::AccountRegistered, "noop", |_event: &DomainEvent| Ok(()));
        assert_eq!(bus.subscriber_count(EventKind::AccountRegistered), 1);
    }
}
