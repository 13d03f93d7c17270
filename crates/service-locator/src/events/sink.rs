//! Locator event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::LocatorEvent;

/// Trait for receiving locator events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no disk writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect the refresh path (best-effort)
pub trait LocatorEventSink: Send + Sync {
    /// Emit a single locator event.
    fn emit(&self, event: LocatorEvent);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl LocatorEventSink for NoOpEventSink {
    fn emit(&self, _event: LocatorEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<LocatorEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<LocatorEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl LocatorEventSink for MockEventSink {
    fn emit(&self, event: LocatorEvent) {
        self.events.lock().unwrap().push(event);
    }
}
