//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::engine::{AttendanceEngine, IdentitySource};

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Shared application state.
///
/// Contains the engine, the identification collaborator, and the clock the
/// handlers read "now" from. The clock is injectable so tests can pin the
/// mark time.
#[derive(Clone)]
pub struct AppState {
    engine: AttendanceEngine,
    identity: Arc<dyn IdentitySource>,
    clock: Clock,
}

impl AppState {
    /// Creates application state using the system clock.
    pub fn new(engine: AttendanceEngine, identity: Arc<dyn IdentitySource>) -> Self {
        Self::with_clock(engine, identity, Arc::new(Utc::now))
    }

    /// Creates application state with an injected clock.
    pub fn with_clock(
        engine: AttendanceEngine,
        identity: Arc<dyn IdentitySource>,
        clock: Clock,
    ) -> Self {
        Self {
            engine,
            identity,
            clock,
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }

    /// Returns a reference to the identification collaborator.
    pub fn identity(&self) -> &dyn IdentitySource {
        self.identity.as_ref()
    }

    /// Reads the current instant from the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
