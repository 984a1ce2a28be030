//! Shared runtime state for bell-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. The catalog is
//! read-only after boot; the clock is the only source of "now".

use std::sync::Arc;
use std::time::Duration;

use bell_config::ExchangeCatalog;
use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the current instant handed to the countdown engine.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Static build metadata included in health responses.
#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Cloneable (Arc) handle shared across all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Static build metadata.
    pub build: BuildInfo,
    /// Validated exchange schedules.
    pub catalog: Arc<ExchangeCatalog>,
    pub clock: Arc<dyn Clock>,
    /// Spacing between `countdown` SSE events.
    pub stream_interval: Duration,
}

impl AppState {
    pub fn new(catalog: ExchangeCatalog) -> Self {
        Self {
            build: BuildInfo {
                service: "bell-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            catalog: Arc::new(catalog),
            clock: Arc::new(SystemClock),
            stream_interval: Duration::from_secs(1),
        }
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_stream_interval(mut self, interval: Duration) -> Self {
        self.stream_interval = interval;
        self
    }
}
