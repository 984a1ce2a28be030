//! Response types for all bell-daemon HTTP endpoints.
//!
//! No business logic lives here.

use bell_calendar::{CountdownResult, SessionTime};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// /v1/exchanges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeSummary {
    pub acronym: String,
    pub name: String,
    /// IANA identifier, e.g. "America/New_York".
    pub time_zone: String,
    pub opening_time: SessionTime,
    pub closing_time: SessionTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangesResponse {
    pub catalog_hash: String,
    pub exchanges: Vec<ExchangeSummary>,
}

// ---------------------------------------------------------------------------
// /v1/countdown/:acronym
// ---------------------------------------------------------------------------

/// Countdown result plus its rendered sentence. Also the payload of each
/// `countdown` SSE event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub result: CountdownResult,
    pub message: String,
}
