//! Axum router and all HTTP handlers for bell-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Tests in `tests/` compose the bare router directly.

use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::get,
    Json, Router,
};
use bell_calendar::{countdown_by_acronym, render_message, EventType, ExchangeDirectory};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::IntervalStream;
use tracing::debug;

use crate::{
    api_types::{CountdownResponse, ExchangeSummary, ExchangesResponse, HealthResponse},
    state::AppState,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/exchanges", get(exchanges))
        .route("/v1/countdown/:acronym", get(countdown))
        .route("/v1/countdown/:acronym/stream", get(countdown_stream))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /v1/exchanges
// ---------------------------------------------------------------------------

pub(crate) async fn exchanges(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let exchanges = st
        .catalog
        .schedules()
        .map(|s| ExchangeSummary {
            acronym: s.acronym().to_string(),
            name: s.name().to_string(),
            time_zone: s.time_zone().name().to_string(),
            opening_time: s.opening_time(),
            closing_time: s.closing_time(),
        })
        .collect();

    (
        StatusCode::OK,
        Json(ExchangesResponse {
            catalog_hash: st.catalog.catalog_hash().to_string(),
            exchanges,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /v1/countdown/:acronym
// ---------------------------------------------------------------------------

/// `404` carries the not-found sentinel as its body.
pub(crate) async fn countdown(
    State(st): State<Arc<AppState>>,
    Path(acronym): Path<String>,
) -> Response {
    let body = countdown_response(&st, &acronym);
    let status = if body.result.event_type == EventType::Unresolved {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    debug!(
        acronym = %acronym,
        event_type = body.result.event_type.as_str(),
        "countdown"
    );
    (status, Json(body)).into_response()
}

// ---------------------------------------------------------------------------
// GET /v1/countdown/:acronym/stream
// ---------------------------------------------------------------------------

/// SSE feed: one freshly computed `countdown` event per `stream_interval`,
/// the first one immediately.
pub(crate) async fn countdown_stream(
    State(st): State<Arc<AppState>>,
    Path(acronym): Path<String>,
) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert("Cache-Control", HeaderValue::from_static("no-cache"));
    headers.insert("Connection", HeaderValue::from_static("keep-alive"));

    let events = countdown_events(st, acronym);
    (headers, Sse::new(events).keep_alive(KeepAlive::new())).into_response()
}

fn countdown_events(
    st: Arc<AppState>,
    acronym: String,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let ticker = tokio::time::interval(st.stream_interval);
    IntervalStream::new(ticker).filter_map(move |_| {
        let body = countdown_response(&st, &acronym);
        async move {
            let data = serde_json::to_string(&body).ok()?;
            Some(Ok(Event::default().event("countdown").data(data)))
        }
    })
}

fn countdown_response(st: &AppState, acronym: &str) -> CountdownResponse {
    let result = countdown_by_acronym(st.catalog.as_ref(), acronym, st.clock.now());
    let message = render_message(&result);
    CountdownResponse { result, message }
}
