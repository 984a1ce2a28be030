//! Human-readable rendering of a [`CountdownResult`].

use crate::countdown::{CountdownResult, EventType};

/// Open/close results are wrapped in a sentence; holiday and not-found
/// results already carry their full message.
pub fn render_message(result: &CountdownResult) -> String {
    match result.event_type {
        EventType::Open => format!(
            "The {} ({}) will open in {}.",
            result.exchange_name, result.exchange_acronym, result.time_remaining
        ),
        EventType::Close => format!(
            "The {} ({}) will close in {}.",
            result.exchange_name, result.exchange_acronym, result.time_remaining
        ),
        EventType::Closed | EventType::Unresolved => result.time_remaining.clone(),
    }
}
