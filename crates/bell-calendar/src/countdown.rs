//! Countdown engine.
//!
//! Pure function of `(schedule, now)`: no IO, no wall-clock reads. Callers
//! that display a running countdown re-invoke [`compute_countdown`] on their
//! own timer.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::local::at_local;
use crate::resolver::resolve_next_open;
use crate::schedule::ExchangeSchedule;

pub const NOT_FOUND_ACRONYM: &str = "N/A";
pub const NOT_FOUND_NAME: &str = "Unknown Exchange";
pub const NOT_FOUND_MESSAGE: &str = "Exchange not found.";
pub const HOLIDAY_MESSAGE: &str = "The exchange is closed today due to a holiday.";

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which transition a countdown targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Counting down to the next session open.
    #[serde(rename = "open")]
    Open,
    /// In session; counting down to today's close.
    #[serde(rename = "close")]
    Close,
    /// Holiday; no countdown.
    #[serde(rename = "closed")]
    Closed,
    /// Exchange could not be looked up.
    #[serde(rename = "N/A")]
    Unresolved,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Open => "open",
            EventType::Close => "close",
            EventType::Closed => "closed",
            EventType::Unresolved => "N/A",
        }
    }
}

/// Outcome of one countdown computation. Recomputed on every call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownResult {
    pub exchange_acronym: String,
    pub exchange_name: String,
    pub event_type: EventType,
    /// Formatted duration, or the explanatory message for
    /// [`EventType::Closed`] / [`EventType::Unresolved`].
    pub time_remaining: String,
    /// Targeted transition instant.
    pub event_at: Option<DateTime<Utc>>,
    /// Whole seconds until `event_at`.
    pub remaining_secs: Option<i64>,
}

impl CountdownResult {
    /// Sentinel for an acronym that no directory entry matches.
    pub fn not_found() -> Self {
        Self {
            exchange_acronym: NOT_FOUND_ACRONYM.to_string(),
            exchange_name: NOT_FOUND_NAME.to_string(),
            event_type: EventType::Unresolved,
            time_remaining: NOT_FOUND_MESSAGE.to_string(),
            event_at: None,
            remaining_secs: None,
        }
    }

    fn holiday(schedule: &ExchangeSchedule) -> Self {
        Self {
            exchange_acronym: schedule.acronym().to_string(),
            exchange_name: schedule.name().to_string(),
            event_type: EventType::Closed,
            time_remaining: HOLIDAY_MESSAGE.to_string(),
            event_at: None,
            remaining_secs: None,
        }
    }

    fn countdown(
        schedule: &ExchangeSchedule,
        event_type: EventType,
        target: DateTime<Tz>,
        remaining_secs: i64,
    ) -> Self {
        Self {
            exchange_acronym: schedule.acronym().to_string(),
            exchange_name: schedule.name().to_string(),
            event_type,
            time_remaining: format_remaining(remaining_secs),
            event_at: Some(target.with_timezone(&Utc)),
            remaining_secs: Some(remaining_secs),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Countdown to the exchange's next open or close as seen at `now`.
///
/// All comparisons happen on the exchange's local clock. The session window
/// is half-open: `now == open` is in session, `now == close` is not.
/// A non-trading weekday is treated as already past its close.
pub fn compute_countdown(schedule: &ExchangeSchedule, now: DateTime<Utc>) -> CountdownResult {
    let tz = schedule.time_zone();
    let local_now = now.with_timezone(&tz);
    let local_date = local_now.date_naive();

    if schedule.is_holiday(local_date) {
        return CountdownResult::holiday(schedule);
    }

    let today_open = at_local(tz, local_date, schedule.opening());
    let today_close = at_local(tz, local_date, schedule.closing());
    let trades_today = schedule.trading_days().trades_on(local_date.weekday());

    let (event_type, target) = if local_now >= today_close || !trades_today {
        (EventType::Open, resolve_next_open(schedule, &local_now))
    } else if local_now >= today_open {
        (EventType::Close, today_close)
    } else {
        (EventType::Open, today_open)
    };

    // Positive deltas truncate toward zero, i.e. floor to whole seconds.
    let remaining_secs = (target - local_now).num_seconds();
    CountdownResult::countdown(schedule, event_type, target, remaining_secs)
}

/// `"<h> hours, <m> minutes, and <s> seconds"`.
pub fn format_remaining(total_secs: i64) -> String {
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    format!("{hours} hours, {minutes} minutes, and {seconds} seconds")
}
