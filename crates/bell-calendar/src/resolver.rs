//! Next-trading-open resolution.
//!
//! Walks forward one calendar day at a time on the exchange's local calendar
//! until it reaches a trading weekday that is not a holiday.

use chrono::{DateTime, Days};
use chrono_tz::Tz;
use tracing::trace;

use crate::local::at_local;
use crate::schedule::ExchangeSchedule;

/// Opening instant of the next trading session reachable from `from`.
///
/// The walk starts on `from`'s local date, or the following date when `from`
/// is at or past that date's closing time. Non-trading weekdays and holidays
/// are skipped. A validated schedule always has a trading weekday and a
/// finite holiday set, so the walk terminates.
pub fn resolve_next_open(schedule: &ExchangeSchedule, from: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = schedule.time_zone();
    let from = from.with_timezone(&tz);

    let mut candidate = from.date_naive();
    if from >= at_local(tz, candidate, schedule.closing()) {
        candidate = candidate + Days::new(1);
    }

    while !schedule.is_trading_day(candidate) {
        trace!(
            acronym = schedule.acronym(),
            date = %candidate,
            holiday = schedule.is_holiday(candidate),
            "skipping non-trading day"
        );
        candidate = candidate + Days::new(1);
    }

    at_local(tz, candidate, schedule.opening())
}
