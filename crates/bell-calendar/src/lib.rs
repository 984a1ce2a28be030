//! bell-calendar
//!
//! Exchange session countdowns: given a validated [`ExchangeSchedule`] and
//! an instant, report whether the exchange is in session and how long until
//! its next open or close, skipping non-trading weekdays and holidays.
//!
//! Pure deterministic logic. No IO, no wall-clock. Callers supply `now`.

mod countdown;
mod directory;
mod local;
mod message;
mod resolver;
mod schedule;

pub use countdown::{
    compute_countdown, format_remaining, CountdownResult, EventType, HOLIDAY_MESSAGE,
    NOT_FOUND_ACRONYM, NOT_FOUND_MESSAGE, NOT_FOUND_NAME,
};
pub use directory::{countdown_by_acronym, ExchangeDirectory};
pub use local::at_local;
pub use message::render_message;
pub use resolver::resolve_next_open;
pub use schedule::{ExchangeSchedule, ScheduleError, ScheduleSpec, SessionTime, TradingDays};
