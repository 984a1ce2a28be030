//! Exchange schedule model and construction-time validation.
//!
//! An [`ExchangeSchedule`] can only be obtained through
//! [`ExchangeSchedule::new`], so every schedule the engine sees already
//! satisfies the invariants the countdown path relies on:
//!
//! - the time zone identifier resolved to a real IANA zone;
//! - `opening_time < closing_time` (no overnight sessions);
//! - at least one weekday is a trading day, which together with a finite
//!   holiday set bounds the next-open walk.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SessionTime
// ---------------------------------------------------------------------------

/// Exchange-local wall-clock time of a session boundary.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct SessionTime {
    pub hours: u32,
    pub minutes: u32,
}

impl SessionTime {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// `None` when hours/minutes are out of range.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0)
    }
}

impl fmt::Display for SessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

// ---------------------------------------------------------------------------
// TradingDays
// ---------------------------------------------------------------------------

/// Weekday → "does the exchange trade on this weekday".
///
/// Missing flags deserialize as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TradingDays {
    #[serde(default)]
    pub sun: bool,
    #[serde(default)]
    pub mon: bool,
    #[serde(default)]
    pub tue: bool,
    #[serde(default)]
    pub wed: bool,
    #[serde(default)]
    pub thu: bool,
    #[serde(default)]
    pub fri: bool,
    #[serde(default)]
    pub sat: bool,
}

impl TradingDays {
    /// Monday through Friday.
    pub const MON_FRI: TradingDays = TradingDays {
        sun: false,
        mon: true,
        tue: true,
        wed: true,
        thu: true,
        fri: true,
        sat: false,
    };

    /// Sunday through Thursday (e.g. Gulf exchanges).
    pub const SUN_THU: TradingDays = TradingDays {
        sun: true,
        mon: true,
        tue: true,
        wed: true,
        thu: true,
        fri: false,
        sat: false,
    };

    pub fn trades_on(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sun => self.sun,
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
        }
    }

    pub fn any(&self) -> bool {
        self.sun || self.mon || self.tue || self.wed || self.thu || self.fri || self.sat
    }
}

// ---------------------------------------------------------------------------
// ScheduleSpec (unvalidated input)
// ---------------------------------------------------------------------------

/// Raw schedule fields as supplied by configuration.
///
/// `time_zone` is an IANA identifier and `holidays` are `YYYY-MM-DD`
/// strings; both are parsed by [`ExchangeSchedule::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleSpec {
    pub acronym: String,
    pub name: String,
    pub time_zone: String,
    pub opening_time: SessionTime,
    pub closing_time: SessionTime,
    pub trading_days: TradingDays,
    pub holidays: Vec<String>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Reasons a [`ScheduleSpec`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Acronym is empty after trimming.
    EmptyAcronym,
    /// Time zone identifier is not in the IANA database.
    InvalidTimeZone(String),
    /// Hours >= 24 or minutes >= 60.
    InvalidSessionTime {
        field: &'static str,
        time: SessionTime,
    },
    /// Opening time is not strictly before closing time.
    SessionNotOrdered {
        opening: SessionTime,
        closing: SessionTime,
    },
    /// Every weekday flag is false.
    NoTradingDays,
    /// A holiday entry is not a `YYYY-MM-DD` date.
    InvalidHoliday(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptyAcronym => write!(f, "exchange acronym is empty"),
            ScheduleError::InvalidTimeZone(tz) => {
                write!(f, "unknown time zone identifier '{tz}'")
            }
            ScheduleError::InvalidSessionTime { field, time } => {
                write!(f, "{field} {time} is not a valid wall-clock time")
            }
            ScheduleError::SessionNotOrdered { opening, closing } => write!(
                f,
                "opening_time {opening} must be before closing_time {closing} \
                 (overnight sessions are not supported)"
            ),
            ScheduleError::NoTradingDays => {
                write!(f, "trading_days must flag at least one weekday")
            }
            ScheduleError::InvalidHoliday(raw) => {
                write!(f, "holiday '{raw}' is not a YYYY-MM-DD date")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

// ---------------------------------------------------------------------------
// ExchangeSchedule
// ---------------------------------------------------------------------------

/// Validated, read-only schedule metadata for one exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeSchedule {
    acronym: String,
    name: String,
    time_zone: Tz,
    opening_time: SessionTime,
    closing_time: SessionTime,
    opening: NaiveTime,
    closing: NaiveTime,
    trading_days: TradingDays,
    holidays: BTreeSet<NaiveDate>,
}

impl ExchangeSchedule {
    pub fn new(spec: ScheduleSpec) -> Result<Self, ScheduleError> {
        let acronym = spec.acronym.trim().to_string();
        if acronym.is_empty() {
            return Err(ScheduleError::EmptyAcronym);
        }

        let time_zone: Tz = spec
            .time_zone
            .trim()
            .parse()
            .map_err(|_| ScheduleError::InvalidTimeZone(spec.time_zone.clone()))?;

        let opening = spec
            .opening_time
            .to_naive_time()
            .ok_or(ScheduleError::InvalidSessionTime {
                field: "opening_time",
                time: spec.opening_time,
            })?;
        let closing = spec
            .closing_time
            .to_naive_time()
            .ok_or(ScheduleError::InvalidSessionTime {
                field: "closing_time",
                time: spec.closing_time,
            })?;
        if opening >= closing {
            return Err(ScheduleError::SessionNotOrdered {
                opening: spec.opening_time,
                closing: spec.closing_time,
            });
        }

        if !spec.trading_days.any() {
            return Err(ScheduleError::NoTradingDays);
        }

        let holidays = spec
            .holidays
            .iter()
            .map(|raw| parse_holiday(raw))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            acronym,
            name: spec.name,
            time_zone,
            opening_time: spec.opening_time,
            closing_time: spec.closing_time,
            opening,
            closing,
            trading_days: spec.trading_days,
            holidays,
        })
    }

    pub fn acronym(&self) -> &str {
        &self.acronym
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn opening_time(&self) -> SessionTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> SessionTime {
        self.closing_time
    }

    pub fn trading_days(&self) -> TradingDays {
        self.trading_days
    }

    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }

    pub(crate) fn opening(&self) -> NaiveTime {
        self.opening
    }

    pub(crate) fn closing(&self) -> NaiveTime {
        self.closing
    }

    /// `date` is read on the exchange's local calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Trading weekday and not a holiday.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        self.trading_days.trades_on(date.weekday()) && !self.is_holiday(date)
    }
}

fn parse_holiday(raw: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidHoliday(raw.to_string()))
}
