//! Malformed schedules are rejected at construction so the countdown path
//! stays total.

use bell_calendar::*;

fn base() -> ScheduleSpec {
    ScheduleSpec {
        acronym: "LSE".to_string(),
        name: "London Stock Exchange".to_string(),
        time_zone: "Europe/London".to_string(),
        opening_time: SessionTime::new(8, 0),
        closing_time: SessionTime::new(16, 30),
        trading_days: TradingDays::MON_FRI,
        holidays: vec!["2026-12-25".to_string(), "2026-12-28".to_string()],
    }
}

#[test]
fn well_formed_schedule_is_accepted() {
    let s = ExchangeSchedule::new(base()).unwrap();
    assert_eq!(s.holidays().len(), 2);
    assert_eq!(s.opening_time(), SessionTime::new(8, 0));
    assert_eq!(s.closing_time(), SessionTime::new(16, 30));
}

#[test]
fn blank_acronym_is_rejected() {
    let mut spec = base();
    spec.acronym = "   ".to_string();
    assert_eq!(ExchangeSchedule::new(spec), Err(ScheduleError::EmptyAcronym));
}

#[test]
fn unknown_time_zone_is_rejected() {
    let mut spec = base();
    spec.time_zone = "Mars/Olympus_Mons".to_string();
    assert_eq!(
        ExchangeSchedule::new(spec),
        Err(ScheduleError::InvalidTimeZone("Mars/Olympus_Mons".to_string()))
    );
}

#[test]
fn out_of_range_session_time_is_rejected() {
    let mut spec = base();
    spec.closing_time = SessionTime::new(24, 0);
    let err = ExchangeSchedule::new(spec).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::InvalidSessionTime {
            field: "closing_time",
            time: SessionTime::new(24, 0),
        }
    );
    assert!(err.to_string().contains("closing_time 24:00 is not a valid"));
}

#[test]
fn opening_must_precede_closing() {
    let mut spec = base();
    spec.opening_time = SessionTime::new(16, 30);
    let err = ExchangeSchedule::new(spec).unwrap_err();
    assert!(matches!(err, ScheduleError::SessionNotOrdered { .. }));
    assert!(err.to_string().contains("overnight"));

    let mut overnight = base();
    overnight.opening_time = SessionTime::new(18, 0);
    overnight.closing_time = SessionTime::new(2, 0);
    assert!(matches!(
        ExchangeSchedule::new(overnight),
        Err(ScheduleError::SessionNotOrdered { .. })
    ));
}

#[test]
fn schedule_without_trading_days_is_rejected() {
    let mut spec = base();
    spec.trading_days = TradingDays::default();
    assert_eq!(ExchangeSchedule::new(spec), Err(ScheduleError::NoTradingDays));
}

#[test]
fn malformed_holiday_is_rejected() {
    let mut spec = base();
    spec.holidays.push("25/12/2026".to_string());
    assert_eq!(
        ExchangeSchedule::new(spec),
        Err(ScheduleError::InvalidHoliday("25/12/2026".to_string()))
    );
}

#[test]
fn duplicate_holidays_collapse() {
    let mut spec = base();
    spec.holidays.push("2026-12-25".to_string());
    assert_eq!(ExchangeSchedule::new(spec).unwrap().holidays().len(), 2);
}
