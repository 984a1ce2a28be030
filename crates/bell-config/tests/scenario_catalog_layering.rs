//! Layered catalog merge: later layers override earlier ones.
//!
//! GREEN when:
//! - an overlay can change one field of one exchange and leave the rest;
//! - an overlay can add an exchange;
//! - list values (holidays) are replaced, not appended;
//! - an empty overlay layer is a no-op.

use bell_calendar::{compute_countdown, EventType, ExchangeDirectory, SessionTime};
use bell_config::catalog_from_strings;
use chrono::{NaiveDate, TimeZone, Utc};

const BASE_YAML: &str = r#"
exchanges:
  LSE:
    name: London Stock Exchange
    time_zone: Europe/London
    opening_time: { hours: 8, minutes: 0 }
    closing_time: { hours: 16, minutes: 30 }
    trading_days: { mon: true, tue: true, wed: true, thu: true, fri: true }
    holidays: ["2026-12-25", "2026-12-28"]
"#;

const SHORT_DAY_OVERLAY: &str = r#"
exchanges:
  LSE:
    closing_time: { hours: 12, minutes: 30 }
"#;

const ADD_EXCHANGE_OVERLAY: &str = r#"
exchanges:
  XETRA:
    name: Deutsche Boerse Xetra
    time_zone: Europe/Berlin
    opening_time: { hours: 9, minutes: 0 }
    closing_time: { hours: 17, minutes: 30 }
    trading_days: { mon: true, tue: true, wed: true, thu: true, fri: true }
"#;

const HOLIDAY_OVERLAY: &str = r#"
exchanges:
  LSE:
    holidays: ["2026-12-24"]
"#;

#[test]
fn overlay_overrides_single_field() {
    let cat = catalog_from_strings(&[BASE_YAML, SHORT_DAY_OVERLAY]).unwrap();
    let lse = cat.find_by_acronym("LSE").unwrap();

    assert_eq!(lse.closing_time(), SessionTime::new(12, 30));
    assert_eq!(lse.opening_time(), SessionTime::new(8, 0));
    assert_eq!(lse.name(), "London Stock Exchange");

    // Mon 2026-01-05 13:00 GMT is after the shortened close.
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 13, 0, 0).unwrap();
    assert_eq!(compute_countdown(lse, now).event_type, EventType::Open);
}

#[test]
fn overlay_can_add_an_exchange() {
    let cat = catalog_from_strings(&[BASE_YAML, ADD_EXCHANGE_OVERLAY]).unwrap();

    assert_eq!(cat.len(), 2);
    assert_eq!(cat.acronyms().collect::<Vec<_>>(), vec!["LSE", "XETRA"]);
    assert!(cat.find_by_acronym("XETRA").is_some());
}

#[test]
fn holiday_lists_are_replaced_not_appended() {
    let cat = catalog_from_strings(&[BASE_YAML, HOLIDAY_OVERLAY]).unwrap();
    let lse = cat.find_by_acronym("LSE").unwrap();

    let dec24 = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
    let dec25 = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
    assert!(lse.is_holiday(dec24));
    assert!(!lse.is_holiday(dec25));
    assert_eq!(lse.holidays().len(), 1);
}

#[test]
fn empty_overlay_is_a_no_op() {
    let base = catalog_from_strings(&[BASE_YAML]).unwrap();
    let layered = catalog_from_strings(&[BASE_YAML, "", "# comment only\n"]).unwrap();

    assert_eq!(base.catalog_hash(), layered.catalog_hash());
}

#[test]
fn missing_trading_day_flags_default_to_closed() {
    let cat = catalog_from_strings(&[BASE_YAML]).unwrap();
    let lse = cat.find_by_acronym("LSE").unwrap();

    assert!(!lse.trading_days().sat);
    assert!(!lse.trading_days().sun);
    assert!(lse.trading_days().mon);
}
