//! Exchange-local wall clock → instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;

/// Instant at which the wall clock in `tz` reads `date` `time`.
///
/// - Ambiguous wall clocks (DST fall-back) resolve to the earlier instant.
/// - Wall clocks inside a DST spring-forward gap are read with the offset in
///   force before the gap, which lands the same distance past the gap.
pub fn at_local(tz: Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(naive - Duration::days(1))).fix();
            let utc = naive - Duration::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::America::New_York;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn regular_wall_clock_maps_to_single_instant() {
        let dt = at_local(New_York, d(2026, 1, 5), t(9, 30));
        assert_eq!(dt.with_timezone(&Utc).to_rfc3339(), "2026-01-05T14:30:00+00:00");
    }

    #[test]
    fn fall_back_ambiguity_picks_earliest() {
        // 2026-11-01 01:30 occurs twice in New York (EDT then EST).
        let dt = at_local(New_York, d(2026, 11, 1), t(1, 30));
        assert_eq!(dt.with_timezone(&Utc).to_rfc3339(), "2026-11-01T05:30:00+00:00");
    }

    #[test]
    fn spring_forward_gap_lands_after_gap() {
        // 2026-03-08 02:30 does not exist in New York; read with EST (-5).
        let dt = at_local(New_York, d(2026, 3, 8), t(2, 30));
        assert_eq!(dt.with_timezone(&Utc).to_rfc3339(), "2026-03-08T07:30:00+00:00");
        assert_eq!(dt.format("%H:%M").to_string(), "03:30");
    }
}
