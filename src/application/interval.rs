//! Interval normalization: local date + time-of-day to UTC instants
//!
//! Combining a calendar date with a wall-clock time uses the host
//! environment's local offset at that moment, the same way a browser's
//! `Date` does. This is a deliberate policy: no private timezone
//! database, DST handling defers to the environment. The offset in use
//! is exposed through [`local_offset_at`] so hosts and tests can observe
//! it; [`to_utc_instant_in`] accepts an explicit zone for deterministic
//! tests.

use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, Offset, TimeZone, Utc,
};

use crate::domain::FieldError;

/// Whole-minute difference `end - start`, truncated (seconds dropped).
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// Add `minutes` to a wall-clock time, staying on the same calendar day.
///
/// Overnight spans are unsupported, so a result at or past midnight is
/// rejected.
pub fn add_minutes(start: NaiveTime, minutes: u32) -> Result<NaiveTime, FieldError> {
    let (end, wrapped) = start.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    if wrapped != 0 {
        return Err(FieldError::InvalidInterval(format!(
            "{start} + {minutes} min crosses midnight"
        )));
    }
    Ok(end)
}

/// Combine a calendar date and wall-clock time into a UTC instant using
/// the environment's local offset.
pub fn to_utc_instant(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, FieldError> {
    to_utc_instant_in(date, time, &Local)
}

/// Combine a calendar date and wall-clock time into a UTC instant in an
/// explicit time zone.
///
/// DST fall-back makes some wall times ambiguous; those resolve to the
/// earlier offset. Spring-forward makes some wall times nonexistent;
/// those are rejected.
pub fn to_utc_instant_in<Tz: TimeZone>(
    date: NaiveDate,
    time: NaiveTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, FieldError> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(FieldError::InvalidInterval(format!(
            "local time {naive} does not exist in this time zone"
        ))),
    }
}

/// UTC offset the environment applies to a specific local (date, time).
///
/// `None` when the wall time falls in a spring-forward gap. Ambiguous
/// fall-back times report the earlier offset, matching
/// [`to_utc_instant`].
pub fn local_offset_at(date: NaiveDate, time: NaiveTime) -> Option<chrono::FixedOffset> {
    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt.offset().fix()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.offset().fix()),
        LocalResult::None => None,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn minutes_between_exact_difference() {
        assert_eq!(minutes_between(t(9, 0), t(10, 30)), 90);
        assert_eq!(minutes_between(t(9, 0), t(9, 0)), 0);
        assert_eq!(minutes_between(t(10, 30), t(9, 0)), -90);
    }

    #[test]
    fn minutes_between_truncates_seconds() {
        let start = NaiveTime::from_hms_opt(9, 0, 30).unwrap();
        let end = NaiveTime::from_hms_opt(9, 59, 59).unwrap();
        assert_eq!(minutes_between(start, end), 59);
    }

    #[test]
    fn add_minutes_recomputes_end() {
        assert_eq!(add_minutes(t(9, 0), 30).unwrap(), t(9, 30));
        assert_eq!(add_minutes(t(9, 0), 120).unwrap(), t(11, 0));
    }

    #[test]
    fn end_rederived_from_start_plus_duration_roundtrips() {
        let start = t(9, 0);
        let end = t(10, 30);
        let duration = minutes_between(start, end);
        assert_eq!(add_minutes(start, duration as u32).unwrap(), end);
    }

    #[test]
    fn add_minutes_rejects_midnight_crossing() {
        let err = add_minutes(t(23, 30), 60).unwrap_err();
        assert!(matches!(err, FieldError::InvalidInterval(_)));
        // exactly midnight is still a next-day end
        assert!(add_minutes(t(23, 0), 60).is_err());
    }

    #[test]
    fn to_utc_applies_explicit_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap(); // +05:30
        let instant = to_utc_instant_in(d(2025, 6, 10), t(9, 0), &ist).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 6, 10, 3, 30, 0).unwrap());
    }

    #[test]
    fn utc_roundtrip_reproduces_local_wall_time() {
        let tz = FixedOffset::west_opt(7 * 3600).unwrap(); // -07:00
        let date = d(2025, 6, 10);
        let time = t(9, 0);
        let instant = to_utc_instant_in(date, time, &tz).unwrap();
        let back = instant.with_timezone(&tz).naive_local();
        assert_eq!(back.date(), date);
        assert_eq!(back.time(), time);
    }

    #[test]
    fn environment_local_roundtrip() {
        let date = d(2025, 6, 10);
        let time = t(9, 0);
        // Skip wall times the local zone does not have (DST gap).
        if let Ok(instant) = to_utc_instant(date, time) {
            let back = instant.with_timezone(&Local).naive_local();
            assert_eq!(back.date(), date);
            assert_eq!(back.time(), time);
        }
    }

    #[test]
    fn local_offset_matches_conversion() {
        let date = d(2025, 6, 10);
        let time = t(9, 0);
        if let (Some(offset), Ok(instant)) =
            (local_offset_at(date, time), to_utc_instant(date, time))
        {
            assert_eq!(
                instant.with_timezone(&offset).naive_local(),
                date.and_time(time)
            );
        }
    }
}
