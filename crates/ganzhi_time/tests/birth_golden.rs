//! Julian dates and pillar dates for known birth instants.

use chrono::{TimeZone, Utc};
use ganzhi_time::{BirthTime, DayBoundary, J2000_JD, datetime_from_jd, jd_from_datetime};
use pretty_assertions::assert_eq;

#[test]
fn j2000_noon() {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(jd_from_datetime(&dt), J2000_JD);
    assert_eq!(datetime_from_jd(J2000_JD).unwrap(), dt);
}

#[test]
fn jd_inverse_keeps_whole_seconds() {
    let dt = Utc.with_ymd_and_hms(2032, 2, 1, 7, 53, 29).unwrap();
    assert_eq!(datetime_from_jd(jd_from_datetime(&dt)).unwrap(), dt);
}

#[test]
fn non_finite_jd_is_rejected() {
    assert!(datetime_from_jd(f64::NAN).is_err());
    assert!(datetime_from_jd(f64::INFINITY).is_err());
}

#[test]
fn pillar_day_numbers_around_late_evening() {
    // 23:30 local on 2024-02-10 (UTC+8).
    let at = Utc.with_ymd_and_hms(2024, 2, 10, 15, 30, 0).unwrap();
    let zi = BirthTime::new(at, 480, DayBoundary::ZiHour).unwrap();
    let midnight = BirthTime::new(at, 480, DayBoundary::Midnight).unwrap();
    assert_eq!(midnight.pillar_day_number(), 2_460_351);
    assert_eq!(zi.pillar_day_number(), 2_460_352);
    assert_eq!(zi.local_hour(), 23);
}

#[test]
fn negative_offset_moves_local_date_back() {
    let b = BirthTime::parse("2024-01-01T03:00:00Z", -300, DayBoundary::Midnight).unwrap();
    assert_eq!(b.pillar_date().to_string(), "2023-12-31");
    assert_eq!(b.local_hour(), 22);
}
