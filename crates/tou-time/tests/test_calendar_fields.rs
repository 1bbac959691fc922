//! Integration tests for calendar field extraction.

use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc};
use proptest::prelude::*;
use tou_time::{CalendarDate, CalendarFields, Month, TemporalField, Weekday};

#[test]
fn month_and_weekday_follow_rule_numbering() {
    // 2024-12-01 is a Sunday
    let dt = Utc.with_ymd_and_hms(2024, 12, 1, 23, 59, 0).unwrap();
    let f = dt.calendar_fields(true).unwrap();
    assert_eq!(f.month_of_year(), Month::December);
    assert_eq!(f.get(TemporalField::Month), 12);
    assert_eq!(f.weekday(), Weekday::Sunday);
    assert_eq!(f.get(TemporalField::DayOfWeek), 7);
    assert_eq!(f.get(TemporalField::MinuteOfDay), 1439);
}

#[test]
fn every_field_lies_in_its_domain_for_a_year_of_days() {
    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while day.year() == 2024 {
        let f = CalendarFields::from_naive(&day.and_hms_opt(12, 0, 0).unwrap());
        for field in TemporalField::TIME_OF_USE {
            let bounds = field.bounds().unwrap();
            assert!(bounds.contains(f.get(field)), "{field} of {f} out of {bounds}");
        }
        day = day.succ_opt().unwrap();
    }
}

proptest! {
    #[test]
    fn minute_of_day_matches_clock(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let dt = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        let f = CalendarFields::from_naive(&dt);
        prop_assert_eq!(f.minute_of_day(), (dt.hour() * 60 + dt.minute()) as i32);
    }

    #[test]
    fn utc_timestamp_agrees_with_datetime(secs in 0i64..4_102_444_800) {
        let dt = Utc.timestamp_opt(secs, 0).unwrap();
        let from_millis = CalendarFields::from_timestamp_millis(secs * 1000, true);
        prop_assert_eq!(from_millis, dt.calendar_fields(true));
    }
}
