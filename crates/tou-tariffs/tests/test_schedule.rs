//! Integration tests for first-match and all-matches resolution.

use approx::assert_relative_eq;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use proptest::prelude::*;
use tou_core::IntegerRange;
use tou_tariffs::{
    BasicFieldParser, RuleDefinition, Schedule, ScheduleOptions, TariffRate, TariffRule,
    TemporalRule,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn rule(id: &str, amount: &str, days: (i32, i32), hours: (i32, i32)) -> TemporalRule {
    TemporalRule::builder()
        .days_of_week(IntegerRange::bounded(days.0, days.1))
        .minutes_of_day(IntegerRange::bounded(hours.0 * 60, hours.1 * 60))
        .rate(TariffRate::new(id, amount, None).unwrap())
        .build()
}

/// Weekday mornings, weekends all day, then every afternoon.
fn rules() -> Vec<TemporalRule> {
    vec![
        rule("WeekdayAM", "1", (1, 5), (0, 12)),
        rule("Weekend", "2", (6, 7), (0, 24)),
        rule("PM", "3", (1, 7), (12, 24)),
    ]
}

fn ids<R: TariffRule>(matched: &[&R]) -> Vec<String> {
    matched
        .iter()
        .flat_map(|r| r.rates().keys().cloned())
        .collect()
}

// 2024-01-01 is a Monday, 2024-01-06 a Saturday.

#[test]
fn first_match_follows_list_order() {
    let s = Schedule::new(rules(), ScheduleOptions::default());
    let id = |dt: NaiveDateTime| ids(&[s.first_match(&dt, false).unwrap()]);
    assert_eq!(id(at(2024, 1, 1, 0, 0)), ["WeekdayAM"]);
    assert_eq!(id(at(2024, 1, 1, 12, 0)), ["PM"]);
    assert_eq!(id(at(2024, 1, 6, 12, 0)), ["Weekend"]);
}

#[test]
fn single_match_mode_returns_at_most_one() {
    let s = Schedule::new(rules(), ScheduleOptions::default());
    assert_eq!(ids(&s.matches(&at(2024, 1, 6, 12, 0), false)), ["Weekend"]);
}

#[test]
fn multiple_match_returns_all_in_order() {
    let s = Schedule::new(rules(), ScheduleOptions::new().with_multiple_match(true));
    let saturday_noon = at(2024, 1, 6, 12, 0);
    assert_eq!(ids(&s.matches(&saturday_noon, false)), ["Weekend", "PM"]);

    let rates = s.resolve(&saturday_noon, false);
    assert_eq!(rates.len(), 2);
    assert_relative_eq!(rates["Weekend"].amount_f64(), 2.0);
    assert_relative_eq!(rates["PM"].amount_f64(), 3.0);
}

#[test]
fn afternoon_boundary_is_exclusive_for_morning_rule() {
    let s = Schedule::new(rules(), ScheduleOptions::new().with_multiple_match(true));
    assert_eq!(ids(&s.matches(&at(2024, 1, 1, 11, 59), false)), ["WeekdayAM"]);
    assert_eq!(ids(&s.matches(&at(2024, 1, 1, 12, 0), false)), ["PM"]);
}

#[test]
fn no_match_resolves_to_empty_map() {
    let weekdays_only = Schedule::new(
        [rule("WeekdayAM", "1", (1, 5), (0, 12))],
        ScheduleOptions::default(),
    );
    assert!(weekdays_only.resolve(&at(2024, 1, 6, 9, 0), false).is_empty());
    assert!(weekdays_only.matches(&at(2024, 1, 6, 9, 0), false).is_empty());
}

#[test]
fn absent_date_matches_nothing() {
    let s = Schedule::new(rules(), ScheduleOptions::new().with_multiple_match(true));
    let absent: Option<chrono::DateTime<Utc>> = None;
    assert!(s.first_match(&absent, true).is_none());
    assert!(s.matches(&absent, true).is_empty());
    assert!(s.resolve(&absent, true).is_empty());
}

#[test]
fn utc_flag_changes_the_matching_day() {
    let s = Schedule::new(rules(), ScheduleOptions::default());
    // Saturday 2024-01-06 23:30 at -05:00 is Sunday 04:30 UTC; both weekend
    let offset = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
    let dt = offset.with_ymd_and_hms(2024, 1, 6, 23, 30, 0).unwrap();
    assert_eq!(ids(&[s.first_match(&dt, true).unwrap()]), ["Weekend"]);
    // Friday 2024-01-05 20:00 at -05:00 is Saturday 01:00 UTC
    let friday_evening = offset.with_ymd_and_hms(2024, 1, 5, 20, 0, 0).unwrap();
    assert_eq!(ids(&[s.first_match(&friday_evening, false).unwrap()]), ["PM"]);
    assert_eq!(ids(&[s.first_match(&friday_evening, true).unwrap()]), ["Weekend"]);
}

#[test]
fn rules_from_text_match_like_built_rules() {
    let parser = BasicFieldParser::new();
    let definition = |days: &str, minutes: &str| RuleDefinition {
        days_of_week: Some(days.into()),
        minutes_of_day: Some(minutes.into()),
        ..Default::default()
    };
    let parsed = vec![
        TemporalRule::parse(
            &parser,
            &definition("Mon-Fri", "00:00-12:00"),
            [TariffRate::new("WeekdayAM", "1", None).unwrap()],
        )
        .unwrap(),
        TemporalRule::parse(
            &parser,
            &definition("Sat-Sun", "*"),
            [TariffRate::new("Weekend", "2", None).unwrap()],
        )
        .unwrap(),
        TemporalRule::parse(
            &parser,
            &definition("*", "12:00-24:00"),
            [TariffRate::new("PM", "3", None).unwrap()],
        )
        .unwrap(),
    ];
    assert_eq!(parsed, rules());
}

#[test]
fn options_load_from_json() {
    let options: ScheduleOptions = serde_json::from_str(r#"{"multiple_match": true}"#).unwrap();
    let s = Schedule::new(rules(), options);
    assert_eq!(s.matches(&at(2024, 1, 6, 12, 0), false).len(), 2);
}

proptest! {
    #[test]
    fn every_minute_of_the_year_matches_as_expected(day in 0i64..366, minute in 0i64..1440) {
        let dt = at(2024, 1, 1, 0, 0) + Duration::days(day) + Duration::minutes(minute);
        let s = Schedule::new(rules(), ScheduleOptions::new().with_multiple_match(true));
        let matched = ids(&s.matches(&dt, false));

        let weekend = dt.weekday().number_from_monday() >= 6;
        let afternoon = minute >= 720;
        let expected: Vec<&str> = match (weekend, afternoon) {
            (false, false) => vec!["WeekdayAM"],
            (false, true) => vec!["PM"],
            (true, false) => vec!["Weekend"],
            (true, true) => vec!["Weekend", "PM"],
        };
        prop_assert_eq!(matched.clone(), expected);

        let first = s.first_match(&dt, false).map(|r| ids(&[r]));
        prop_assert_eq!(first, Some(vec![matched[0].clone()]));
    }
}
