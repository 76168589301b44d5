use local_temporal::storage::{AnsiSql, CustomEngine, LocalDateColumn, Temporal};
use local_temporal::{
    DateFields, Error, Interval, Kind, LocalDate, LocalDateTime, LocalTime, TimeFields,
};
use qtty::{Days, Seconds};

#[test]
fn date_time_splits_into_normalized_halves() {
    let value = LocalDateTime::from_format("Y-m-d H:i:s", "2018-01-01 23:00:00").unwrap();
    let date = value.to_date().unwrap();
    let time = value.to_time().unwrap();

    assert_eq!(date.to_string(), "2018-01-01");
    assert_eq!(time.to_string(), "23:00:00");
    assert_eq!(date.instant().to_rfc3339(), "2018-01-01T00:00:00+00:00");
    assert_eq!(time.instant().to_rfc3339(), "1970-01-01T23:00:00+00:00");
    assert_eq!(LocalDateTime::from_date_and_time(date, time), Ok(value));
}

#[test]
fn splitting_goes_through_the_canonical_form() {
    let value = LocalDateTime::from_format("Y-m-d H:i:s.u", "2018-01-01 23:00:00.250000").unwrap();
    let time = value.to_time().unwrap();
    assert_eq!(time, LocalTime::create(23, 0, 0).unwrap());
    assert_eq!(time.instant().to_rfc3339(), "1970-01-01T23:00:00+00:00");
}

#[test]
fn leap_seconds_are_rejected() {
    assert!(matches!(LocalTime::create(23, 59, 60), Err(Error::NoMatch { .. })));
    assert!(LocalDateTime::from_format("Y-m-d H:i:s", "2016-12-31 23:59:60").is_err());
}

#[test]
fn time_arithmetic_wraps_at_midnight() {
    let time = LocalTime::create(23, 0, 0).unwrap();
    assert_eq!(time + "PT24H".parse::<Interval>().unwrap(), time);
    assert_eq!(time.modify("+2 hours").unwrap().to_string(), "01:00:00");
    assert_eq!(time.modify("-1 day").unwrap(), time);
}

#[test]
fn date_arithmetic_truncates_the_clock() {
    let date = LocalDate::create(2018, 1, 1).unwrap();
    assert_eq!(date.modify("+1 day").unwrap(), LocalDate::create(2018, 1, 2).unwrap());
    assert_eq!(date.modify("+23 hours").unwrap(), date);
    assert_eq!(date.modify("-1 second").unwrap().to_string(), "2017-12-31");
}

#[test]
fn diff_carries_components_and_elapsed_span() {
    let a = LocalTime::create(23, 0, 0).unwrap();
    let b = LocalTime::create(23, 0, 1).unwrap();
    let interval = a.diff(&b, false);
    assert_eq!(interval.seconds(), 1);
    assert_eq!(interval.elapsed_seconds(), Some(Seconds::new(1.0)));

    let a = LocalDate::create(2018, 1, 1).unwrap();
    let b = LocalDate::create(2018, 1, 3).unwrap();
    let interval = b.diff(&a, false);
    assert!(interval.is_negative());
    assert_eq!(interval.to_string(), "-P2D");
    let days = interval.elapsed_days().unwrap();
    assert!((days - Days::new(-2.0)).abs() < Days::new(1e-9));
    assert_eq!(interval.total_days(), Some(2));
}

#[test]
fn format_never_leaks_foreign_fields() {
    let pattern = "l, F j, Y H:i:s";
    let date = LocalDate::create(2018, 1, 1).unwrap();
    let time = LocalTime::create(23, 0, 0).unwrap();
    assert_eq!(date.format(pattern), "Monday, January 1, 2018 H:i:s");
    assert_eq!(time.format(pattern), "l, F j, Y 23:00:00");
}

#[test]
fn validation_and_matching_errors() {
    assert_eq!(
        LocalDate::from_format("H:i:s", "2018-01-01"),
        Err(Error::InvalidFormat {
            format: "H:i:s".into(),
            kind: Kind::Date
        })
    );
    let err = LocalTime::from_format("s-i-H", "23:00:00").unwrap_err();
    assert_eq!(
        err.to_string(),
        "input string \"23:00:00\" does not match format string \"s-i-H\""
    );
}

#[test]
fn getters_round_trip_create() {
    let value = LocalDateTime::create(1986, 1, 25, 13, 37, 5).unwrap();
    assert_eq!((value.year(), value.month(), value.day()), (1986, 1, 25));
    assert_eq!((value.hour(), value.minute(), value.second()), (13, 37, 5));
    assert_eq!(value.ordinal(), 25);
}

#[test]
fn storage_round_trip_through_a_custom_engine() {
    let engine = CustomEngine::new("european").with_format(Kind::Date, "d.m.Y");
    let column = LocalDateColumn::new();
    let date = LocalDate::create(1986, 1, 25).unwrap();

    let stored = column
        .to_storage_value(Some(&Temporal::from(date)), &engine)
        .unwrap();
    assert_eq!(stored.as_deref(), Some("25.01.1986"));
    assert_eq!(
        column.from_storage_value(stored.as_deref(), &engine).unwrap(),
        Some(date)
    );
    assert!(column.from_storage_value(Some("1986-01-25"), &engine).is_err());
    assert!(column.from_storage_value(Some("1986-01-25"), &AnsiSql).is_ok());
}

#[cfg(feature = "locales")]
#[test]
fn display_bridge_uses_the_normalized_instant() {
    use icu::locid::locale;
    use local_temporal::display::{DisplayFormatter, DisplayStyle};

    let date = LocalDate::create(2018, 1, 1).unwrap();
    let formatter =
        DisplayFormatter::new(locale!("de-DE"), DisplayStyle::Long, DisplayStyle::Medium).unwrap();
    let text = formatter.format(&date).unwrap();
    assert!(text.starts_with("1. Januar 2018"), "{text}");
    assert!(text.ends_with("00:00:00"), "{text}");

    let time = LocalTime::create(23, 0, 0).unwrap();
    let formatter = DisplayFormatter::date_formatter(locale!("en-US"), DisplayStyle::Long).unwrap();
    assert_eq!(formatter.format(&time).unwrap(), "January 1, 1970");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let value = LocalDateTime::create(2018, 1, 1, 23, 0, 0).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "\"2018-01-01T23:00:00\"");
    assert_eq!(serde_json::from_str::<LocalDateTime>(&json).unwrap(), value);

    let interval: Interval = serde_json::from_str("\"P1Y2M\"").unwrap();
    assert_eq!((interval.years(), interval.months()), (1, 2));
}
