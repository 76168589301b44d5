// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Translation of single-character directives to chrono.
//!
//! Most directives map to a strftime fragment understood by both
//! `DateTime::format` and `chrono::format::parse_and_remainder`. The few that
//! chrono has no item for are computed here.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// What a directive character expands to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Directive {
    /// A strftime fragment.
    Strftime(&'static str),
    /// `st`, `nd`, `rd` or `th` for the day of month.
    OrdinalSuffix,
    /// Number of days in the month.
    DaysInMonth,
    /// `1` in a leap year, `0` otherwise.
    LeapYear,
    /// Daylight saving flag; always `0` on the reference offset.
    DaylightSaving,
    /// Offset from the reference offset in seconds; always `0`.
    OffsetSeconds,
}

/// Look up the expansion of `c`, or `None` if `c` is a literal.
pub(crate) fn lookup(c: char) -> Option<Directive> {
    use Directive::*;

    let directive = match c {
        // day
        'd' => Strftime("%d"),
        'j' => Strftime("%-d"),
        'D' => Strftime("%a"),
        'l' => Strftime("%A"),
        'N' => Strftime("%u"),
        'S' => OrdinalSuffix,
        'w' => Strftime("%w"),
        // 1-based: January 1st is 001.
        'z' => Strftime("%j"),
        // week
        'W' => Strftime("%V"),
        // month
        'F' => Strftime("%B"),
        'M' => Strftime("%b"),
        'm' => Strftime("%m"),
        'n' => Strftime("%-m"),
        't' => DaysInMonth,
        // year
        'L' => LeapYear,
        'o' => Strftime("%G"),
        'Y' => Strftime("%Y"),
        'y' => Strftime("%y"),
        // time
        'a' => Strftime("%P"),
        'A' => Strftime("%p"),
        'g' => Strftime("%-I"),
        'G' => Strftime("%-H"),
        'h' => Strftime("%I"),
        'H' => Strftime("%H"),
        'i' => Strftime("%M"),
        's' => Strftime("%S"),
        'u' => Strftime("%6f"),
        'v' => Strftime("%3f"),
        // zone
        'e' | 'T' => Strftime("%Z"),
        'I' => DaylightSaving,
        'O' => Strftime("%z"),
        'P' => Strftime("%:z"),
        'Z' => OffsetSeconds,
        // full
        'c' => Strftime("%Y-%m-%dT%H:%M:%S%:z"),
        'r' => Strftime("%a, %d %b %Y %H:%M:%S %z"),
        'U' => Strftime("%s"),
        _ => return None,
    };
    Some(directive)
}

/// Value of a computed directive for `instant`.
pub(crate) fn compute(directive: Directive, instant: &DateTime<Utc>) -> String {
    match directive {
        Directive::Strftime(fragment) => instant.format(fragment).to_string(),
        Directive::OrdinalSuffix => ordinal_suffix(instant.day()).to_owned(),
        Directive::DaysInMonth => days_in_month(instant.year(), instant.month()).to_string(),
        Directive::LeapYear => u8::from(instant.date_naive().leap_year()).to_string(),
        Directive::DaylightSaving | Directive::OffsetSeconds => "0".to_owned(),
    }
}

/// English ordinal suffix for a day of month.
pub(crate) fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}
