// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-aware intervals.
//!
//! An [`Interval`] is a set of non-negative calendar and clock components plus
//! a sign. Intervals returned by [`Local::diff`](crate::Local::diff) also
//! remember the exact elapsed span, exposed as `qtty` quantities.

use crate::error::Error;
use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};
use qtty::{Day, Days, Seconds};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const MICROS_PER_SECOND: u64 = 1_000_000;

/// A signed span of years, months, days and clock time.
///
/// Components are applied largest first: months (years count as twelve
/// months, clamped to the end of the target month), then days, then the
/// clock part.
///
/// # Examples
///
/// ```
/// use local_temporal::Interval;
///
/// let interval: Interval = "P1DT2H".parse()?;
/// assert_eq!(interval.days(), 1);
/// assert_eq!(interval.hours(), 2);
/// assert_eq!(interval, Interval::new().with_days(1).with_hours(2));
/// # Ok::<(), local_temporal::Error>(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    years: u32,
    months: u32,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    microseconds: u64,
    negative: bool,
    elapsed: Option<TimeDelta>,
}

impl Interval {
    // ── constructors ──────────────────────────────────────────────────

    /// An empty interval.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an ISO 8601 duration such as `P1Y2M3DT4H5M6.5S`, `PT25H` or
    /// `-P2W`.
    pub fn from_iso8601(input: &str) -> Result<Self, Error> {
        parse_iso8601(input).ok_or_else(|| Error::InvalidInterval {
            input: input.to_owned(),
        })
    }

    /// The interval from `from` to `to`.
    ///
    /// The span is broken into the largest whole number of months that does
    /// not overshoot `to`, then days and clock time. When `to` is earlier
    /// than `from` the interval is negative, unless `absolute` is set.
    pub(crate) fn between(from: DateTime<Utc>, to: DateTime<Utc>, absolute: bool) -> Self {
        let negative = to < from;
        let (lo, hi) = if negative { (to, from) } else { (from, to) };

        let estimate = (hi.year() - lo.year()) * 12 + hi.month() as i32 - lo.month() as i32;
        let mut months = u32::try_from(estimate).unwrap_or(0);
        let anchor = loop {
            match lo.checked_add_months(Months::new(months)) {
                Some(anchor) if anchor <= hi => break anchor,
                _ if months == 0 => break lo,
                _ => months -= 1,
            }
        };

        let rest = hi - anchor;
        let micros = rest.num_microseconds().unwrap_or_default().unsigned_abs();
        let total_seconds = micros / MICROS_PER_SECOND;
        let elapsed = to - from;

        Self {
            years: months / 12,
            months: months % 12,
            days: total_seconds / 86_400,
            hours: total_seconds / 3_600 % 24,
            minutes: total_seconds / 60 % 60,
            seconds: total_seconds % 60,
            microseconds: micros % MICROS_PER_SECOND,
            negative: negative && !absolute,
            elapsed: Some(if absolute { elapsed.abs() } else { elapsed }),
        }
    }

    // ── builders ──────────────────────────────────────────────────────

    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self.elapsed = None;
        self
    }

    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self.elapsed = None;
        self
    }

    /// Sets the day component to `weeks * 7`.
    pub fn with_weeks(self, weeks: u64) -> Self {
        self.with_days(weeks.saturating_mul(7))
    }

    pub fn with_days(mut self, days: u64) -> Self {
        self.days = days;
        self.elapsed = None;
        self
    }

    pub fn with_hours(mut self, hours: u64) -> Self {
        self.hours = hours;
        self.elapsed = None;
        self
    }

    pub fn with_minutes(mut self, minutes: u64) -> Self {
        self.minutes = minutes;
        self.elapsed = None;
        self
    }

    pub fn with_seconds(mut self, seconds: u64) -> Self {
        self.seconds = seconds;
        self.elapsed = None;
        self
    }

    pub fn with_microseconds(mut self, microseconds: u64) -> Self {
        self.microseconds = microseconds;
        self.elapsed = None;
        self
    }

    /// The same components with the opposite sign.
    pub fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self.elapsed = self.elapsed.map(|elapsed| -elapsed);
        self
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub const fn years(&self) -> u32 {
        self.years
    }

    pub const fn months(&self) -> u32 {
        self.months
    }

    pub const fn days(&self) -> u64 {
        self.days
    }

    pub const fn hours(&self) -> u64 {
        self.hours
    }

    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    pub const fn microseconds(&self) -> u64 {
        self.microseconds
    }

    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether every component is zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.microseconds == 0
    }

    /// Whole days elapsed, for intervals produced by `diff`.
    pub fn total_days(&self) -> Option<u64> {
        self.elapsed.map(|elapsed| elapsed.num_days().unsigned_abs())
    }

    /// Exact signed span in seconds, for intervals produced by `diff`.
    pub fn elapsed_seconds(&self) -> Option<Seconds> {
        self.elapsed.map(|elapsed| {
            let whole = elapsed.num_seconds() as f64;
            let nanos = f64::from(elapsed.subsec_nanos()) / 1e9;
            Seconds::new(whole + nanos)
        })
    }

    /// Exact signed span in days, for intervals produced by `diff`.
    pub fn elapsed_days(&self) -> Option<Days> {
        self.elapsed_seconds().map(|seconds| seconds.to::<Day>())
    }

    // ── application ───────────────────────────────────────────────────

    fn clock(&self) -> Option<TimeDelta> {
        let seconds = self
            .hours
            .checked_mul(3_600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?;
        let micros = seconds
            .checked_mul(MICROS_PER_SECOND)?
            .checked_add(self.microseconds)?;
        Some(TimeDelta::microseconds(i64::try_from(micros).ok()?))
    }

    /// Apply to `instant`, backwards if `subtract` is set. `None` on
    /// overflow.
    pub(crate) fn apply(&self, instant: DateTime<Utc>, subtract: bool) -> Option<DateTime<Utc>> {
        let months = Months::new(self.years.checked_mul(12)?.checked_add(self.months)?);
        let days = chrono::Days::new(self.days);
        let clock = self.clock()?;

        if self.negative != subtract {
            instant
                .checked_sub_months(months)?
                .checked_sub_days(days)?
                .checked_sub_signed(clock)
        } else {
            instant
                .checked_add_months(months)?
                .checked_add_days(days)?
                .checked_add_signed(clock)
        }
    }
}

// ── ISO 8601 ──────────────────────────────────────────────────────────────

fn parse_iso8601(input: &str) -> Option<Interval> {
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    let rest = rest.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) if !time.is_empty() => (date, Some(time)),
        Some(_) => return None,
        None => (rest, None),
    };

    let mut interval = Interval::new();
    let mut any = false;

    for (number, designator) in components(date_part)? {
        let whole = whole_number(number)?;
        interval = match designator {
            'Y' => interval.with_years(u32::try_from(whole).ok()?),
            'M' => interval.with_months(u32::try_from(whole).ok()?),
            'W' => interval.with_days(interval.days.checked_add(whole.checked_mul(7)?)?),
            'D' => interval.with_days(interval.days.checked_add(whole)?),
            _ => return None,
        };
        any = true;
    }

    if let Some(time_part) = time_part {
        for (number, designator) in components(time_part)? {
            interval = match designator {
                'H' => interval.with_hours(whole_number(number)?),
                'M' => interval.with_minutes(whole_number(number)?),
                'S' => {
                    let (whole, fraction) = match number.split_once(['.', ',']) {
                        Some((whole, fraction)) => (whole, fraction),
                        None => (number, ""),
                    };
                    if fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    let micros = if fraction.is_empty() {
                        0
                    } else {
                        format!("{fraction:0<6}").parse().ok()?
                    };
                    interval
                        .with_seconds(whole_number(whole)?)
                        .with_microseconds(micros)
                }
                _ => return None,
            };
            any = true;
        }
    }

    if !any {
        return None;
    }
    Some(if negative { interval.negated() } else { interval })
}

/// Split `1Y2M3D` into `[("1", 'Y'), ("2", 'M'), ("3", 'D')]`.
fn components(part: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (index, c) in part.char_indices() {
        if c.is_ascii_alphabetic() {
            if index == start {
                return None;
            }
            out.push((&part[start..index], c));
            start = index + c.len_utf8();
        }
    }
    (start == part.len()).then_some(out)
}

fn whole_number(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("T0S");
        }
        for (value, designator) in [
            (u64::from(self.years), 'Y'),
            (u64::from(self.months), 'M'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.microseconds == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.microseconds != 0 {
            let fraction = format!("{:06}", self.microseconds);
            write!(f, "{}.{}S", self.seconds, fraction.trim_end_matches('0'))?;
        } else if self.seconds != 0 {
            write!(f, "{}S", self.seconds)?;
        }
        Ok(())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn parses_iso8601() {
        let interval: Interval = "P1Y2M3DT4H5M6S".parse().unwrap();
        assert_eq!(
            interval,
            Interval::new()
                .with_years(1)
                .with_months(2)
                .with_days(3)
                .with_hours(4)
                .with_minutes(5)
                .with_seconds(6)
        );
        assert_eq!("PT25H".parse::<Interval>().unwrap().hours(), 25);
        assert_eq!("P2W".parse::<Interval>().unwrap().days(), 14);
        assert!("-P1D".parse::<Interval>().unwrap().is_negative());

        let fractional: Interval = "PT1.5S".parse().unwrap();
        assert_eq!(fractional.seconds(), 1);
        assert_eq!(fractional.microseconds(), 500_000);
    }

    #[test]
    fn rejects_malformed_iso8601() {
        for input in ["", "P", "PT", "1D", "P1", "PD", "P1H", "PT1D", "P1.5D", "PT1.1234567S", "P-1D"] {
            assert_eq!(
                input.parse::<Interval>(),
                Err(Error::InvalidInterval {
                    input: input.to_owned()
                }),
                "{input:?}"
            );
        }
    }

    #[test]
    fn displays_iso8601() {
        assert_eq!(Interval::new().to_string(), "PT0S");
        assert_eq!(Interval::new().with_days(1).to_string(), "P1D");
        assert_eq!(Interval::new().with_hours(25).to_string(), "PT25H");
        assert_eq!(
            Interval::new()
                .with_years(1)
                .with_minutes(2)
                .with_microseconds(500_000)
                .negated()
                .to_string(),
            "-P1YT2M0.5S"
        );
    }

    #[test]
    fn display_roundtrips() {
        for text in ["P1Y2M3DT4H5M6S", "-PT25H", "P14D", "PT0.000001S"] {
            let interval: Interval = text.parse().unwrap();
            assert_eq!(interval.to_string().parse::<Interval>().unwrap(), interval);
        }
    }

    #[test]
    fn apply_adds_and_subtracts() {
        let start = instant(2018, 1, 1, 23, 0, 0);
        let day = Interval::new().with_days(1);
        assert_eq!(day.apply(start, false), Some(instant(2018, 1, 2, 23, 0, 0)));
        assert_eq!(day.apply(start, true), Some(instant(2017, 12, 31, 23, 0, 0)));
        assert_eq!(day.negated().apply(start, false), Some(instant(2017, 12, 31, 23, 0, 0)));

        let hours = Interval::new().with_hours(25);
        assert_eq!(hours.apply(start, true), Some(instant(2017, 12, 31, 22, 0, 0)));
    }

    #[test]
    fn apply_clamps_to_month_end() {
        let start = instant(2018, 1, 31, 0, 0, 0);
        let month = Interval::new().with_months(1);
        assert_eq!(month.apply(start, false), Some(instant(2018, 2, 28, 0, 0, 0)));
    }

    #[test]
    fn apply_overflow_is_none() {
        let start = instant(2018, 1, 1, 0, 0, 0);
        let huge = Interval::new().with_years(u32::MAX);
        assert_eq!(huge.apply(start, false), None);
        let huge = Interval::new().with_hours(u64::MAX);
        assert_eq!(huge.apply(start, false), None);
    }

    #[test]
    fn between_breaks_down_components() {
        let interval = Interval::between(
            instant(2018, 1, 1, 23, 0, 0),
            instant(2019, 3, 2, 1, 2, 3),
            false,
        );
        assert_eq!(interval.years(), 1);
        assert_eq!(interval.months(), 2);
        assert_eq!(interval.days(), 0);
        assert_eq!(interval.hours(), 2);
        assert_eq!(interval.minutes(), 2);
        assert_eq!(interval.seconds(), 3);
        assert!(!interval.is_negative());
    }

    #[test]
    fn between_one_second() {
        let interval = Interval::between(
            instant(1970, 1, 1, 23, 0, 0),
            instant(1970, 1, 1, 23, 0, 1),
            false,
        );
        assert!(interval.years() == 0 && interval.months() == 0 && interval.hours() == 0);
        assert_eq!(interval.seconds(), 1);
        assert_eq!(interval.total_days(), Some(0));
        assert_eq!(interval.elapsed_seconds(), Some(Seconds::new(1.0)));
    }

    #[test]
    fn between_negative_and_absolute() {
        let later = instant(2018, 1, 2, 0, 0, 0);
        let earlier = instant(2018, 1, 1, 0, 0, 0);

        let negative = Interval::between(later, earlier, false);
        assert!(negative.is_negative());
        assert_eq!(negative.days(), 1);
        assert_eq!(negative.elapsed_days(), Some(Days::new(-1.0)));

        let absolute = Interval::between(later, earlier, true);
        assert!(!absolute.is_negative());
        assert_eq!(absolute.total_days(), Some(1));
        assert_eq!(absolute.elapsed_days(), Some(Days::new(1.0)));
    }

    #[test]
    fn between_then_apply_reaches_target() {
        let from = instant(2018, 1, 31, 10, 0, 0);
        let to = instant(2018, 3, 1, 9, 30, 15);
        let interval = Interval::between(from, to, false);
        assert_eq!(interval.apply(from, false), Some(to));
    }

    #[test]
    fn builders_drop_elapsed_span() {
        let interval = Interval::between(
            instant(2018, 1, 1, 0, 0, 0),
            instant(2018, 1, 2, 0, 0, 0),
            false,
        );
        assert!(interval.total_days().is_some());
        assert!(interval.with_hours(1).total_days().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_iso8601() {
        let interval = Interval::new().with_days(1).with_hours(2);
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, "\"P1DT2H\"");
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}
