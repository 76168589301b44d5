// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic kind-parameterised local value.
//!
//! [`Local<K>`] wraps a single instant anchored to the
//! [reference offset](crate::REFERENCE_OFFSET). What the instant *means* is
//! decided by the compile-time marker `K: TemporalKind`: parsing, rendering,
//! comparison, arithmetic and serialisation are implemented once,
//! generically, and every value is re-normalized for its kind after each
//! step.
//!
//! Methods that only make sense for some kinds live in the [`DateFields`]
//! and [`TimeFields`] traits and in inherent `impl` blocks gated on the
//! concrete marker.

use crate::error::Error;
use crate::format::{parse, render};
use crate::interval::Interval;
use crate::kinds::{DateKind, DateTimeKind, TemporalKind, TimeKind, REFERENCE_OFFSET};
use crate::relative;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc, Weekday,
};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Local<K>: the generic value
// ═══════════════════════════════════════════════════════════════════════════

/// A timezone-naive value of kind `K`.
///
/// The struct is `Copy` and its marker is zero-sized, so `Local<K>` is
/// layout-identical to `DateTime<Utc>`. Equality, ordering and hashing
/// compare the normalized instants.
///
/// # Examples
///
/// ```
/// use local_temporal::{LocalDate, LocalTime};
///
/// let date = LocalDate::from_format("l, F j, Y", "Monday, January 1, 2018")?;
/// assert_eq!(date.to_string(), "2018-01-01");
///
/// let time = LocalTime::create(23, 0, 0)?;
/// assert_eq!(time.format("l, F j, Y H:i:s"), "l, F j, Y 23:00:00");
/// # Ok::<(), local_temporal::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Local<K: TemporalKind> {
    instant: DateTime<Utc>,
    _kind: PhantomData<K>,
}

impl<K: TemporalKind> Local<K> {
    // ── constructors ──────────────────────────────────────────────────

    /// The only way a value comes into existence: normalize for `K`.
    #[inline]
    pub(crate) fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            instant: K::normalize(instant),
            _kind: PhantomData,
        }
    }

    /// Parse `input` against `format`.
    ///
    /// Fails with [`Error::InvalidFormat`] if `format` uses a directive `K`
    /// does not carry, and with [`Error::NoMatch`] if `input` does not match.
    pub fn from_format(format: &str, input: &str) -> Result<Self, Error> {
        parse(K::KIND, format, input).map(Self::from_instant)
    }

    /// Take the wall-clock fields of `value`, dropping its offset.
    ///
    /// Subsecond precision is dropped as well: the fields go through the
    /// canonical format.
    pub fn from_date_time<Tz: TimeZone>(value: &DateTime<Tz>) -> Result<Self, Error> {
        Self::from_naive(&value.naive_local())
    }

    /// Build from a naive chrono value, through the canonical format.
    pub fn from_naive(value: &NaiveDateTime) -> Result<Self, Error> {
        let instant = REFERENCE_OFFSET.from_utc_datetime(value);
        let canonical = render(K::KIND, &instant, K::CANONICAL_FORMAT);
        Self::from_format(K::CANONICAL_FORMAT, &canonical)
    }

    /// The current wall clock in UTC.
    pub fn now() -> Result<Self, Error> {
        Self::from_date_time(&Utc::now())
    }

    /// The current wall clock at `offset`.
    pub fn now_in(offset: FixedOffset) -> Result<Self, Error> {
        Self::from_date_time(&Utc::now().with_timezone(&offset))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The normalized instant, anchored to the reference offset.
    ///
    /// Only meant for bridges such as the locale formatter; the offset carries
    /// no meaning.
    #[inline]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Render through `format`.
    ///
    /// Directives for information `K` does not carry are printed literally.
    pub fn format(&self, format: &str) -> String {
        render(K::KIND, &self.instant, format)
    }

    // ── comparison ────────────────────────────────────────────────────

    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Add `interval`, re-normalizing the result.
    ///
    /// ```
    /// use local_temporal::{Interval, LocalTime};
    ///
    /// let time = LocalTime::create(23, 0, 0)?;
    /// let later = time.checked_add(&Interval::new().with_hours(2))?;
    /// assert_eq!(later.to_string(), "01:00:00");
    /// # Ok::<(), local_temporal::Error>(())
    /// ```
    pub fn checked_add(&self, interval: &Interval) -> Result<Self, Error> {
        self.shift(interval, false)
    }

    /// Subtract `interval`, re-normalizing the result.
    pub fn checked_sub(&self, interval: &Interval) -> Result<Self, Error> {
        self.shift(interval, true)
    }

    fn shift(&self, interval: &Interval, subtract: bool) -> Result<Self, Error> {
        interval
            .apply(self.instant, subtract)
            .map(Self::from_instant)
            .ok_or(Error::OutOfRange { kind: K::KIND })
    }

    /// Apply a relative expression such as `"+1 day"` or `"yesterday noon"`.
    ///
    /// The expression runs on the full instant and the result is normalized
    /// once, so `"+24 hours"` moves a date by one day while `"+23 hours"`
    /// leaves it unchanged.
    pub fn modify(&self, expression: &str) -> Result<Self, Error> {
        relative::parse(expression)?
            .iter()
            .try_fold(self.instant, |instant, step| step.apply(instant))
            .map(Self::from_instant)
            .ok_or(Error::OutOfRange { kind: K::KIND })
    }

    /// The interval from `self` to `other`.
    ///
    /// Negative when `other` is earlier, unless `absolute` is set.
    pub fn diff(&self, other: &Self, absolute: bool) -> Interval {
        Interval::between(self.instant, other.instant, absolute)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

impl<K: TemporalKind> fmt::Display for Local<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(K::CANONICAL_FORMAT))
    }
}

impl<K: TemporalKind> FromStr for Local<K> {
    type Err = Error;

    /// Parse the canonical form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_format(K::CANONICAL_FORMAT, s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K: TemporalKind> Serialize for Local<K> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: TemporalKind> Deserialize<'de> for Local<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<K: TemporalKind> Add<Interval> for Local<K> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result is out of range. Use
    /// [`checked_add`](Local::checked_add) to handle that case.
    #[inline]
    fn add(self, rhs: Interval) -> Self::Output {
        self.checked_add(&rhs)
            .expect("`Local + Interval` overflowed")
    }
}

impl<K: TemporalKind> AddAssign<Interval> for Local<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Interval) {
        *self = *self + rhs;
    }
}

impl<K: TemporalKind> Sub<Interval> for Local<K> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result is out of range. Use
    /// [`checked_sub`](Local::checked_sub) to handle that case.
    #[inline]
    fn sub(self, rhs: Interval) -> Self::Output {
        self.checked_sub(&rhs)
            .expect("`Local - Interval` overflowed")
    }
}

impl<K: TemporalKind> SubAssign<Interval> for Local<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Interval) {
        *self = *self - rhs;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Field getters
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar fields, for kinds that carry a date.
pub trait DateFields {
    fn year(&self) -> i32;
    /// Month, 1–12.
    fn month(&self) -> u32;
    /// Day of month, 1–31.
    fn day(&self) -> u32;
    fn weekday(&self) -> Weekday;
    /// Day of year, 1–366.
    fn ordinal(&self) -> u32;
}

/// Clock fields, for kinds that carry a time of day.
pub trait TimeFields {
    fn hour(&self) -> u32;
    fn minute(&self) -> u32;
    fn second(&self) -> u32;
    fn microsecond(&self) -> u32;
}

macro_rules! impl_date_fields {
    ($($kind:ty),*) => {$(
        impl DateFields for Local<$kind> {
            #[inline]
            fn year(&self) -> i32 {
                self.instant.year()
            }

            #[inline]
            fn month(&self) -> u32 {
                self.instant.month()
            }

            #[inline]
            fn day(&self) -> u32 {
                self.instant.day()
            }

            #[inline]
            fn weekday(&self) -> Weekday {
                self.instant.weekday()
            }

            #[inline]
            fn ordinal(&self) -> u32 {
                self.instant.ordinal()
            }
        }
    )*};
}

macro_rules! impl_time_fields {
    ($($kind:ty),*) => {$(
        impl TimeFields for Local<$kind> {
            #[inline]
            fn hour(&self) -> u32 {
                self.instant.hour()
            }

            #[inline]
            fn minute(&self) -> u32 {
                self.instant.minute()
            }

            #[inline]
            fn second(&self) -> u32 {
                self.instant.second()
            }

            #[inline]
            fn microsecond(&self) -> u32 {
                self.instant.timestamp_subsec_micros()
            }
        }
    )*};
}

impl_date_fields!(DateKind, DateTimeKind);
impl_time_fields!(TimeKind, DateTimeKind);

// ═══════════════════════════════════════════════════════════════════════════
// Kind-specific constructors
// ═══════════════════════════════════════════════════════════════════════════

impl Local<DateKind> {
    /// Build from calendar fields. Fails with [`Error::NoMatch`] for a day
    /// that does not exist.
    pub fn create(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        Self::from_str(&format!("{year:04}-{month:02}-{day:02}"))
    }
}

impl Local<TimeKind> {
    /// Build from clock fields.
    pub fn create(hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        Self::from_str(&format!("{hour:02}:{minute:02}:{second:02}"))
    }
}

impl Local<DateTimeKind> {
    /// Build from calendar and clock fields.
    pub fn create(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, Error> {
        Self::from_str(&format!(
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
        ))
    }

    /// Combine a date with a time of day.
    ///
    /// Both halves are joined through the canonical date-time form.
    pub fn from_date_and_time(
        date: Local<DateKind>,
        time: Local<TimeKind>,
    ) -> Result<Self, Error> {
        Self::from_str(&format!("{date}T{time}"))
    }

    /// The calendar day, re-parsed from its canonical form.
    pub fn to_date(&self) -> Result<Local<DateKind>, Error> {
        Local::from_format(
            DateKind::CANONICAL_FORMAT,
            &self.format(DateKind::CANONICAL_FORMAT),
        )
    }

    /// The time of day, re-parsed from its canonical form. Subseconds are
    /// dropped.
    pub fn to_time(&self) -> Result<Local<TimeKind>, Error> {
        Local::from_format(
            TimeKind::CANONICAL_FORMAT,
            &self.format(TimeKind::CANONICAL_FORMAT),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
