// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Temporal kind marker types.
//!
//! Each zero-sized type identifies one of the three temporal kinds and
//! encodes how an instant is normalized for it.
//!
//! | Marker | Kind | Canonical form | Normalization |
//! |--------|------|----------------|---------------|
//! | [`DateKind`] | [`Kind::Date`] | `YYYY-MM-DD` | time of day pinned to `00:00:00` |
//! | [`TimeKind`] | [`Kind::Time`] | `HH:MM:SS` | calendar day pinned to `1970-01-01` |
//! | [`DateTimeKind`] | [`Kind::DateTime`] | `YYYY-MM-DDTHH:MM:SS` | none |

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use std::fmt;

/// The fixed reference offset every instant is anchored to.
///
/// None of the temporal kinds reason about offsets; the anchor only exists so
/// that chrono's offset-aware formatting and arithmetic can be used.
pub const REFERENCE_OFFSET: Utc = Utc;

/// Runtime name of a temporal kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Date,
    Time,
    DateTime,
}

impl Kind {
    /// Canonical format string, in this crate's directive alphabet.
    pub const fn canonical_format(self) -> &'static str {
        match self {
            Kind::Date => "Y-m-d",
            Kind::Time => "H:i:s",
            Kind::DateTime => "Y-m-d\\TH:i:s",
        }
    }

    /// Name of the value type for this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Kind::Date => "LocalDate",
            Kind::Time => "LocalTime",
            Kind::DateTime => "LocalDateTime",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Marker trait for temporal kinds.
///
/// A kind defines:
///
/// 1. Its runtime [`Kind`], which keys the directive tables used by the
///    validator and the renderer.
/// 2. A normalization function that clamps the axis the kind does not
///    represent. It is applied on construction and after every arithmetic
///    step, never anywhere else.
pub trait TemporalKind:
    Copy + Clone + fmt::Debug + PartialEq + Eq + PartialOrd + Ord + std::hash::Hash + 'static
{
    /// Runtime kind.
    const KIND: Kind;

    /// Canonical format string.
    const CANONICAL_FORMAT: &'static str = Self::KIND.canonical_format();

    /// Clamp the axis this kind does not carry.
    fn normalize(instant: DateTime<Utc>) -> DateTime<Utc>;
}

/// Calendar day without a time of day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKind;

impl TemporalKind for DateKind {
    const KIND: Kind = Kind::Date;

    #[inline]
    fn normalize(instant: DateTime<Utc>) -> DateTime<Utc> {
        REFERENCE_OFFSET.from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN))
    }
}

/// Time of day without a calendar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeKind;

impl TemporalKind for TimeKind {
    const KIND: Kind = Kind::Time;

    #[inline]
    fn normalize(instant: DateTime<Utc>) -> DateTime<Utc> {
        let epoch_day = DateTime::<Utc>::UNIX_EPOCH.date_naive();
        REFERENCE_OFFSET.from_utc_datetime(&epoch_day.and_time(instant.time()))
    }
}

/// Calendar day and time of day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeKind;

impl TemporalKind for DateTimeKind {
    const KIND: Kind = Kind::DateTime;

    #[inline(always)]
    fn normalize(instant: DateTime<Utc>) -> DateTime<Utc> {
        instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn date_kind_drops_time_of_day() {
        let normalized = DateKind::normalize(instant(2018, 1, 1, 23, 59, 59));
        assert_eq!(normalized, instant(2018, 1, 1, 0, 0, 0));
    }

    #[test]
    fn time_kind_pins_epoch_day() {
        let normalized = TimeKind::normalize(instant(2018, 6, 15, 23, 0, 1));
        assert_eq!(normalized, instant(1970, 1, 1, 23, 0, 1));
    }

    #[test]
    fn time_kind_keeps_subseconds() {
        let with_micros = instant(2018, 6, 15, 1, 2, 3) + chrono::TimeDelta::microseconds(42);
        let normalized = TimeKind::normalize(with_micros);
        assert_eq!(normalized.time(), with_micros.time());
    }

    #[test]
    fn date_time_kind_is_identity() {
        let value = instant(2018, 1, 1, 23, 0, 0);
        assert_eq!(DateTimeKind::normalize(value), value);
    }

    #[test]
    fn canonical_formats() {
        assert_eq!(DateKind::CANONICAL_FORMAT, "Y-m-d");
        assert_eq!(TimeKind::CANONICAL_FORMAT, "H:i:s");
        assert_eq!(DateTimeKind::CANONICAL_FORMAT, "Y-m-d\\TH:i:s");
    }
}
