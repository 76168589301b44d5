// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local Temporal
//!
//! Timezone-naive dates, times of day and date-times, parsed from and
//! rendered through caller-supplied format strings.
//!
//! # Core types
//!
//! - [`Local<K>`]: generic value parameterised by a [`TemporalKind`] marker.
//! - [`TemporalKind`]: trait that defines a kind (runtime tag + normalization).
//! - [`LocalDate`]: type alias for `Local<DateKind>`.
//! - [`LocalTime`]: type alias for `Local<TimeKind>`.
//! - [`LocalDateTime`]: type alias for `Local<DateTimeKind>`.
//! - [`Interval`]: calendar-aware span used by arithmetic and `diff`.
//!
//! # Kinds
//!
//! | Marker | Kind | Carries |
//! |--------|------|---------|
//! | [`DateKind`] | [`Kind::Date`] | calendar day |
//! | [`TimeKind`] | [`Kind::Time`] | time of day |
//! | [`DateTimeKind`] | [`Kind::DateTime`] | both |
//!
//! # Format strings
//!
//! Each kind only accepts input formats made of directives it carries, and
//! prints the directives it does not carry as literal text. See [`format`]
//! for the directive table.
//!
//! ```
//! use local_temporal::{Error, Kind, LocalDate, LocalTime};
//!
//! let date = LocalDate::from_format("d/m/Y", "25/01/1986")?;
//! assert_eq!(date.format("l jS F"), "Saturday 25th January");
//! assert_eq!(date.format("Y-m-d H:i"), "1986-01-25 H:i");
//!
//! assert_eq!(
//!     LocalTime::from_format("Y-m-d", "1986-01-25"),
//!     Err(Error::InvalidFormat { format: "Y-m-d".into(), kind: Kind::Time })
//! );
//! # Ok::<(), Error>(())
//! ```
//!
//! # Bridges
//!
//! - [`storage`] converts values to and from the string columns of a storage
//!   engine.
//! - [`display`] renders values for a locale (feature `locales`).

#[macro_use]
mod logging;

mod error;
pub mod format;
mod interval;
mod kinds;
mod local;
mod relative;
pub mod storage;

#[cfg(feature = "locales")]
pub mod display;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{ConversionError, Error};
pub use interval::Interval;
pub use kinds::{DateKind, DateTimeKind, Kind, TemporalKind, TimeKind, REFERENCE_OFFSET};
pub use local::{DateFields, Local, TimeFields};

// ── Type aliases ──────────────────────────────────────────────────────────

/// A calendar day, such as a birthday.
///
/// This is a type alias for [`Local<DateKind>`]. The time of day is always
/// `00:00:00`.
pub type LocalDate = Local<DateKind>;

/// A time of day, such as an opening hour.
///
/// This is a type alias for [`Local<TimeKind>`]. The calendar day is always
/// `1970-01-01`, so arithmetic wraps around midnight.
pub type LocalTime = Local<TimeKind>;

/// A calendar day and a time of day, without an offset.
///
/// This is a type alias for [`Local<DateTimeKind>`].
pub type LocalDateTime = Local<DateTimeKind>;
