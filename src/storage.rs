// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bridge between local values and string columns of a storage engine.
//!
//! A [`StorageEngine`] decides, per [`Kind`], the format string values are
//! stored with. A [`Column<K>`] converts in both directions through that
//! format: a value of another kind is rejected with
//! [`ConversionError::InvalidType`] on the way in, and a stored string that
//! does not match is rejected with [`ConversionError::FormatMismatch`] on the
//! way out. `None` (SQL `NULL`) passes through both ways.
//!
//! ```
//! use local_temporal::storage::{AnsiSql, LocalDateTimeColumn, Temporal};
//! use local_temporal::LocalDateTime;
//!
//! let column = LocalDateTimeColumn::new();
//! let value = LocalDateTime::create(1986, 1, 25, 13, 37, 0)?;
//!
//! let stored = column.to_storage_value(Some(&Temporal::from(value)), &AnsiSql)?;
//! assert_eq!(stored.as_deref(), Some("1986-01-25 13:37:00"));
//!
//! let loaded = column.from_storage_value(stored.as_deref(), &AnsiSql)?;
//! assert_eq!(loaded, Some(value));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::ConversionError;
use crate::kinds::{DateKind, DateTimeKind, Kind, TemporalKind, TimeKind};
use crate::local::Local;
use chrono::{DateTime, Utc};
use std::fmt;
use std::marker::PhantomData;

// ═══════════════════════════════════════════════════════════════════════════
// Engines
// ═══════════════════════════════════════════════════════════════════════════

/// A storage engine's textual formats for temporal columns.
pub trait StorageEngine {
    /// Human-readable engine name, for logs.
    fn name(&self) -> &str;

    /// Format string, in this crate's directive alphabet, used to store
    /// values of `kind`.
    fn format(&self, kind: Kind) -> &str;
}

/// ANSI SQL literals: `1986-01-25`, `13:37:00` and `1986-01-25 13:37:00`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AnsiSql;

impl AnsiSql {
    pub const DATE_FORMAT: &'static str = "Y-m-d";
    pub const TIME_FORMAT: &'static str = "H:i:s";
    pub const DATE_TIME_FORMAT: &'static str = "Y-m-d H:i:s";
}

impl StorageEngine for AnsiSql {
    fn name(&self) -> &str {
        "ansi"
    }

    fn format(&self, kind: Kind) -> &str {
        match kind {
            Kind::Date => Self::DATE_FORMAT,
            Kind::Time => Self::TIME_FORMAT,
            Kind::DateTime => Self::DATE_TIME_FORMAT,
        }
    }
}

/// An engine with caller-supplied formats.
///
/// Starts from the [`AnsiSql`] formats; override them per kind.
///
/// ```
/// use local_temporal::storage::{CustomEngine, StorageEngine};
/// use local_temporal::Kind;
///
/// let engine = CustomEngine::new("legacy").with_format(Kind::Date, "d/m/Y");
/// assert_eq!(engine.format(Kind::Date), "d/m/Y");
/// assert_eq!(engine.format(Kind::Time), "H:i:s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEngine {
    name: String,
    date: String,
    time: String,
    date_time: String,
}

impl CustomEngine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: AnsiSql::DATE_FORMAT.to_owned(),
            time: AnsiSql::TIME_FORMAT.to_owned(),
            date_time: AnsiSql::DATE_TIME_FORMAT.to_owned(),
        }
    }

    /// Replace the storage format for `kind`.
    pub fn with_format(mut self, kind: Kind, format: impl Into<String>) -> Self {
        let slot = match kind {
            Kind::Date => &mut self.date,
            Kind::Time => &mut self.time,
            Kind::DateTime => &mut self.date_time,
        };
        *slot = format.into();
        self
    }
}

impl StorageEngine for CustomEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self, kind: Kind) -> &str {
        match kind {
            Kind::Date => &self.date,
            Kind::Time => &self.time,
            Kind::DateTime => &self.date_time,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Temporal: any local value
// ═══════════════════════════════════════════════════════════════════════════

/// A local value of any kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Temporal {
    Date(Local<DateKind>),
    Time(Local<TimeKind>),
    DateTime(Local<DateTimeKind>),
}

impl Temporal {
    pub const fn kind(&self) -> Kind {
        match self {
            Temporal::Date(_) => Kind::Date,
            Temporal::Time(_) => Kind::Time,
            Temporal::DateTime(_) => Kind::DateTime,
        }
    }

    pub const fn instant(&self) -> DateTime<Utc> {
        match self {
            Temporal::Date(value) => value.instant(),
            Temporal::Time(value) => value.instant(),
            Temporal::DateTime(value) => value.instant(),
        }
    }

    /// The wrapped value, if it is of kind `K`.
    pub fn get<K: TemporalKind>(&self) -> Option<Local<K>> {
        (self.kind() == K::KIND).then(|| Local::from_instant(self.instant()))
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Date(value) => fmt::Display::fmt(value, f),
            Temporal::Time(value) => fmt::Display::fmt(value, f),
            Temporal::DateTime(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl From<Local<DateKind>> for Temporal {
    fn from(value: Local<DateKind>) -> Self {
        Temporal::Date(value)
    }
}

impl From<Local<TimeKind>> for Temporal {
    fn from(value: Local<TimeKind>) -> Self {
        Temporal::Time(value)
    }
}

impl From<Local<DateTimeKind>> for Temporal {
    fn from(value: Local<DateTimeKind>) -> Self {
        Temporal::DateTime(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Column<K>
// ═══════════════════════════════════════════════════════════════════════════

/// Column type name registered for `kind`.
pub const fn column_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Date => "localdate",
        Kind::Time => "localtime",
        Kind::DateTime => "localdatetime",
    }
}

/// A column holding values of kind `K`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Column<K: TemporalKind> {
    _kind: PhantomData<K>,
}

/// Column of [`LocalDate`](crate::LocalDate) values.
pub type LocalDateColumn = Column<DateKind>;
/// Column of [`LocalTime`](crate::LocalTime) values.
pub type LocalTimeColumn = Column<TimeKind>;
/// Column of [`LocalDateTime`](crate::LocalDateTime) values.
pub type LocalDateTimeColumn = Column<DateTimeKind>;

impl<K: TemporalKind> Default for Column<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TemporalKind> Column<K> {
    pub const NAME: &'static str = column_name(K::KIND);

    #[inline]
    pub const fn new() -> Self {
        Self { _kind: PhantomData }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Render `value` in the engine's format for `K`.
    pub fn to_storage_value(
        &self,
        value: Option<&Temporal>,
        engine: &dyn StorageEngine,
    ) -> Result<Option<String>, ConversionError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let local = value.get::<K>().ok_or_else(|| {
            debug!(
                "{} column rejected a {} value",
                Self::NAME,
                value.kind()
            );
            ConversionError::InvalidType {
                column: Self::NAME,
                expected: K::KIND,
                found: value.kind(),
            }
        })?;
        Ok(Some(local.format(engine.format(K::KIND))))
    }

    /// Parse a stored string with the engine's format for `K`.
    pub fn from_storage_value(
        &self,
        value: Option<&str>,
        engine: &dyn StorageEngine,
    ) -> Result<Option<Local<K>>, ConversionError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let format = engine.format(K::KIND);
        Local::from_format(format, value).map(Some).map_err(|err| {
            debug!(
                "{} column could not load {value:?} from {}: {err}",
                Self::NAME,
                engine.name()
            );
            ConversionError::FormatMismatch {
                value: value.to_owned(),
                column: Self::NAME,
                format: format.to_owned(),
            }
        })
    }
}
