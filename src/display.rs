// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Locale-aware display of local values.
//!
//! A [`DisplayFormatter`] combines a [`Locale`] with a date style and a time
//! style. Layouts, names and field order come from the CLDR data compiled
//! into ICU4X, so each style reads the way the locale writes it.
//!
//! ```
//! use icu::locid::locale;
//! use local_temporal::display::{DisplayFormatter, DisplayStyle};
//! use local_temporal::LocalDate;
//!
//! let formatter = DisplayFormatter::date_formatter(locale!("fr-FR"), DisplayStyle::Full)?;
//! let date = LocalDate::create(2018, 1, 1)?;
//! assert_eq!(formatter.format(&date)?, "lundi 1 janvier 2018");
//! # Ok::<(), local_temporal::Error>(())
//! ```

use crate::error::Error;
use crate::kinds::TemporalKind;
use crate::local::Local;
use chrono::{Datelike, Timelike};
use icu::calendar::{gregorian::Gregorian, DateTime};
use icu::datetime::options::length;
use icu::datetime::{TimeFormatter, TypedDateFormatter, TypedDateTimeFormatter};
use icu::locid::Locale;
use icu_provider::DataLocale;
use std::fmt;

/// How much of a date or a time to show.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    /// Omit this half.
    None,
    /// `1/31/18`, `11:00 PM` in `en-US`.
    #[default]
    Short,
    /// `Jan 31, 2018`, `11:00:00 PM`.
    Medium,
    /// `January 31, 2018`.
    Long,
    /// `Wednesday, January 31, 2018`.
    Full,
}

impl DisplayStyle {
    const fn date_length(self) -> Option<length::Date> {
        match self {
            DisplayStyle::None => None,
            DisplayStyle::Short => Some(length::Date::Short),
            DisplayStyle::Medium => Some(length::Date::Medium),
            DisplayStyle::Long => Some(length::Date::Long),
            DisplayStyle::Full => Some(length::Date::Full),
        }
    }

    /// Long and full times name a zone, which local values do not have, so
    /// they stop at the medium layout.
    const fn time_length(self) -> Option<length::Time> {
        match self {
            DisplayStyle::None => None,
            DisplayStyle::Short => Some(length::Time::Short),
            DisplayStyle::Medium | DisplayStyle::Long | DisplayStyle::Full => {
                Some(length::Time::Medium)
            }
        }
    }
}

enum Layout {
    Date(TypedDateFormatter<Gregorian>),
    Time(TimeFormatter),
    DateTime(TypedDateTimeFormatter<Gregorian>),
}

/// Formats local values for a locale.
pub struct DisplayFormatter {
    locale: Locale,
    date_style: DisplayStyle,
    time_style: DisplayStyle,
    layout: Layout,
}

impl DisplayFormatter {
    /// Both styles set to [`DisplayStyle::None`] fall back to the short
    /// style for both halves.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedLocale`] if no data can be loaded for `locale`.
    pub fn new(
        locale: Locale,
        date_style: DisplayStyle,
        time_style: DisplayStyle,
    ) -> Result<Self, Error> {
        let data_locale = DataLocale::from(&locale);
        let (date, time) = match (date_style.date_length(), time_style.time_length()) {
            (None, None) => (Some(length::Date::Short), Some(length::Time::Short)),
            lengths => lengths,
        };
        let layout = match (date, time) {
            (Some(date), Some(time)) => TypedDateTimeFormatter::try_new(
                &data_locale,
                length::Bag::from_date_time_style(date, time).into(),
            )
            .map(Layout::DateTime),
            (Some(date), None) => {
                TypedDateFormatter::try_new_with_length(&data_locale, date).map(Layout::Date)
            }
            (None, time) => TimeFormatter::try_new_with_length(
                &data_locale,
                time.unwrap_or(length::Time::Short),
            )
            .map(Layout::Time),
        };
        let layout = layout.map_err(|err| {
            debug!("no display data for {locale}: {err:?}");
            Error::UnsupportedLocale {
                locale: locale.to_string(),
            }
        })?;
        Ok(Self {
            locale,
            date_style,
            time_style,
            layout,
        })
    }

    /// Dates only.
    pub fn date_formatter(locale: Locale, style: DisplayStyle) -> Result<Self, Error> {
        Self::new(locale, style, DisplayStyle::None)
    }

    /// Times of day only.
    pub fn time_formatter(locale: Locale, style: DisplayStyle) -> Result<Self, Error> {
        Self::new(locale, DisplayStyle::None, style)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub const fn date_style(&self) -> DisplayStyle {
        self.date_style
    }

    pub const fn time_style(&self) -> DisplayStyle {
        self.time_style
    }

    /// Render the instant behind `value`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the instant has no Gregorian representation
    /// in ICU4X.
    pub fn format<K: TemporalKind>(&self, value: &Local<K>) -> Result<String, Error> {
        let instant = value.instant();
        let out_of_range = || Error::OutOfRange { kind: K::KIND };
        let datetime = DateTime::try_new_gregorian_datetime(
            instant.year(),
            u8::try_from(instant.month()).map_err(|_| out_of_range())?,
            u8::try_from(instant.day()).map_err(|_| out_of_range())?,
            u8::try_from(instant.hour()).map_err(|_| out_of_range())?,
            u8::try_from(instant.minute()).map_err(|_| out_of_range())?,
            u8::try_from(instant.second()).map_err(|_| out_of_range())?,
        )
        .map_err(|_| out_of_range())?;

        Ok(match &self.layout {
            Layout::Date(formatter) => formatter.format(&datetime).to_string(),
            Layout::Time(formatter) => formatter.format(&datetime).to_string(),
            Layout::DateTime(formatter) => formatter.format(&datetime).to_string(),
        })
    }
}

impl fmt::Debug for DisplayFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayFormatter")
            .field("locale", &self.locale)
            .field("date_style", &self.date_style)
            .field("time_style", &self.time_style)
            .finish_non_exhaustive()
    }
}
