// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! [`Error`] covers everything the core can reject: format strings, inputs,
//! relative expressions, ISO 8601 durations, arithmetic overflow and
//! locale data.
//! [`ConversionError`] is only produced by the [`storage`](crate::storage)
//! bridge.

use crate::kinds::Kind;
use thiserror::Error;

/// Errors raised by parsing, validation and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The format string contains a directive the kind does not accept, or
    /// ends in an unterminated escape.
    #[error("format string {format:?} contains invalid characters for {kind}")]
    InvalidFormat { format: String, kind: Kind },

    /// The input does not conform to an otherwise valid format string.
    #[error("input string {input:?} does not match format string {format:?}")]
    NoMatch { input: String, format: String },

    /// A relative expression passed to `modify` could not be understood.
    #[error("invalid relative expression {expression:?}")]
    InvalidModifier { expression: String },

    /// An ISO 8601 duration could not be parsed.
    #[error("invalid ISO 8601 duration {input:?}")]
    InvalidInterval { input: String },

    /// Arithmetic left the representable range.
    #[error("{kind} arithmetic out of range")]
    OutOfRange { kind: Kind },

    /// No display data could be loaded for a locale.
    #[error("no display data for locale {locale:?}")]
    UnsupportedLocale { locale: String },
}

/// Errors raised by the storage bridge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The value handed to a column is a different temporal kind.
    #[error("could not convert {found} value to column type {column:?}, expected {expected}")]
    InvalidType {
        column: &'static str,
        expected: Kind,
        found: Kind,
    },

    /// The stored string does not match the engine's storage format.
    #[error("could not convert stored value {value:?} to column type {column:?}, expected format {format:?}")]
    FormatMismatch {
        value: String,
        column: &'static str,
        format: String,
    },
}
