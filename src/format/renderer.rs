// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use super::alphabet::alphabet;
use super::directive::{compute, lookup};
use crate::kinds::Kind;
use chrono::{DateTime, Utc};

/// Prefix every directive `kind` must not expose with a backslash.
///
/// Existing `\x` pairs are copied through untouched, so an escape written by
/// the caller is never doubled.
pub fn escape_output(format: &str, kind: Kind) -> String {
    let table = alphabet(kind);
    let mut escaped = String::with_capacity(format.len());
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            escaped.push(c);
            if let Some(next) = chars.next() {
                escaped.push(next);
            }
        } else if table.escapes(c) {
            escaped.push('\\');
            escaped.push(c);
        } else {
            escaped.push(c);
        }
    }
    if escaped.len() != format.len() {
        trace!("{kind} escaped output format {format:?} as {escaped:?}");
    }
    escaped
}

/// Expand every directive of `format` for `instant`.
///
/// Characters that are not directives are copied literally, `\x` prints `x`
/// and a trailing lone backslash prints itself.
fn expand(format: &str, instant: &DateTime<Utc>) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
            continue;
        }
        match lookup(c) {
            Some(directive) => out.push_str(&compute(directive, instant)),
            None => out.push(c),
        }
    }
    out
}

/// Render `instant` through `format` for `kind`.
///
/// Render formats are never rejected. Directives for information `kind` does
/// not carry (a year for a time, an hour for a date, any offset) are printed
/// as literal characters instead of being expanded.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use local_temporal::format::render;
/// use local_temporal::Kind;
///
/// let instant = Utc.with_ymd_and_hms(1970, 1, 1, 23, 0, 0).unwrap();
/// assert_eq!(render(Kind::Time, &instant, "Y H:i:s"), "Y 23:00:00");
/// ```
pub fn render(kind: Kind, instant: &DateTime<Utc>, format: &str) -> String {
    expand(&escape_output(format, kind), instant)
}
