// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use super::directive::{lookup, Directive};
use super::validator::validate;
use crate::error::Error;
use crate::kinds::{Kind, REFERENCE_OFFSET};
use chrono::format::{parse_and_remainder, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Characters `*` stops at.
const STOP_CHARS: &str = "\t ;:/.,-()";

/// One step of a parse plan.
#[derive(Debug, PartialEq, Eq)]
enum Segment {
    /// A strftime pattern handed to chrono.
    Items(String),
    /// `?`: any single character.
    AnyChar,
    /// `*`: everything up to the next separator or digit.
    SkipToSeparator,
    /// `S`: an English ordinal suffix.
    OrdinalSuffix,
    /// `u`, `v`: a fraction of a second of one up to this many digits.
    Fraction(usize),
    /// `+`: ignore whatever input remains.
    IgnoreTrailing,
}

/// Which fields a format mentions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Fields {
    year: bool,
    month: bool,
    day: bool,
    ordinal: bool,
    hour24: bool,
    hour12: bool,
    meridiem: bool,
    minute: bool,
    second: bool,
}

impl Fields {
    fn record(&mut self, c: char) {
        match c {
            'Y' | 'y' => self.year = true,
            'm' | 'n' | 'F' | 'M' => self.month = true,
            'd' | 'j' => self.day = true,
            'z' => self.ordinal = true,
            'G' | 'H' => self.hour24 = true,
            'g' | 'h' => self.hour12 = true,
            'a' | 'A' => self.meridiem = true,
            'i' => self.minute = true,
            's' => self.second = true,
            _ => {}
        }
    }
}

#[derive(Debug, Default)]
struct Plan {
    segments: Vec<Segment>,
    fields: Fields,
}

impl Plan {
    /// Translate an already validated format. `None` if it uses a directive
    /// that has no input meaning.
    fn build(format: &str) -> Option<Self> {
        let mut plan = Plan::default();
        let mut pattern = String::new();
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            let control = match c {
                '\\' => {
                    push_literal(&mut pattern, chars.next()?);
                    continue;
                }
                '?' => Some(Segment::AnyChar),
                '*' => Some(Segment::SkipToSeparator),
                '+' => Some(Segment::IgnoreTrailing),
                '!' | '|' => None,
                'u' => Some(Segment::Fraction(6)),
                'v' => Some(Segment::Fraction(3)),
                _ => match lookup(c) {
                    Some(Directive::Strftime(fragment)) => {
                        plan.fields.record(c);
                        pattern.push_str(fragment);
                        continue;
                    }
                    Some(Directive::OrdinalSuffix) => Some(Segment::OrdinalSuffix),
                    Some(_) => return None,
                    None => {
                        push_literal(&mut pattern, c);
                        continue;
                    }
                },
            };
            // Everything below is a control character that ends the current
            // chrono pattern.
            if !pattern.is_empty() {
                plan.segments
                    .push(Segment::Items(std::mem::take(&mut pattern)));
            }
            if let Some(segment) = control {
                plan.segments.push(segment);
            }
        }
        if !pattern.is_empty() {
            plan.segments.push(Segment::Items(pattern));
        }
        Some(plan)
    }

    /// Run the plan over `input`, returning the parsed fields.
    fn run(&self, input: &str) -> Option<Parsed> {
        let mut parsed = Parsed::new();
        let mut rest = input;

        for segment in &self.segments {
            rest = match segment {
                Segment::Items(pattern) => {
                    parse_and_remainder(&mut parsed, rest, StrftimeItems::new(pattern)).ok()?
                }
                Segment::AnyChar => {
                    let mut chars = rest.chars();
                    chars.next()?;
                    chars.as_str()
                }
                Segment::SkipToSeparator => {
                    let end = rest
                        .find(|c: char| STOP_CHARS.contains(c) || c.is_ascii_digit())
                        .unwrap_or(rest.len());
                    &rest[end..]
                }
                Segment::OrdinalSuffix => ["st", "nd", "rd", "th"]
                    .into_iter()
                    .find_map(|suffix| rest.strip_prefix(suffix))?,
                Segment::Fraction(width) => {
                    let len = rest
                        .bytes()
                        .take(*width)
                        .take_while(u8::is_ascii_digit)
                        .count();
                    if len == 0 {
                        return None;
                    }
                    let digits: i64 = rest[..len].parse().ok()?;
                    parsed.set_nanosecond(digits * 10i64.pow(9 - len as u32)).ok()?;
                    &rest[len..]
                }
                Segment::IgnoreTrailing => return Some(parsed),
            };
        }
        rest.is_empty().then_some(parsed)
    }
}

fn push_literal(pattern: &mut String, c: char) {
    if c == '%' {
        pattern.push_str("%%");
    } else {
        pattern.push(c);
    }
}

/// Fill the fields the format did not mention with the epoch's.
///
/// `Parsed::set_*` only fails when the field already holds a different value,
/// which cannot happen for a field the format never touched.
fn apply_defaults(parsed: &mut Parsed, fields: Fields) -> ParseResult<()> {
    if !fields.year {
        parsed.set_year(1970)?;
    }
    if !fields.ordinal {
        if !fields.month {
            parsed.set_month(1)?;
        }
        if !fields.day {
            parsed.set_day(1)?;
        }
    }
    if !fields.hour24 && !fields.hour12 {
        if fields.meridiem {
            parsed.set_hour12(12)?;
        } else {
            parsed.set_hour(0)?;
        }
    } else if fields.hour12 && !fields.hour24 && !fields.meridiem {
        parsed.set_ampm(false)?;
    }
    if !fields.minute {
        parsed.set_minute(0)?;
    }
    if !fields.second {
        parsed.set_second(0)?;
    }
    Ok(())
}

fn resolve(mut parsed: Parsed, fields: Fields) -> Option<DateTime<Utc>> {
    apply_defaults(&mut parsed, fields).ok()?;
    let date = parsed.to_naive_date().ok()?;
    let time = parsed.to_naive_time().ok()?;
    // chrono folds a leap second into the nanosecond field.
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(REFERENCE_OFFSET.from_utc_datetime(&date.and_time(time)))
}

/// Parse `input` against `format` for `kind`.
///
/// The format is validated first, so a directive the kind does not carry is
/// rejected before any input is looked at. Fields the format does not mention
/// default to `1970-01-01 00:00:00`; a 12-hour directive without a meridiem
/// is read as AM. Parsing is all-or-nothing.
///
/// The returned instant is not normalized for `kind`; that is the job of the
/// value types.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if `format` fails validation, and
/// [`Error::NoMatch`] if `input` does not conform to it.
///
/// # Examples
///
/// ```
/// use local_temporal::format::parse;
/// use local_temporal::Kind;
///
/// let instant = parse(Kind::Date, "l, F j, Y", "Monday, January 1, 2018")?;
/// assert_eq!(instant.to_rfc3339(), "2018-01-01T00:00:00+00:00");
///
/// assert!(parse(Kind::Date, "H", "23").is_err());
/// # Ok::<(), local_temporal::Error>(())
/// ```
pub fn parse(kind: Kind, format: &str, input: &str) -> Result<DateTime<Utc>, Error> {
    validate(format, kind)?;

    let instant = Plan::build(format).and_then(|plan| {
        let parsed = plan.run(input)?;
        resolve(parsed, plan.fields)
    });

    instant.ok_or_else(|| {
        debug!("{kind} input {input:?} does not match {format:?}");
        Error::NoMatch {
            input: input.to_owned(),
            format: format.to_owned(),
        }
    })
}
