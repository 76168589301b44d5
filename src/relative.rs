// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Relative expressions accepted by [`Local::modify`](crate::Local::modify).
//!
//! An expression is a whitespace-separated sequence of terms, applied left
//! to right:
//!
//! * `[+|-]N unit [ago]`, where `unit` is one of `usec`, `msec`, `sec`,
//!   `min`, `hour`, `day`, `week`, `fortnight`, `month` or `year` (singular,
//!   plural and long forms such as `seconds` are accepted). `ago` flips the
//!   sign of the term before it.
//! * `now` (no change), `today` and `midnight` (time of day to `00:00:00`),
//!   `noon` (`12:00:00`), `tomorrow` and `yesterday` (midnight of the next or
//!   previous day).
//!
//! Matching is case-insensitive.

use crate::error::Error;
use crate::interval::Interval;
use crate::kinds::REFERENCE_OFFSET;
use chrono::{DateTime, NaiveTime, TimeZone, Utc};

/// One term of a relative expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Shift(Interval),
    SetTime(NaiveTime),
}

impl Step {
    pub(crate) fn apply(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Step::Shift(interval) => interval.apply(instant, false),
            Step::SetTime(time) => {
                Some(REFERENCE_OFFSET.from_utc_datetime(&instant.date_naive().and_time(*time)))
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Number { negative: bool, magnitude: u64 },
    Word(&'a str),
}

fn tokenize(expression: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = expression.trim_start();
    while !rest.is_empty() {
        let (negative, unsigned) = match rest.as_bytes()[0] {
            b'+' => (false, &rest[1..]),
            b'-' => (true, &rest[1..]),
            _ => (false, rest),
        };
        let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            tokens.push(Token::Number {
                negative,
                magnitude: unsigned[..digits].parse().ok()?,
            });
            rest = &unsigned[digits..];
        } else if unsigned.len() != rest.len() {
            // a sign without digits
            return None;
        } else {
            let letters = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
            if letters == 0 {
                return None;
            }
            tokens.push(Token::Word(&rest[..letters]));
            rest = &rest[letters..];
        }
        rest = rest.trim_start();
    }
    Some(tokens)
}

fn shift(magnitude: u64, unit: &str) -> Option<Interval> {
    let interval = Interval::new();
    let interval = match unit {
        "usec" | "usecs" | "microsecond" | "microseconds" => interval.with_microseconds(magnitude),
        "msec" | "msecs" | "millisecond" | "milliseconds" => {
            interval.with_microseconds(magnitude.checked_mul(1_000)?)
        }
        "sec" | "secs" | "second" | "seconds" => interval.with_seconds(magnitude),
        "min" | "mins" | "minute" | "minutes" => interval.with_minutes(magnitude),
        "hour" | "hours" => interval.with_hours(magnitude),
        "day" | "days" => interval.with_days(magnitude),
        "week" | "weeks" => interval.with_days(magnitude.checked_mul(7)?),
        "fortnight" | "fortnights" => interval.with_days(magnitude.checked_mul(14)?),
        "month" | "months" => interval.with_months(u32::try_from(magnitude).ok()?),
        "year" | "years" => interval.with_years(u32::try_from(magnitude).ok()?),
        _ => return None,
    };
    Some(interval)
}

fn steps(expression: &str) -> Option<Vec<Step>> {
    let lowered = expression.to_ascii_lowercase();
    let tokens = tokenize(&lowered)?;
    if tokens.is_empty() {
        return None;
    }

    let midnight = NaiveTime::MIN;
    let one_day = Interval::new().with_days(1);
    let mut steps = Vec::new();
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        match token {
            Token::Number {
                negative,
                magnitude,
            } => {
                let Some(Token::Word(unit)) = tokens.next() else {
                    return None;
                };
                let mut interval = shift(magnitude, unit)?;
                if negative {
                    interval = interval.negated();
                }
                if tokens.next_if_eq(&Token::Word("ago")).is_some() {
                    interval = interval.negated();
                }
                steps.push(Step::Shift(interval));
            }
            Token::Word("now") => {}
            Token::Word("today" | "midnight") => steps.push(Step::SetTime(midnight)),
            Token::Word("noon") => steps.push(Step::SetTime(NaiveTime::from_hms_opt(12, 0, 0)?)),
            Token::Word("tomorrow") => {
                steps.push(Step::SetTime(midnight));
                steps.push(Step::Shift(one_day));
            }
            Token::Word("yesterday") => {
                steps.push(Step::SetTime(midnight));
                steps.push(Step::Shift(one_day.negated()));
            }
            Token::Word(_) => return None,
        }
    }
    Some(steps)
}

/// Parse a relative expression.
pub(crate) fn parse(expression: &str) -> Result<Vec<Step>, Error> {
    steps(expression).ok_or_else(|| {
        debug!("rejected relative expression {expression:?}");
        Error::InvalidModifier {
            expression: expression.to_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(expression: &str, instant: DateTime<Utc>) -> DateTime<Utc> {
        parse(expression)
            .unwrap()
            .iter()
            .try_fold(instant, |acc, step| step.apply(acc))
            .unwrap()
    }

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn tokenizes_signed_terms() {
        assert_eq!(
            tokenize("+1 day -2hours").unwrap(),
            vec![
                Token::Number {
                    negative: false,
                    magnitude: 1
                },
                Token::Word("day"),
                Token::Number {
                    negative: true,
                    magnitude: 2
                },
                Token::Word("hours"),
            ]
        );
    }

    #[test]
    fn single_terms() {
        let start = instant(2018, 1, 1, 23, 0, 0);
        let cases = [
            ("+1 day", instant(2018, 1, 2, 23, 0, 0)),
            ("+23 hours", instant(2018, 1, 2, 22, 0, 0)),
            ("+24 hours", instant(2018, 1, 2, 23, 0, 0)),
            ("-1 second", instant(2018, 1, 1, 22, 59, 59)),
            ("-1 day", instant(2017, 12, 31, 23, 0, 0)),
            ("2 weeks", instant(2018, 1, 15, 23, 0, 0)),
            ("1 fortnight ago", instant(2017, 12, 18, 23, 0, 0)),
            ("+1 month", instant(2018, 2, 1, 23, 0, 0)),
            ("-1 year", instant(2017, 1, 1, 23, 0, 0)),
            ("90 MIN", instant(2018, 1, 2, 0, 30, 0)),
        ];
        for (expression, expected) in cases {
            assert_eq!(apply_all(expression, start), expected, "{expression}");
        }
    }

    #[test]
    fn keywords() {
        let start = instant(2018, 1, 1, 23, 0, 0);
        assert_eq!(apply_all("now", start), start);
        assert_eq!(apply_all("midnight", start), instant(2018, 1, 1, 0, 0, 0));
        assert_eq!(apply_all("today", start), instant(2018, 1, 1, 0, 0, 0));
        assert_eq!(apply_all("noon", start), instant(2018, 1, 1, 12, 0, 0));
        assert_eq!(apply_all("tomorrow", start), instant(2018, 1, 2, 0, 0, 0));
        assert_eq!(apply_all("yesterday noon", start), instant(2017, 12, 31, 12, 0, 0));
    }

    #[test]
    fn terms_compose_left_to_right() {
        let start = instant(2018, 1, 31, 12, 0, 0);
        assert_eq!(apply_all("+1 month +1 day", start), instant(2018, 3, 1, 12, 0, 0));
        assert_eq!(apply_all("+1 day +1 month", start), instant(2018, 3, 1, 12, 0, 0));
        assert_eq!(apply_all("-3 days ago", start), instant(2018, 2, 3, 12, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        for expression in ["", "   ", "+", "1", "+1 parsec", "next friday", "1 day 2", "+-1 day", "1 day!"] {
            assert_eq!(
                parse(expression),
                Err(Error::InvalidModifier {
                    expression: expression.to_owned()
                }),
                "{expression:?}"
            );
        }
    }
}
