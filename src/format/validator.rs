// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use super::alphabet::alphabet;
use crate::error::Error;
use crate::kinds::Kind;

/// Check that `format` only uses directives `kind` accepts on input.
///
/// A backslash escapes the following character, which is then accepted
/// whatever it is. Every other character must belong to the kind's allowed
/// input set. A trailing lone backslash is an unterminated escape.
///
/// # Examples
///
/// ```
/// use local_temporal::format::validate;
/// use local_temporal::Kind;
///
/// assert!(validate("Y-m-d", Kind::Date).is_ok());
/// assert!(validate("Y-m-d\\TH", Kind::Date).is_err());
/// assert!(validate("Y-m-d \\a\\t", Kind::Date).is_ok());
/// ```
pub fn validate(format: &str, kind: Kind) -> Result<(), Error> {
    let table = alphabet(kind);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        let accepted = if c == '\\' {
            chars.next().is_some()
        } else {
            table.allows(c)
        };
        if !accepted {
            debug!("{kind} rejected format {format:?} at {c:?}");
            return Err(Error::InvalidFormat {
                format: format.to_owned(),
                kind,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_formats_validate() {
        for kind in [Kind::Date, Kind::Time, Kind::DateTime] {
            assert_eq!(validate(kind.canonical_format(), kind), Ok(()));
        }
    }

    #[test]
    fn hour_directive_rejected_for_date() {
        let err = validate("H:i:s", Kind::Date).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFormat {
                format: "H:i:s".into(),
                kind: Kind::Date
            }
        );
    }

    #[test]
    fn year_directive_rejected_for_time() {
        assert!(validate("Y-m-d", Kind::Time).is_err());
    }

    #[test]
    fn zone_directive_rejected_for_date_time() {
        assert!(validate("e", Kind::DateTime).is_err());
        assert!(validate("Y-m-d H:i:s T", Kind::DateTime).is_err());
    }

    #[test]
    fn escapes_are_never_checked() {
        assert!(validate("\\H\\o\\u\\r", Kind::Date).is_ok());
        assert!(validate("Y\\\\", Kind::Date).is_ok());
    }

    #[test]
    fn unterminated_escape_is_rejected() {
        assert!(validate("Y-m-d\\", Kind::Date).is_err());
    }

    #[test]
    fn single_bad_character_fails_whole_format() {
        assert!(validate("Y-m-d#", Kind::Date).is_err());
        assert!(validate("#Y-m-d", Kind::Date).is_err());
    }

    #[test]
    fn empty_format_is_valid() {
        assert!(validate("", Kind::Time).is_ok());
    }

    #[test]
    fn non_ascii_characters_need_escaping() {
        assert!(validate("d é m", Kind::Date).is_err());
        assert!(validate("d \\é m", Kind::Date).is_ok());
    }
}
