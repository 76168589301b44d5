// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-kind directive tables.

use crate::kinds::Kind;

/// Characters accepted verbatim by every kind's input formats.
const SEPARATORS: &str = "\t ;:/.,-()?*!|+";

/// The two directive sets of one kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Alphabet {
    directives: &'static str,
    escape_on_output: &'static str,
}

impl Alphabet {
    /// Whether `c` may appear unescaped in an input format.
    #[inline]
    pub fn allows(&self, c: char) -> bool {
        self.directives.contains(c) || SEPARATORS.contains(c)
    }

    /// Whether `c` must be rendered literally in an output format.
    #[inline]
    pub fn escapes(&self, c: char) -> bool {
        self.escape_on_output.contains(c)
    }

    /// Directive characters accepted on input, without separators.
    pub const fn input_directives(&self) -> &'static str {
        self.directives
    }

    /// Directive characters neutralized on output.
    pub const fn output_escapes(&self) -> &'static str {
        self.escape_on_output
    }
}

const DATE: Alphabet = Alphabet {
    directives: "djDlSzFMmnYy",
    escape_on_output: "crUeIOPTZaABgGhHisuv",
};

const TIME: Alphabet = Alphabet {
    directives: "aAghGHisuv",
    escape_on_output: "crUeIOPTZLoYyFmMntWdDjlNSwz",
};

const DATE_TIME: Alphabet = Alphabet {
    directives: "djDlSzFMmnYyaAghGHisuv",
    escape_on_output: "crUeIOPTZ",
};

/// Directive tables for `kind`.
pub const fn alphabet(kind: Kind) -> &'static Alphabet {
    match kind {
        Kind::Date => &DATE,
        Kind::Time => &TIME,
        Kind::DateTime => &DATE_TIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_rejects_clock_directives() {
        let date = alphabet(Kind::Date);
        for c in "aAghGHisuv".chars() {
            assert!(!date.allows(c), "{c} accepted by Date");
            assert!(date.escapes(c), "{c} not escaped by Date");
        }
    }

    #[test]
    fn time_rejects_calendar_directives() {
        let time = alphabet(Kind::Time);
        for c in "djDlSzFMmnYy".chars() {
            assert!(!time.allows(c), "{c} accepted by Time");
            assert!(time.escapes(c), "{c} not escaped by Time");
        }
    }

    #[test]
    fn date_time_is_union_of_inputs() {
        let date_time = alphabet(Kind::DateTime);
        for c in alphabet(Kind::Date)
            .input_directives()
            .chars()
            .chain(alphabet(Kind::Time).input_directives().chars())
        {
            assert!(date_time.allows(c));
        }
    }

    #[test]
    fn allowed_and_escaped_are_disjoint() {
        for kind in [Kind::Date, Kind::Time, Kind::DateTime] {
            let table = alphabet(kind);
            for c in table.output_escapes().chars() {
                assert!(!table.allows(c), "{c} both allowed and escaped for {kind}");
            }
        }
    }

    #[test]
    fn zone_directives_are_escaped_everywhere() {
        for kind in [Kind::Date, Kind::Time, Kind::DateTime] {
            for c in "crUeIOPTZ".chars() {
                assert!(alphabet(kind).escapes(c));
            }
        }
    }

    #[test]
    fn separators_are_shared() {
        for kind in [Kind::Date, Kind::Time, Kind::DateTime] {
            for c in SEPARATORS.chars() {
                assert!(alphabet(kind).allows(c));
            }
        }
    }
}
