// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Format-string validation, parsing and rendering.
//!
//! Format strings use single-character directives. A backslash makes the
//! next character literal, and any character that is not a directive is a
//! literal as well.
//!
//! | Group | Directives |
//! |-------|------------|
//! | day | `d` 01–31, `j` 1–31, `D` Mon, `l` Monday, `N` ISO weekday 1–7, `S` st/nd/rd/th, `w` weekday 0–6, `z` day of year 001–366 (1-based) |
//! | week | `W` ISO week 01–53 |
//! | month | `F` January, `M` Jan, `m` 01–12, `n` 1–12, `t` days in month |
//! | year | `L` leap year 1/0, `o` ISO week-based year, `Y` 2018, `y` 18 |
//! | time | `a` am/pm, `A` AM/PM, `g` 1–12, `G` 0–23, `h` 01–12, `H` 00–23, `i` minutes, `s` seconds, `u` microseconds, `v` milliseconds |
//! | zone | `e`, `T` zone name, `I` DST flag, `O` +0000, `P` +00:00, `Z` offset seconds |
//! | full | `c` ISO 8601, `r` RFC 2822, `U` Unix seconds |
//!
//! Input formats may additionally use `?` (any character), `*` (anything up
//! to the next separator or digit), `!` and `|` (no-ops, since unparsed
//! fields always default to the epoch) and `+` (ignore trailing input).
//!
//! On input, `u` accepts one to six fraction digits and `v` one to three;
//! on output they always print six and three.
//!
//! Every [`Kind`](crate::Kind) restricts its input formats to the directives
//! it carries and neutralizes, on output, the directives it does not own.
//! See [`alphabet`].

mod alphabet;
mod directive;
mod parser;
mod renderer;
mod validator;

pub use alphabet::{alphabet, Alphabet};
pub use parser::parse;
pub use renderer::{escape_output, render};
pub use validator::validate;
