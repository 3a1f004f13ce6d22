// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-code-point boolean predicates: the POSIX/Perl named ASCII classes and
//! a thin wrapper over a caller-supplied Unicode range table. These are
//! deliberately simple, stateless functions — the spec treats this
//! component as an external collaborator specified only at its interface.

use crate::error::Error;

pub fn is_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_ascii(c: char) -> bool {
    c.is_ascii()
}

pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_cntrl(c: char) -> bool {
    c.is_ascii_control()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_graph(c: char) -> bool {
    c.is_ascii_graphic()
}

pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_print(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

pub fn is_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_xdigit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// The names recognized by [`lookup_ascii_class`].
pub const ASCII_CLASS_NAMES: &[&str] = &[
    "alnum", "alpha", "ascii", "blank", "cntrl", "digit", "graph", "lower", "print", "punct",
    "space", "upper", "word", "xdigit",
];

/// Dispatch a named ASCII class to its predicate. Unknown names are a
/// construction-time error.
pub fn lookup_ascii_class(name: &str) -> Result<fn(char) -> bool, Error> {
    match name {
        "alnum" => Ok(is_alnum),
        "alpha" => Ok(is_alpha),
        "ascii" => Ok(is_ascii),
        "blank" => Ok(is_blank),
        "cntrl" => Ok(is_cntrl),
        "digit" => Ok(is_digit),
        "graph" => Ok(is_graph),
        "lower" => Ok(is_lower),
        "print" => Ok(is_print),
        "punct" => Ok(is_punct),
        "space" => Ok(is_space),
        "upper" => Ok(is_upper),
        "word" => Ok(is_word),
        "xdigit" => Ok(is_xdigit),
        other => Err(Error::UnknownClass(other.to_string())),
    }
}

/// An immutable wrapper over a caller-supplied Unicode range table: a
/// sorted slice of inclusive `(low, high)` code point ranges.
///
/// The engine ships no Unicode category data itself (spec §4.3: "Wrap a
/// caller-supplied immutable Unicode range table"); callers bring their own
/// table, e.g. from `unicode_categories` or a hand-written table of
/// script/block ranges.
#[derive(Clone, Debug)]
pub struct UnicodeRangeTable {
    ranges: Vec<(char, char)>,
}

impl UnicodeRangeTable {
    pub fn new(mut ranges: Vec<(char, char)>) -> UnicodeRangeTable {
        ranges.sort_by_key(|&(lo, _)| lo);
        UnicodeRangeTable { ranges }
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if c < lo {
                    std::cmp::Ordering::Greater
                } else if c > hi {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_classes_are_ascii_scoped() {
        assert!(is_alpha('a'));
        assert!(!is_alpha('é'));
        assert!(is_word('_'));
        assert!(!is_word('-'));
        assert!(is_space('\n'));
        assert!(is_xdigit('f'));
        assert!(!is_xdigit('g'));
    }

    #[test]
    fn unknown_class_errors() {
        assert!(lookup_ascii_class("nope").is_err());
        assert!(lookup_ascii_class("digit").is_ok());
    }

    #[test]
    fn unicode_range_table_lookup() {
        let table = UnicodeRangeTable::new(vec![('a', 'f'), ('0', '9')]);
        assert!(table.contains('c'));
        assert!(table.contains('5'));
        assert!(!table.contains('z'));
    }
}
