// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The zero-width anchors (spec §4.3): `Caret`, `Dollar`, `A`, `B`, `Z`.
//!
//! Every anchor here consumes zero code points whether it succeeds or
//! fails; negation simply inverts `proceed`.

use std::sync::Arc;

use crate::charclass::is_word;
use crate::codepoint::CodePointIndex;
use crate::flags::Flags;
use crate::matcher::{make_matcher, Matcher};
use crate::matches::SubMatch;
use crate::reps::Reps;

fn zero_width(test: impl Fn(Flags, &CodePointIndex, usize) -> bool + Send + Sync + 'static, flags: &[&str]) -> Matcher {
    let core: Matcher = Arc::new(move |scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, _caps: &[SubMatch]| {
        let mut proceed = test(scope, input, index);
        if scope.negated() {
            proceed = !proceed;
        }
        (scope, 0, proceed)
    });
    make_matcher(core, flags)
}

/// `Caret` (`^`) — start of input, or start of line under `Multiline`.
pub fn caret(flags: &[&str]) -> Matcher {
    zero_width(
        |scope, input, index| index == 0 || (scope.multiline() && input.prev(index).map(|cp| cp.ch) == Some('\n')),
        flags,
    )
}

/// `Dollar` (`$`) — end of input, or end of line under `Multiline`.
pub fn dollar(flags: &[&str]) -> Matcher {
    zero_width(
        |scope, input, index| input.end(index) || (scope.multiline() && input.get(index).map(|cp| cp.ch) == Some('\n')),
        flags,
    )
}

/// `A` (`\A`) — absolute start of input, regardless of `Multiline`.
pub fn a(flags: &[&str]) -> Matcher {
    zero_width(|_scope, _input, index| index == 0, flags)
}

/// `Z` (`\z`) — absolute end of input, regardless of `Multiline`.
pub fn z(flags: &[&str]) -> Matcher {
    zero_width(|_scope, input, index| input.end(index), flags)
}

/// `B` (`\b`) — a boundary between a word code point and a non-word code
/// point (or an edge of the input adjacent to a word code point).
pub fn b(flags: &[&str]) -> Matcher {
    zero_width(
        |_scope, input, index| {
            let before = input.prev(index).map(|cp| is_word(cp.ch)).unwrap_or(false);
            let after = input.get(index).map(|cp| is_word(cp.ch)).unwrap_or(false);
            before != after
        },
        flags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(m: &Matcher, input: &str, index: usize) -> bool {
        let idx = CodePointIndex::from_str(input);
        m(Flags::EMPTY, Reps::ONCE, &idx, index, &[]).2
    }

    #[test]
    fn caret_matches_start_only_by_default() {
        let m = caret(&[]);
        assert!(run(&m, "ab\ncd", 0));
        assert!(!run(&m, "ab\ncd", 3));
    }

    #[test]
    fn caret_matches_after_newline_multiline() {
        let m = caret(&["m"]);
        assert!(run(&m, "ab\ncd", 3));
    }

    #[test]
    fn dollar_matches_end_only_by_default() {
        let m = dollar(&[]);
        assert!(run(&m, "ab\ncd", 5));
        assert!(!run(&m, "ab\ncd", 2));
    }

    #[test]
    fn dollar_matches_before_newline_multiline() {
        let m = dollar(&["m"]);
        assert!(run(&m, "ab\ncd", 2));
    }

    #[test]
    fn a_and_z_ignore_multiline() {
        let start = a(&["m"]);
        let end = z(&["m"]);
        assert!(!run(&start, "ab\ncd", 3));
        assert!(!run(&end, "ab\ncd", 2));
    }

    #[test]
    fn b_detects_word_boundary() {
        let m = b(&[]);
        assert!(run(&m, "foo bar", 3));
        assert!(!run(&m, "foo bar", 1));
        assert!(run(&m, "foo", 0));
        assert!(run(&m, "foo", 3));
    }
}
