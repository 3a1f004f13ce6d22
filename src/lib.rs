// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A programmable, composable text-matching engine.
//!
//! Instead of parsing a pattern string, a [`Pattern`] is built directly from
//! an ordered list of [`Matcher`] values — functions produced by the
//! constructors in [`primitives`], [`anchors`], [`domain`], and
//! [`combinators`]. Each matcher already carries its own repetition and
//! flag configuration (applied through [`matcher::make_matcher`]); the
//! pattern engine in [`pattern`] just walks them in sequence.
//!
//! ```
//! use progex::pattern::Pattern;
//! use progex::primitives::text;
//! use progex::ops;
//!
//! let pattern = Pattern::new(vec![text("ferris", &["i"])]);
//! assert!(ops::is_match(&pattern, "FERRIS loves Rust"));
//! ```

pub mod anchors;
pub mod charclass;
pub mod codepoint;
pub mod combinators;
pub mod domain;
pub mod error;
pub mod flagparser;
pub mod flags;
pub mod matcher;
pub mod matches;
pub mod ops;
pub mod pattern;
pub mod pipeline;
pub mod pool;
pub mod primitives;
pub mod quant;
pub mod replace;
pub mod reps;

#[cfg(test)]
mod proptest;

pub use codepoint::CodePointIndex;
pub use error::Error;
pub use flags::Flags;
pub use matcher::Matcher;
pub use matches::{Matches, Segment, SubMatch, SubMatches};
pub use pattern::Pattern;
pub use pipeline::{Pipeline, Stage};
pub use replace::Replace;
pub use reps::Reps;


/// The six concrete end-to-end scenarios from spec §8's scenario table,
/// each checked against its exact expected output. Scenario 3 (`Split` with
/// a count limit) lives in `pattern::tests::star_text_dedups_adjacent_zero_width_hits`
/// alongside the rest of the zero-width dedup coverage it depends on.
#[cfg(test)]
mod spec_scenarios {
    use crate::anchors::{caret, dollar};
    use crate::combinators::{group, or};
    use crate::ops;
    use crate::pattern::Pattern;
    use crate::primitives::{back_ref, class, dot, r, text};

    /// Scenario 1: `Text("b", "{1,2}", "i")` against `"aBabbb"`.
    #[test]
    fn scenario_1_case_insensitive_bounded_repeat() {
        let pattern = Pattern::new(vec![text("b", &["{1,2}", "i"])]);
        let got = ops::find_all_submatch(&pattern, "aBabbb", -1);
        assert_eq!(got, vec![vec![Some("B".to_string())], vec![Some("bb".to_string())], vec![Some("b".to_string())]]);
    }

    /// Scenario 2: `Caret(), Text("/w/"), Text("/", "^", "+", "c"), Text("/", "??"), Dollar()`
    /// against `"/w/core/"`.
    #[test]
    fn scenario_2_negated_plus_with_lazy_optional_trailer() {
        let pattern = Pattern::new(vec![
            caret(&[]),
            text("/w/", &[]),
            group(text("/", &["^", "+"]), &["c"]),
            text("/", &["??"]),
            dollar(&[]),
        ]);
        let got = ops::find_all_submatch(&pattern, "/w/core/", -1);
        assert_eq!(got, vec![vec![Some("/w/core/".to_string()), Some("core".to_string())]]);
    }

    /// Scenario 4: `R("a-c","c"), Text("x"), BackRef(1), Text("x"), BackRef(1)`
    /// against `"axaxa"`.
    #[test]
    fn scenario_4_backreference_repeated_twice() {
        let pattern =
            Pattern::new(vec![r("a-c", &["c"]), text("x", &[]), back_ref(1, &[]), text("x", &[]), back_ref(1, &[])]);
        let got = ops::find_all_submatch(&pattern, "axaxa", -1);
        assert_eq!(got, vec![vec![Some("axaxa".to_string()), Some("a".to_string())]]);
    }

    /// Scenario 5: `Or(Text("b","{1,2}","i"), Dot("{1}"), "c")` against `"aBb\nAa"`.
    #[test]
    fn scenario_5_alternation_of_literal_and_dot() {
        let pattern = Pattern::new(vec![or(vec![text("b", &["{1,2}", "i"]), dot(&["{1}"])], &[])]);
        let got = ops::find_all_submatch(&pattern, "aBb\nAa", -1);
        assert_eq!(
            got,
            vec![
                vec![Some("a".to_string())],
                vec![Some("Bb".to_string())],
                vec![Some("A".to_string())],
                vec![Some("a".to_string())],
            ]
        );
    }

    /// Scenario 6: `Caret(), Text("/build/"), Alnum("?","c"), Text("/","??"), Dollar()`
    /// against `"/build//"` — the capture group matches and reports an empty string.
    #[test]
    fn scenario_6_optional_capture_can_be_empty() {
        let pattern = Pattern::new(vec![
            caret(&[]),
            text("/build/", &[]),
            group(class("alnum", &["?"]), &["c"]),
            text("/", &["??"]),
            dollar(&[]),
        ]);
        let got = ops::find_all_submatch(&pattern, "/build//", -1);
        assert_eq!(got, vec![vec![Some("/build//".to_string()), Some("".to_string())]]);
    }
}
