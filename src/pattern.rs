// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The pattern execution engine (spec §4.5): a single cursor slides across
//! the input; at each candidate position every matcher in the sequence is
//! tried once in order, accumulating captures and advancing the cursor as
//! each one succeeds. The cursor is never rewound on a partial failure — a
//! later matcher in the sequence failing leaves whatever progress earlier
//! matchers already made in place, and the next candidate starts from there.
//! `execute` is the single entry point every surface operation in
//! [`crate::ops`] is built on.

use crate::codepoint::CodePointIndex;
use crate::flags::Flags;
use crate::matcher::Matcher;
use crate::matches::{Matches, SubMatch, SubMatches};
use crate::reps::Reps;

/// An ordered sequence of matchers.
#[derive(Clone)]
pub struct Pattern {
    matchers: Vec<Matcher>,
}

impl Pattern {
    pub fn new(matchers: Vec<Matcher>) -> Pattern {
        Pattern { matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Scan `input` left to right, stopping once `count` matches have been
    /// collected (`count < 0` for unlimited, `count == 0` for none).
    ///
    /// State carried across candidates: `cursor` (never rewound), and
    /// `last_matcher_idx`/`last_matched_idx`, which suppress recording the
    /// same zero-width repetition of the same matcher at the same cursor
    /// twice in a row (the guard that keeps `Dot("*")`-style patterns from
    /// reporting an empty match immediately after a real one at the same
    /// spot).
    pub fn execute(&self, input: &CodePointIndex, count: i64) -> Matches {
        let mut out: Matches = Vec::new();
        if count == 0 {
            return out;
        }

        let required = self.matchers.len();
        if required == 0 {
            out.push(vec![SubMatch::new(0, 0)]);
            return out;
        }

        let mut cursor = 0usize;
        let mut last_round_cursor = 0usize;
        let mut last_matcher_idx: Option<usize> = None;
        let mut last_matched_idx: Option<usize> = None;

        while cursor <= input.len() {
            let start = cursor;
            let mut completed = 0usize;
            let mut at_least_zero = 0usize;
            let mut captures: SubMatches = Vec::new();

            for (idx, m) in self.matchers.iter().enumerate() {
                let (scoped, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, input, cursor, &captures);
                if !proceed {
                    completed = 0;
                    captures.clear();
                    break;
                }

                if scoped.capture() {
                    let end = (cursor + consumed).min(input.len());
                    captures.push(SubMatch::new(cursor, end));
                }
                cursor += consumed;

                if consumed == 0 {
                    if scoped.zero_or_more() {
                        if last_matcher_idx != Some(idx) || last_matched_idx != Some(cursor) || input.end(cursor) {
                            at_least_zero += 1;
                        }
                    } else {
                        at_least_zero += 1;
                    }
                }

                completed += 1;
                last_matcher_idx = Some(idx);
                last_matched_idx = Some(cursor);
            }

            if completed >= required {
                let pushed = if start < cursor {
                    let mut sm = Vec::with_capacity(captures.len() + 1);
                    sm.push(SubMatch::new(start, cursor));
                    sm.append(&mut captures);
                    out.push(sm);
                    true
                } else if at_least_zero > 0 && cursor <= input.len() {
                    let mut sm = Vec::with_capacity(captures.len() + 1);
                    sm.push(SubMatch::new(start, start));
                    sm.append(&mut captures);
                    out.push(sm);
                    true
                } else {
                    false
                };
                if pushed && count > 0 && out.len() as i64 >= count {
                    break;
                }
            }

            if last_round_cursor == cursor {
                // Code points advance one index regardless of byte width; the
                // byte-size forward-progress guard in spec §4.5 step 4 is
                // automatically satisfied here since cursor is already a
                // code-point index, not a byte offset.
                cursor += 1;
            }
            last_round_cursor = cursor;
        }

        out
    }
}
