// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The quantified matcher runner (spec §4.2): wraps a single per-position
//! matcher so that one call to the wrapper executes the inner matcher under
//! `(min, max)` repetition bounds with greedy or lazy preference.

use std::sync::Arc;

use crate::codepoint::CodePointIndex;
use crate::flags::Flags;
use crate::matcher::Matcher;
use crate::matches::SubMatch;
use crate::reps::Reps;

/// Build the Matcher every primitive, anchor, domain predicate, and
/// combinator constructor produces: `inner` run under `cfg_reps` (falling
/// back to the caller's inherited reps when `None`) with `cfg_flags` merged
/// into scope.
///
/// This is the sole place repetition and greedy/lazy preference are
/// resolved; `inner` itself is always called with reps `(1,1)`-shaped
/// expectations satisfied by the loop, never by `inner` re-entering this
/// logic.
pub fn quant_runner(inner: Matcher, cfg_reps: Option<Reps>, cfg_flags: Flags) -> Matcher {
    Arc::new(
        move |scope: Flags, reps: Reps, input: &CodePointIndex, index: usize, captures: &[SubMatch]| {
            let scoped_base = scope.merge(cfg_flags);
            let reps = cfg_reps.unwrap_or(reps);

            let mut scoped = scoped_base;
            let mut count: i64 = 0;
            let mut queue: usize = 0;
            let mut completed;
            let mut this: usize = 0;

            loop {
                let pos = index + this;
                if pos > input.len() {
                    let (min_hit, _) = reps.satisfied(count);
                    completed = min_hit;
                    break;
                }

                let (this_scoped, keep, matched) = inner(scoped_base, reps, input, pos, captures);
                if this_scoped.capture() {
                    scoped = scoped.set_capture();
                }

                if !matched {
                    let (min_hit, _) = reps.satisfied(count);
                    completed = min_hit;
                    break;
                }

                count += 1;
                if keep == 0 {
                    this += 1;
                } else {
                    this += keep;
                    queue += keep;
                }

                // Only after a successful repetition do we consult the
                // bounds: a lazy quantifier stops as soon as its minimum is
                // met, a greedy one keeps going until its maximum is.
                let (min_hit, max_hit) = reps.satisfied(count);
                if min_hit {
                    completed = true;
                    if scoped_base.less() || max_hit {
                        break;
                    }
                }
            }

            let proceed = completed;
            let consumed = if proceed { queue } else { 0 };
            (scoped, consumed, proceed)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::wrap_predicate;

    fn is_a(c: char) -> bool {
        c == 'a'
    }

    #[test]
    fn default_once_behaves_like_inner() {
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, None, Flags::EMPTY);
        let input = CodePointIndex::from_str("aab");
        let (_, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(proceed);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn star_is_greedy_by_default() {
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, Some(Reps::new(-1, -1)), Flags::EMPTY);
        let input = CodePointIndex::from_str("aaab");
        let (_, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(proceed);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn star_lazy_stops_after_one_repetition() {
        // A lazy `*?` only consults its minimum *after* a repetition
        // attempt, so it still takes one `'a'` here before stopping -- it
        // does not skip straight to zero just because the minimum is zero.
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, Some(Reps::new(-1, -1)), Flags::EMPTY.set_less());
        let input = CodePointIndex::from_str("aaab");
        let (_, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(proceed);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn lazy_optional_on_no_match_still_succeeds_empty() {
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, Some(Reps::new(0, 1)), Flags::EMPTY.set_less());
        let input = CodePointIndex::from_str("bbb");
        let (_, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(proceed);
        assert_eq!(consumed, 0);
    }

    #[test]
    fn zero_or_more_on_no_match_still_succeeds() {
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, Some(Reps::new(-1, -1)), Flags::EMPTY);
        let input = CodePointIndex::from_str("bbb");
        let (_, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(proceed);
        assert_eq!(consumed, 0);
    }

    #[test]
    fn one_or_more_on_no_match_fails() {
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, Some(Reps::new(1, -1)), Flags::EMPTY);
        let input = CodePointIndex::from_str("bbb");
        let (_, _, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(!proceed);
    }

    #[test]
    fn exact_count_range() {
        let inner = wrap_predicate(Arc::new(is_a));
        let m = quant_runner(inner, Some(Reps::new(1, 2)), Flags::EMPTY);
        let input = CodePointIndex::from_str("aaaa");
        let (_, consumed, proceed) = m(Flags::EMPTY, Reps::ONCE, &input, 0, &[]);
        assert!(proceed);
        assert_eq!(consumed, 2);
    }
}
