// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The matcher contract (spec §4.1) and the helpers every constructor in
//! `primitives`, `anchors`, `domain`, and `combinators` is built on top of.

use std::sync::Arc;

use crate::codepoint::CodePointIndex;
use crate::flags::Flags;
use crate::flagparser::parse_flags;
use crate::matches::SubMatch;
use crate::quant::quant_runner;
use crate::reps::Reps;

/// A single-call matching function.
///
/// `scope` is the flag set inherited from the caller; a matcher ORs in its
/// own compile-time flags to produce the returned `scoped` value. `reps` is
/// the inherited repetition bound, overridden by a matcher's own compile-time
/// reps if it has any. `captures` is the in-progress capture list for the
/// candidate currently being evaluated (used by backreferences). `consumed`
/// is the number of code points accepted; `proceed` is whether the matcher
/// succeeded (including a successful negation).
///
/// Matchers are immutable once built and safe to call from multiple threads
/// concurrently (spec §5); hence `Send + Sync` on the trait object.
pub type Matcher =
    Arc<dyn Fn(Flags, Reps, &CodePointIndex, usize, &[SubMatch]) -> (Flags, usize, bool) + Send + Sync>;

/// A pure `char -> bool` predicate, the building block for every
/// character-class matcher.
pub type RuneMatcher = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Wrap a `RuneMatcher` predicate into the Matcher contract, applying the
/// negation rules from spec §4.1:
///
/// - out of bounds: negated succeeds with zero consumption, non-negated fails.
/// - predicate false at a valid position, negated: succeeds consuming one
///   code point (forward progress on a negated failure).
/// - predicate true at a valid position, negated: fails.
/// - predicate true, not negated: succeeds consuming one code point.
pub fn wrap_predicate(predicate: RuneMatcher) -> Matcher {
    Arc::new(move |scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, _caps: &[SubMatch]| {
        if let Some(cp) = input.get(index) {
            let mut proceed = predicate(cp.ch);
            if scope.negated() {
                proceed = !proceed;
            }
            let consumed = if proceed { 1 } else { 0 };
            (scope, consumed, proceed)
        } else {
            // Out of bounds: a negated matcher succeeds trivially, consuming
            // nothing; otherwise there is nothing to match.
            (scope, 0, scope.negated())
        }
    })
}

/// Parse `flags` into `(reps, cfg_flags)` and wrap `inner` in the quantified
/// runner — the composition every primitive/anchor/domain/combinator
/// constructor performs exactly once.
pub fn make_matcher(inner: Matcher, flags: &[&str]) -> Matcher {
    let (cfg_reps, cfg_flags) = parse_flags(flags);
    quant_runner(inner, cfg_reps, cfg_flags)
}

/// Convenience for the common case: build a character-class matcher from a
/// predicate plus a flag string list in one call.
pub fn wrap_fn(predicate: RuneMatcher, flags: &[&str]) -> Matcher {
    make_matcher(wrap_predicate(predicate), flags)
}
