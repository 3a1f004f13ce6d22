// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The composing matchers (spec §4.4): `Or`, `Not`, `Group`.
//!
//! These operate purely on the Matcher contract from [`crate::matcher`] —
//! no shared mutable match state, matching spec §9's decision that the
//! stateful draft should not be reintroduced.

use std::sync::Arc;

use crate::flags::Flags;
use crate::matcher::{make_matcher, Matcher};

/// `Or` — tries each alternative in order at the same position, taking the
/// first that proceeds.
pub fn or(matchers: Vec<Matcher>, flags: &[&str]) -> Matcher {
    let core: Matcher = Arc::new(move |scope, reps, input, index, captures| {
        for m in &matchers {
            let (scoped, consumed, proceed) = m(scope, reps, input, index, captures);
            if proceed {
                return (scoped, consumed, true);
            }
        }
        (scope, 0, false)
    });
    make_matcher(core, flags)
}

/// `Not` — tries each child in order at this position; if any succeeds,
/// `Not` fails. Otherwise `Not` succeeds; per spec §4.4, if no child
/// consumed anything, `Not` consumes one code point to make progress.
pub fn not(children: Vec<Matcher>, flags: &[&str]) -> Matcher {
    let core: Matcher = Arc::new(move |scope, reps, input, index, captures| {
        let mut scoped = scope;
        for m in &children {
            let (this_scoped, _consumed, proceed) = m(scope, reps, input, index, captures);
            if proceed {
                return (this_scoped, 0, false);
            }
            scoped = this_scoped;
        }
        let consumed = if index < input.len() { 1 } else { 0 };
        (scoped, consumed, true)
    });
    make_matcher(core, flags)
}

/// `Group` — runs `inner` and marks its result as contributing a capture,
/// regardless of whether `c` appears in `flags`.
pub fn group(inner: Matcher, flags: &[&str]) -> Matcher {
    let core: Matcher = Arc::new(move |scope: Flags, reps, input, index, captures| {
        let (scoped, consumed, proceed) = inner(scope, reps, input, index, captures);
        (scoped.set_capture(), consumed, proceed)
    });
    make_matcher(core, flags)
}
