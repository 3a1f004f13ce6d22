// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The primitive matchers (spec §4.3): literal text, dot, character range,
//! named ASCII class, Unicode range table, and backreference.

use std::sync::Arc;

use crate::charclass::{lookup_ascii_class, UnicodeRangeTable};
use crate::codepoint::CodePointIndex;
use crate::error::Error;
use crate::flags::Flags;
use crate::matcher::{make_matcher, wrap_fn, Matcher};
use crate::matches::SubMatch;
use crate::reps::Reps;

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// `Text` — a Matcher for the given literal text (spec §4.3).
///
/// Out-of-bounds, insufficient-input, and negation are handled per the
/// literal-text rules in spec §4.3: a negated out-of-bounds position
/// succeeds consuming nothing; a negated position with too little
/// remaining input succeeds consuming one code point; otherwise a negated
/// match succeeds iff any position differs, consuming one code point.
pub fn text(s: &str, flags: &[&str]) -> Matcher {
    let runes: Vec<char> = s.chars().collect();
    let need = runes.len();

    let core: Matcher = Arc::new(move |scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, _caps: &[SubMatch]| {
        let negated = scope.negated();

        if index >= input.len() {
            return (scope, 0, negated);
        }
        if index + need > input.len() {
            return if negated { (scope, 1, true) } else { (scope, 0, false) };
        }

        let mut equal = true;
        for (i, &want) in runes.iter().enumerate() {
            let got = input.get(index + i).unwrap().ch;
            let (w, g) = if scope.any_case() { (lower(want), lower(got)) } else { (want, got) };
            if w != g {
                equal = false;
                break;
            }
        }

        if negated {
            (scope, if equal { 0 } else { 1 }, !equal)
        } else {
            (scope, if equal { need } else { 0 }, equal)
        }
    });

    make_matcher(core, flags)
}

/// `Dot` — matches any single code point, excluding `\n` unless `DotNL`.
pub fn dot(flags: &[&str]) -> Matcher {
    let core: Matcher = Arc::new(|scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, _caps: &[SubMatch]| {
        if let Some(cp) = input.get(index) {
            let mut proceed = cp.ch != '\n' || scope.dot_nl();
            if scope.negated() {
                proceed = !proceed;
            }
            let consumed = if proceed { 1 } else { 0 };
            (scope, consumed, proceed)
        } else {
            (scope, 0, scope.negated())
        }
    });
    make_matcher(core, flags)
}

/// Precompile a character description (optionally wrapped in `[...]`) into
/// singleton characters and inclusive ranges. A leading `-` is a literal
/// dash; otherwise `x-y` triples form ranges (swapped if `x > y`).
fn compile_range(desc: &str) -> (Vec<char>, Vec<(char, char)>) {
    let body = desc.strip_prefix('[').and_then(|s| s.strip_suffix(']')).unwrap_or(desc);
    let chars: Vec<char> = body.chars().collect();
    let mut singles = Vec::new();
    let mut ranges = Vec::new();

    let mut i = 0;
    if i < chars.len() && chars[i] == '-' {
        singles.push('-');
        i += 1;
    }
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            let (mut x, mut y) = (chars[i], chars[i + 2]);
            if x > y {
                std::mem::swap(&mut x, &mut y);
            }
            ranges.push((x, y));
            i += 3;
        } else {
            singles.push(chars[i]);
            i += 1;
        }
    }

    (singles, ranges)
}

/// `R` — a Matcher for a precompiled character range description, e.g.
/// `"a-c"` or `"[xyza-f]"`.
pub fn r(desc: &str, flags: &[&str]) -> Matcher {
    let (singles, ranges) = compile_range(desc);
    wrap_fn(
        Arc::new(move |c: char| singles.contains(&c) || ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)),
        flags,
    )
}

/// `Class` — a Matcher for one of the fourteen named ASCII classes.
/// Panics (construction-time error) on an unknown name.
pub fn class(name: &str, flags: &[&str]) -> Matcher {
    match lookup_ascii_class(name) {
        Ok(predicate) => wrap_fn(Arc::new(predicate), flags),
        Err(e) => panic!("{}", e),
    }
}

/// Fallible form of [`class`], for callers that want to handle an unknown
/// class name instead of panicking.
pub fn try_class(name: &str, flags: &[&str]) -> Result<Matcher, Error> {
    let predicate = lookup_ascii_class(name)?;
    Ok(wrap_fn(Arc::new(predicate), flags))
}

/// `IsUnicodeRange` — a Matcher for a caller-supplied Unicode range table.
pub fn unicode_range(table: UnicodeRangeTable, flags: &[&str]) -> Matcher {
    wrap_fn(Arc::new(move |c: char| table.contains(c)), flags)
}

/// `BackRef` — a Matcher for the 1-based capture group `gid`. Panics if
/// `gid < 1` (construction-time error).
pub fn back_ref(gid: i64, flags: &[&str]) -> Matcher {
    if gid < 1 {
        panic!("{}", Error::InvalidGroupId(gid));
    }
    let slot = (gid - 1) as usize;

    let core: Matcher = Arc::new(move |scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, captures: &[SubMatch]| {
        if captures.len() <= slot {
            return (scope, 0, scope.negated());
        }
        let group = captures[slot];
        let group_len = group.len();
        if index + group_len > input.len() {
            return (scope, 0, scope.negated());
        }

        let mut equal = true;
        for i in 0..group_len {
            let want = input.get(group.start + i).unwrap().ch;
            let got = input.get(index + i).unwrap().ch;
            let (w, g) = if scope.any_case() { (lower(want), lower(got)) } else { (want, got) };
            if w != g {
                equal = false;
                break;
            }
        }

        if scope.negated() {
            if equal {
                (scope, 0, false)
            } else {
                let progress = if input.ready(index) { 1 } else { 0 };
                (scope, progress, true)
            }
        } else {
            (scope, if equal { group_len } else { 0 }, equal)
        }
    });

    make_matcher(core, flags)
}
