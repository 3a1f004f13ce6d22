// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Domain-specific composite matchers (spec §4.3): `FieldWord`, `FieldKey`,
//! `Keyword`, `Hash10`, `UUID`, and `AtLeastSixDigits`. Each is specified by
//! an equivalent regex; these scan forward directly rather than compiling
//! that regex, matching the spec's note that an implementation "may either
//! inline these or express them as composites."
//!
//! `FieldWord`, `FieldKey`, `Keyword`, `Hash10`, and `AtLeastSixDigits` merge
//! their compile-time flags directly into scope without going through the
//! quantified runner — they already perform their own internal scan and are
//! not meant to be repeated as a unit. `UUID` is the one domain matcher built
//! with [`crate::matcher::make_matcher`], since it behaves as an ordinary
//! fixed-width matcher.

use std::sync::Arc;

use crate::charclass::{is_alnum, is_alpha, is_digit, is_xdigit};
use crate::codepoint::CodePointIndex;
use crate::flagparser::parse_flags;
use crate::flags::Flags;
use crate::matcher::{make_matcher, Matcher};
use crate::matches::SubMatch;
use crate::reps::Reps;

fn cfg_wrap(core: impl Fn(Flags, &CodePointIndex, usize) -> (usize, bool) + Send + Sync + 'static, flags: &[&str]) -> Matcher {
    let (_, cfg) = parse_flags(flags);
    Arc::new(move |scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, _caps: &[SubMatch]| {
        let scoped = scope.merge(cfg);
        let (size, ok) = core(scoped, input, index);
        if scoped.negated() {
            if ok {
                (scoped, 0, false)
            } else {
                let progress = if input.ready(index) { 1 } else { 0 };
                (scoped, progress, true)
            }
        } else {
            (scoped, if ok { size } else { 0 }, ok)
        }
    })
}

/// Equivalent to `\b[a-zA-Z0-9]+?[-_a-zA-Z0-9']*[a-zA-Z0-9]+\b|\b[a-zA-Z0-9]+\b`:
/// a run of alphanumerics optionally joined by `-`, `_`, or `'`, that both
/// starts and ends on an alphanumeric.
pub fn field_word(flags: &[&str]) -> Matcher {
    cfg_wrap(|_scope, input, index| scan_word_run(input, index, is_alnum, &['-', '_', '\'']).map(|n| (n, true)).unwrap_or((0, false)), flags)
}

/// Equivalent to `\b[a-zA-Z][-_a-zA-Z0-9]+?[a-zA-Z0-9]\b`: an alphabetic
/// first character, at least one joining character, and an alphanumeric
/// close — the shape of an HTML/CSS attribute key like `data-id`.
pub fn field_key(flags: &[&str]) -> Matcher {
    cfg_wrap(|_scope, input, index| scan_key_like(input, index, 0).map(|n| (n, true)).unwrap_or((0, false)), flags)
}

/// Equivalent to `\b[-+]?[a-zA-Z][-_a-zA-Z0-9']+?[a-zA-Z0-9]\b`: an optional
/// leading sign, then the same shape as `FieldKey` but also allowing `'`.
pub fn keyword(flags: &[&str]) -> Matcher {
    cfg_wrap(
        |_scope, input, index| {
            let mut start = index;
            if let Some(cp) = input.get(start) {
                if cp.ch == '+' || cp.ch == '-' {
                    start += 1;
                }
            }
            scan_key_like(input, start, index).map(|n| (n, true)).unwrap_or((0, false))
        },
        flags,
    )
}

/// Equivalent to `[0-9a-fA-F]{10}`: exactly ten hex digits.
pub fn hash10(flags: &[&str]) -> Matcher {
    cfg_wrap(
        |_scope, input: &CodePointIndex, index| {
            if index + 10 > input.len() {
                return (0, false);
            }
            for i in 0..10 {
                if !is_xdigit(input.get(index + i).unwrap().ch) {
                    return (0, false);
                }
            }
            (10, true)
        },
        flags,
    )
}

/// Equivalent to `\A[0-9]{6,}\z`: the entire input, not just some substring
/// of it, must be six or more decimal digits.
pub fn at_least_six_digits(flags: &[&str]) -> Matcher {
    cfg_wrap(
        |_scope, input: &CodePointIndex, index| {
            if index != 0 {
                return (0, false);
            }
            let len = input.len();
            if len < 6 {
                return (0, false);
            }
            for i in 0..len {
                if !is_digit(input.get(i).unwrap().ch) {
                    return (0, false);
                }
            }
            (len, true)
        },
        flags,
    )
}

/// Equivalent to `[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}`.
pub fn uuid(flags: &[&str]) -> Matcher {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
    let core: Matcher = Arc::new(|scope: Flags, _reps: Reps, input: &CodePointIndex, index: usize, _caps: &[SubMatch]| {
        let mut pos = index;
        let mut ok = true;
        for (i, &width) in GROUPS.iter().enumerate() {
            if i > 0 {
                match input.get(pos) {
                    Some(cp) if cp.ch == '-' => pos += 1,
                    _ => {
                        ok = false;
                        break;
                    }
                }
            }
            if pos + width > input.len() {
                ok = false;
                break;
            }
            for k in 0..width {
                if !is_xdigit(input.get(pos + k).unwrap().ch) {
                    ok = false;
                    break;
                }
            }
            if !ok {
                break;
            }
            pos += width;
        }

        let consumed = pos - index;
        if scope.negated() {
            if ok {
                (scope, 0, false)
            } else {
                let progress = if input.ready(index) { 1 } else { 0 };
                (scope, progress, true)
            }
        } else {
            (scope, if ok { consumed } else { 0 }, ok)
        }
    });
    make_matcher(core, flags)
}

/// Scan a maximal run of `is_body` or `connectors` code points starting at
/// `index`, whose first and last code point satisfy `is_body`. Returns the
/// run's length, or `None` if the first code point doesn't satisfy `is_body`.
fn scan_word_run(input: &CodePointIndex, index: usize, is_body: fn(char) -> bool, connectors: &[char]) -> Option<usize> {
    if index >= input.len() {
        return None;
    }
    let first = input.get(index).unwrap().ch;
    if !is_body(first) {
        return None;
    }

    let mut end = index + 1;
    while end < input.len() {
        let c = input.get(end).unwrap().ch;
        if is_body(c) || connectors.contains(&c) {
            end += 1;
        } else {
            break;
        }
    }
    while end > index + 1 {
        let last = input.get(end - 1).unwrap().ch;
        if is_body(last) {
            break;
        }
        end -= 1;
    }
    Some(end - index)
}

/// The `FieldKey`/`Keyword` shape: an alphabetic code point at `word_start`,
/// at least one joining code point, and an alphanumeric close. `total_start`
/// is where the match as a whole begins (may be before `word_start` to
/// account for a consumed sign character); the returned length is measured
/// from `total_start`.
fn scan_key_like(input: &CodePointIndex, word_start: usize, total_start: usize) -> Option<usize> {
    if word_start >= input.len() {
        return None;
    }
    if !is_alpha(input.get(word_start).unwrap().ch) {
        return None;
    }

    let mut end = word_start + 1;
    while end < input.len() {
        let c = input.get(end).unwrap().ch;
        if is_alnum(c) || c == '-' || c == '_' || c == '\'' {
            end += 1;
        } else {
            break;
        }
    }
    if end - word_start < 3 {
        return None;
    }
    while end > word_start + 2 {
        let last = input.get(end - 1).unwrap().ch;
        if is_alnum(last) {
            break;
        }
        end -= 1;
    }
    if end - word_start < 3 {
        return None;
    }
    Some(end - total_start)
}
