// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The surface operations (spec §4.6), every one of them built on top of a
//! single call to [`Pattern::execute`].

use crate::codepoint::CodePointIndex;
use crate::matches::{Matches, Segment, SubMatch, SubMatches};
use crate::pattern::Pattern;
use crate::replace::Replace;

fn slice_string(idx: &CodePointIndex, span: SubMatch) -> String {
    idx.string(span.start, span.len()).expect("span within input bounds")
}

fn submatches_to_strings(idx: &CodePointIndex, sm: &SubMatches) -> Vec<Option<String>> {
    sm.iter().map(|s| idx.string(s.start, s.len())).collect()
}

/// Whether `pattern` matches anywhere in `input`.
pub fn is_match(pattern: &Pattern, input: &str) -> bool {
    let idx = CodePointIndex::from_str(input);
    !pattern.execute(&idx, 1).is_empty()
}

/// The text of the first (leftmost) match, if any.
pub fn find(pattern: &Pattern, input: &str) -> Option<String> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, 1).into_iter().next().map(|sm| slice_string(&idx, sm[0]))
}

/// The span of the first match, if any.
pub fn find_index(pattern: &Pattern, input: &str) -> Option<SubMatch> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, 1).into_iter().next().map(|sm| sm[0])
}

/// The first match's overall text and every capture's text (`None` for a
/// capture slot that didn't contribute on this match).
pub fn find_submatch(pattern: &Pattern, input: &str) -> Option<Vec<Option<String>>> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, 1).into_iter().next().map(|sm| submatches_to_strings(&idx, &sm))
}

/// The first match's overall span and every capture's span.
pub fn find_submatch_index(pattern: &Pattern, input: &str) -> Option<SubMatches> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, 1).into_iter().next()
}

/// Every non-overlapping match's text, up to `limit` matches (`limit < 0`
/// for unlimited).
pub fn find_all(pattern: &Pattern, input: &str, limit: i64) -> Vec<String> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, limit).iter().map(|sm| slice_string(&idx, sm[0])).collect()
}

/// Every non-overlapping match's span.
pub fn find_all_index(pattern: &Pattern, input: &str, limit: i64) -> Vec<SubMatch> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, limit).into_iter().map(|sm| sm[0]).collect()
}

/// Every non-overlapping match's overall text and captures' text.
pub fn find_all_submatch(pattern: &Pattern, input: &str, limit: i64) -> Vec<Vec<Option<String>>> {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, limit).iter().map(|sm| submatches_to_strings(&idx, sm)).collect()
}

/// Every non-overlapping match's overall span and captures' spans.
pub fn find_all_submatch_index(pattern: &Pattern, input: &str, limit: i64) -> Matches {
    let idx = CodePointIndex::from_str(input);
    pattern.execute(&idx, limit)
}

/// Replace every match with the text `f` returns when given that match's
/// text, leaving unmatched gaps untouched.
pub fn replace_all_func(pattern: &Pattern, input: &str, f: impl Fn(&str) -> String) -> String {
    let idx = CodePointIndex::from_str(input);
    let matches = pattern.execute(&idx, -1);
    let mut out = String::new();
    let mut last = 0usize;

    for sm in &matches {
        let span = sm[0];
        out.push_str(&idx.string(last, span.start - last).unwrap());
        out.push_str(&f(&slice_string(&idx, span)));
        last = span.end;
    }
    out.push_str(&idx.string(last, idx.len() - last).unwrap());
    out
}

/// Replace every match with a fixed literal.
pub fn replace_all_literal(pattern: &Pattern, input: &str, literal: &str) -> String {
    replace_all_func(pattern, input, |_| literal.to_string())
}

/// Replace every match by running `replace`'s pipeline, seeded with that
/// match's text and fed its captures.
pub fn replace_all(pattern: &Pattern, input: &str, replace: &Replace) -> String {
    let idx = CodePointIndex::from_str(input);
    let matches = pattern.execute(&idx, -1);
    let mut out = String::new();
    let mut last = 0usize;

    for sm in &matches {
        let span = sm[0];
        out.push_str(&idx.string(last, span.start - last).unwrap());
        let matched = slice_string(&idx, span);
        let captures = submatches_to_strings(&idx, sm);
        let captures = if captures.len() > 1 { captures[1..].to_vec() } else { Vec::new() };
        out.push_str(&replace.apply(&matched, &captures));
        last = span.end;
    }
    out.push_str(&idx.string(last, idx.len() - last).unwrap());
    out
}

/// Split `input` on every match, up to `limit` pieces (`limit == 0` yields
/// no pieces, `limit < 0` is unlimited).
pub fn split(pattern: &Pattern, input: &str, limit: i64) -> Vec<String> {
    let idx = CodePointIndex::from_str(input);
    if limit == 0 {
        return Vec::new();
    }
    if idx.is_empty() && !pattern.is_empty() {
        return Vec::new();
    }

    let matches = pattern.execute(&idx, -1);
    let mut pieces = Vec::new();
    let mut last = 0usize;

    for sm in &matches {
        if limit > 0 && pieces.len() as i64 >= limit - 1 {
            break;
        }
        let span = sm[0];
        pieces.push(idx.string(last, span.start - last).unwrap());
        last = span.end;
    }
    pieces.push(idx.string(last, idx.len() - last).unwrap());
    pieces
}

/// Walk `input` as alternating unmatched/matched [`Segment`]s; concatenating
/// every segment's text reproduces `input` exactly.
pub fn scan(pattern: &Pattern, input: &str) -> Vec<Segment> {
    let idx = CodePointIndex::from_str(input);
    let matches = pattern.execute(&idx, -1);
    let mut segments = Vec::new();
    let mut last = 0usize;

    for sm in &matches {
        let span = sm[0];
        if span.start > last {
            segments.push(Segment::unmatched(SubMatch::new(last, span.start)));
        }
        segments.push(Segment::matched(sm.clone()));
        last = span.end;
    }
    if last < idx.len() {
        segments.push(Segment::unmatched(SubMatch::new(last, idx.len())));
    }

    segments
}
