// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The replacement pipeline (spec §4.6 and the `Replace`/`Replacer`
//! surface): a `Replace` is a sequence of `Replacer` stages, each taking the
//! working replacement text and the current match's captures and producing
//! the next working text. [`crate::ops::replace_all`] runs one `Replace`
//! per match, seeded with that match's full text.

use std::sync::Arc;

/// A single replacement stage: `(working_text, captures) -> next_text`.
pub type Replacer = Arc<dyn Fn(&str, &[Option<String>]) -> String + Send + Sync>;

/// An ordered pipeline of [`Replacer`] stages.
#[derive(Clone)]
pub struct Replace {
    stages: Vec<Replacer>,
}

impl Replace {
    pub fn new(stages: Vec<Replacer>) -> Replace {
        Replace { stages }
    }

    /// Run every stage in order, starting from `matched`.
    pub fn apply(&self, matched: &str, captures: &[Option<String>]) -> String {
        let mut working = matched.to_string();
        for stage in &self.stages {
            working = stage(&working, captures);
        }
        working
    }
}

/// Replace the working text with a fixed literal, ignoring the match.
pub fn with_literal(literal: &str) -> Replacer {
    let owned = literal.to_string();
    Arc::new(move |_working, _caps| owned.clone())
}

/// Apply an arbitrary transform to the working text.
pub fn with_transform(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Replacer {
    Arc::new(move |working, _caps| f(working))
}

/// Expand a `$1`, `$2`, ... (1-based capture) / `$&` (whole match) template
/// against the working text and this match's captures.
pub fn with_replace(template: &str) -> Replacer {
    let owned = template.to_string();
    Arc::new(move |working, caps| expand_template(&owned, working, caps))
}

pub fn to_lower() -> Replacer {
    with_transform(|s| s.to_lowercase())
}

pub fn to_upper() -> Replacer {
    with_transform(|s| s.to_uppercase())
}

fn expand_template(template: &str, whole: &str, caps: &[Option<String>]) -> String {
    let mut out = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
                out.push_str(whole);
            }
            Some(d) if d.is_ascii_digit() => {
                let mut num = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        num.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let idx: usize = num.parse().unwrap_or(0);
                if idx == 0 {
                    out.push_str(whole);
                } else if let Some(Some(cap)) = caps.get(idx - 1) {
                    out.push_str(cap);
                }
            }
            _ => out.push('$'),
        }
    }

    out
}
