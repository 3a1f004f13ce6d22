// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A `Pipeline` chains named [`Stage`]s, each a text-to-text transform, and
//! runs them in order over one input. Built atop [`crate::ops`] so callers
//! can compose several pattern-driven passes (e.g. one `ReplaceAll` pass
//! followed by a `Split`-then-rejoin pass) without hand-threading strings.

use std::sync::Arc;

use crate::ops;
use crate::pattern::Pattern;
use crate::replace::Replace;

/// A single named transform from one string to another.
#[derive(Clone)]
pub struct Stage {
    name: String,
    apply: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl Stage {
    pub fn new(name: &str, apply: impl Fn(&str) -> String + Send + Sync + 'static) -> Stage {
        Stage { name: name.to_string(), apply: Arc::new(apply) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A stage that runs `pattern`'s matches through `replace`'s pipeline.
    pub fn replace(name: &str, pattern: Pattern, replace: Replace) -> Stage {
        Stage::new(name, move |input| ops::replace_all(&pattern, input, &replace))
    }

    /// A stage that replaces every match with a fixed literal.
    pub fn replace_literal(name: &str, pattern: Pattern, literal: &str) -> Stage {
        let literal = literal.to_string();
        Stage::new(name, move |input| ops::replace_all_literal(&pattern, input, &literal))
    }
}

/// An ordered sequence of [`Stage`]s.
#[derive(Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Pipeline {
        Pipeline { stages }
    }

    /// Run every stage in order, feeding each stage's output to the next.
    pub fn run(&self, input: &str) -> String {
        let mut working = input.to_string();
        for stage in &self.stages {
            working = (stage.apply)(&working);
        }
        working
    }

    /// The stage names in order, useful for logging/diagnostics.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}
