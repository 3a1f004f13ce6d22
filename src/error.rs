// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;

/// A construction-time failure.
///
/// Every variant here corresponds to a programmer error: a malformed flag
/// string, an unknown character class name, or an out-of-range backreference
/// group id. Matcher constructors never return this directly; they call
/// [`crate::flagparser::try_parse_flags`] (or an equivalent fallible path)
/// and panic with the `Display` message, matching the "loud abort, not a
/// runtime condition" contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A flag token was not recognized.
    InvalidFlag(String),
    /// A `{min,max}` repetition range had `min > max`.
    InvalidRange(i64, i64),
    /// A named ASCII class was not one of the fourteen known names.
    UnknownClass(String),
    /// A backreference group id was zero or negative.
    InvalidGroupId(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFlag(s) => write!(f, "invalid flag: {:?}", s),
            Error::InvalidRange(min, max) => {
                write!(f, "invalid repetition range: {{{},{}}}", min, max)
            }
            Error::UnknownClass(name) => write!(f, "unknown character class: {:?}", name),
            Error::InvalidGroupId(gid) => {
                write!(f, "invalid backreference group id: {}", gid)
            }
        }
    }
}

impl error::Error for Error {}
