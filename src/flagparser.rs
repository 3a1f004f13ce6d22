// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The flag mini-language parser (spec §6): turns one or more flag strings
//! into `(Option<Reps>, Flags)`. Malformed input is a construction-time
//! failure — [`parse_flags`] panics; [`try_parse_flags`] is the fallible
//! path used internally and by tests.

use crate::error::Error;
use crate::flags::Flags;
use crate::reps::Reps;

/// Parse `flags` (each string processed left to right, whitespace ignored)
/// per the grammar in spec §6. Returns the last repetition range seen (if
/// any) and the accumulated flag bits.
pub fn try_parse_flags(flags: &[&str]) -> Result<(Option<Reps>, Flags), Error> {
    let mut f = Flags::EMPTY;
    let mut reps: Option<Reps> = None;

    for raw in flags {
        let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = cleaned.to_lowercase().chars().collect();
        let mut idx = 0;

        while idx < chars.len() {
            match chars[idx] {
                '^' => {
                    f = f.set_negated();
                    idx += 1;
                }
                'm' => {
                    f = f.set_multiline();
                    idx += 1;
                }
                's' => {
                    f = f.set_dot_nl();
                    idx += 1;
                }
                'i' => {
                    f = f.set_any_case();
                    idx += 1;
                }
                'c' => {
                    f = f.set_capture();
                    idx += 1;
                }
                tok @ ('*' | '+' | '?') => {
                    idx += 1;
                    let less = consume_trailing_less(&chars, &mut idx);
                    let (min, max) = match tok {
                        '*' => (-1, -1),
                        '+' => (1, -1),
                        '?' => (0, 1),
                        _ => unreachable!(),
                    };
                    reps = Some(Reps::new(min, max));
                    f = match tok {
                        '*' => f.set_zero_or_more(),
                        '+' => f.set_one_or_more(),
                        '?' => f.set_zero_or_one(),
                        _ => unreachable!(),
                    };
                    f = if less { f.set_less() } else { f.unset_less() };
                }
                '{' => {
                    let start = idx + 1;
                    let mut j = start;
                    while j < chars.len() && chars[j] != '}' {
                        j += 1;
                    }
                    if j >= chars.len() {
                        return Err(Error::InvalidFlag(raw.to_string()));
                    }
                    let body: String = chars[start..j].iter().collect();
                    idx = j + 1;
                    let less = consume_trailing_less(&chars, &mut idx);

                    let (min, max) = parse_range_body(&body).ok_or_else(|| Error::InvalidFlag(raw.to_string()))?;
                    let parsed = Reps::new(min, max);
                    if !parsed.valid() {
                        return Err(Error::InvalidRange(min, max));
                    }
                    reps = Some(parsed);
                    if less {
                        f = f.set_less();
                    }
                }
                _ => return Err(Error::InvalidFlag(raw.to_string())),
            }
        }
    }

    Ok((reps, f))
}

/// Parse `flags`, panicking with the `Error`'s message on malformed input —
/// the public entry point every matcher constructor uses.
pub fn parse_flags(flags: &[&str]) -> (Option<Reps>, Flags) {
    match try_parse_flags(flags) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

fn consume_trailing_less(chars: &[char], idx: &mut usize) -> bool {
    if *idx < chars.len() && chars[*idx] == '?' {
        *idx += 1;
        true
    } else {
        false
    }
}

fn parse_range_body(body: &str) -> Option<(i64, i64)> {
    let parts: Vec<&str> = body.split(',').collect();
    match parts.as_slice() {
        [n] => {
            let v: i64 = n.parse().ok()?;
            Some((v, v))
        }
        [n, ""] => {
            let v: i64 = n.parse().ok()?;
            Some((v, -1))
        }
        [n, m] => {
            let lo: i64 = n.parse().ok()?;
            let hi: i64 = m.parse().ok()?;
            Some((lo, hi))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_flags() {
        let (reps, f) = try_parse_flags(&["^mis c"]).unwrap();
        assert!(reps.is_none());
        assert!(f.negated());
        assert!(f.multiline());
        assert!(f.any_case());
        assert!(f.capture());
    }

    #[test]
    fn star_and_lazy_star() {
        let (reps, f) = try_parse_flags(&["*"]).unwrap();
        assert_eq!(reps, Some(Reps::new(-1, -1)));
        assert!(!f.less());

        let (reps, f) = try_parse_flags(&["*?"]).unwrap();
        assert_eq!(reps, Some(Reps::new(-1, -1)));
        assert!(f.less());
    }

    #[test]
    fn exact_and_open_range() {
        let (reps, _) = try_parse_flags(&["{3}"]).unwrap();
        assert_eq!(reps, Some(Reps::new(3, 3)));

        let (reps, _) = try_parse_flags(&["{3,}"]).unwrap();
        assert_eq!(reps, Some(Reps::new(3, -1)));

        let (reps, f) = try_parse_flags(&["{1,2}?"]).unwrap();
        assert_eq!(reps, Some(Reps::new(1, 2)));
        assert!(f.less());
    }

    #[test]
    fn invalid_range_rejected() {
        assert!(try_parse_flags(&["{3,2}"]).is_err());
    }

    #[test]
    fn unknown_token_rejected() {
        assert!(try_parse_flags(&["q"]).is_err());
    }

    #[test]
    #[should_panic]
    fn parse_flags_panics_on_malformed_input() {
        parse_flags(&["q"]);
    }
}
