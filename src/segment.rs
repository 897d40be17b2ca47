//! Splitting text into atomic units and decomposing each one.
//!
//! A unit is a maximal run of ASCII letters and apostrophes, or a single
//! other character. Blank units are decomposed as a single space, so runs
//! of whitespace yield one whitespace token per character.

use tracing::{debug, debug_span};

use crate::syllable::decompose;
use crate::tables::PinyinSource;
use crate::token::Token;
use crate::unicode::{is_blank, is_latin_run_char};

/// Iterator over the atomic units of a string, left to right.
pub struct Units<'a> {
    rest: &'a str,
}

impl<'a> Units<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Units<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let c = self.rest.chars().next()?;
        let end = if is_latin_run_char(c) {
            self.rest
                .find(|ch: char| !is_latin_run_char(ch))
                .unwrap_or(self.rest.len())
        } else {
            c.len_utf8()
        };
        let (unit, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(unit)
    }
}

/// Segment `input` and decompose every unit, in order.
///
/// Never fails as a whole: units that cannot be decomposed come back as
/// `Token::Failed` in their position.
pub fn segment(tables: &dyn PinyinSource, input: &str) -> Vec<Token> {
    let _span = debug_span!("segment", char_count = input.chars().count()).entered();
    let tokens: Vec<Token> = Units::new(input)
        .map(|unit| {
            if is_blank(unit) {
                decompose(tables, " ")
            } else {
                decompose(tables, unit)
            }
        })
        .collect();
    debug!(token_count = tokens.len());
    tokens
}
