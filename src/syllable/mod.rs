//! Per-unit decomposition into tone, initial and finals.
//!
//! A unit is validated in a fixed order: blank units become whitespace
//! tokens, Latin runs pass through, anything that is not one Chinese-width
//! character fails with `InvalidLength`, and the remaining character is
//! looked up in the dictionary.


use tracing::debug;

use crate::tables::PinyinSource;
use crate::token::{DecomposeError, Decomposition, FailedToken, Token, TokenKind};
use crate::unicode::{is_blank, is_hanzi, is_latin_run, single_hanzi_width_char};

/// Decompose one atomic unit.
pub fn decompose(tables: &dyn PinyinSource, unit: &str) -> Token {
    if is_blank(unit) {
        return Token::Decomposed(Decomposition::whitespace());
    }
    if is_latin_run(unit) {
        return Token::Decomposed(Decomposition::passthrough(
            unit,
            to_toneless(tables, unit),
        ));
    }
    let Some(c) = single_hanzi_width_char(unit) else {
        debug!(unit, bytes = unit.len(), "invalid unit length");
        return Token::Failed(FailedToken::new(
            unit,
            DecomposeError::InvalidLength(unit.to_string()),
        ));
    };
    let Some(reading) = tables.lookup_character(c) else {
        debug!(%c, hanzi = is_hanzi(c), "character not in dictionary");
        return Token::Failed(FailedToken::new(
            unit,
            DecomposeError::UnrecognizedCharacter(c),
        ));
    };

    let toneless = to_toneless(tables, reading);
    Token::Decomposed(Decomposition {
        kind: TokenKind::Syllable,
        source: unit.to_string(),
        tone: extract_tone(tables, reading),
        initial: extract_initial(tables, reading),
        finals: extract_finals(tables, &toneless),
        toned: reading.to_string(),
        toneless,
    })
}

/// Decompose a single character.
pub fn decompose_char(tables: &dyn PinyinSource, c: char) -> Token {
    let mut buf = [0u8; 4];
    decompose(tables, c.encode_utf8(&mut buf))
}

/// Tone of a toned reading. The last tone-marked character wins; 0 when
/// none is present.
pub fn extract_tone(tables: &dyn PinyinSource, reading: &str) -> u8 {
    reading
        .chars()
        .filter_map(|c| tables.lookup_tone_char(c))
        .last()
        .map_or(0, |mark| mark.tone)
}

/// Replace every tone-marked character with its neutral base.
pub fn to_toneless(tables: &dyn PinyinSource, reading: &str) -> String {
    reading
        .chars()
        .map(|c| tables.lookup_tone_char(c).map_or(c, |mark| mark.base))
        .collect()
}

/// Initial of a toned reading.
///
/// The first two characters are tried as a whole before the first
/// character alone, so `zh` is never split into `z` + `h`. Readings shorter
/// than two characters have no initial.
pub fn extract_initial(tables: &dyn PinyinSource, reading: &str) -> String {
    let mut chars = reading.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return String::new();
    };
    let initials = tables.initial_templates();

    let pair: String = [first, second].iter().collect();
    if let Some(initial) = initials.iter().find(|i| **i == pair) {
        return initial.clone();
    }

    let mut buf = [0u8; 4];
    let single: &str = first.encode_utf8(&mut buf);
    initials
        .iter()
        .find(|i| i.as_str() == single)
        .cloned()
        .unwrap_or_default()
}

/// Finals of a toneless reading, in template order.
///
/// A template is recorded when the reading contains it and no final
/// recorded so far contains it.
pub fn extract_finals(tables: &dyn PinyinSource, toneless: &str) -> Vec<String> {
    let mut finals: Vec<String> = Vec::new();
    for template in tables.final_templates() {
        let t = template.as_str();
        if toneless.contains(t) && !finals.iter().any(|f| f.contains(t)) {
            finals.push(template.clone());
        }
    }
    finals
}
