//! Reassembling decomposed tokens into a string.

use serde::Deserialize;

use crate::settings::JoinSettings;
use crate::token::Token;

pub const DEFAULT_SEPARATOR: &str = " ";

/// Which surface form `join` emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    Toned,
    Toneless,
}

impl JoinMode {
    pub fn surface(self, token: &Token) -> &str {
        match self {
            JoinMode::Toned => token.toned(),
            JoinMode::Toneless => token.toneless(),
        }
    }
}

/// Join token surfaces with `separator`.
///
/// A token whose surface already equals the separator is emitted without a
/// second copy. One trailing separator is stripped at the end; an empty
/// separator concatenates.
pub fn join(tokens: &[Token], mode: JoinMode, separator: &str) -> String {
    let mut out = String::new();
    for token in tokens {
        let surface = mode.surface(token);
        out.push_str(surface);
        if surface != separator {
            out.push_str(separator);
        }
    }
    if !separator.is_empty() && out.ends_with(separator) {
        out.truncate(out.len() - separator.len());
    }
    out
}

/// Toned surfaces separated by a single space.
pub fn to_toned_string(tokens: &[Token]) -> String {
    join(tokens, JoinMode::Toned, DEFAULT_SEPARATOR)
}

/// Toneless surfaces separated by a single space.
pub fn to_toneless_string(tokens: &[Token]) -> String {
    join(tokens, JoinMode::Toneless, DEFAULT_SEPARATOR)
}

/// Join with the separator and mode from settings.
pub fn join_with_settings(tokens: &[Token], settings: &JoinSettings) -> String {
    join(tokens, settings.mode, &settings.separator)
}
