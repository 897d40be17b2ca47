//! Chinese text to pinyin, with per-syllable decomposition.
//!
//! Text is split into atomic units (one hanzi, one run of ASCII letters and
//! apostrophes, or one blank character). Each unit becomes a [`Token`]
//! carrying its toned and toneless romanization, initial, finals and tone,
//! or a [`DecomposeError`] when it cannot be decomposed. Tokens can be
//! joined back into a string with [`join`].
//!
//! ```
//! use pinyin_engine::{join, segment, JoinMode, PinyinTables};
//!
//! let tables = PinyinTables::builtin();
//! let tokens = segment(tables, "你好");
//! assert_eq!(join(&tokens, JoinMode::Toned, " "), "nǐ hǎo");
//! assert_eq!(tokens[1].initial(), "h");
//! ```

pub mod join;
pub mod segment;
pub mod settings;
pub mod syllable;
pub mod tables;
pub mod token;
mod trace_init;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use join::{join, join_with_settings, to_toned_string, to_toneless_string, JoinMode};
pub use segment::{segment, Units};
pub use syllable::{decompose, decompose_char};
pub use tables::{CompositeTables, PinyinSource, PinyinTables, TablesError, ToneMark};
pub use token::{DecomposeError, Decomposition, FailedToken, Token, TokenKind};
pub use trace_init::init_tracing;
