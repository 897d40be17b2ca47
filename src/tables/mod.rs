//! Read-only lookup data for decomposition.
//!
//! `PinyinSource` is the seam the decomposer reads through: character
//! readings, the tone-mark table and the ordered initial/final templates.
//! `PinyinTables` is the owned, immutable implementation loaded from TOML,
//! and `CompositeTables` layers extra dictionaries over one of them.

mod composite;
pub mod config;

pub use composite::CompositeTables;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

pub const DEFAULT_TEMPLATES_TOML: &str = include_str!("default_templates.toml");
pub const DEFAULT_DICTIONARY_TOML: &str = include_str!("default_dictionary.toml");

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{0} table is empty")]
    EmptyTemplates(&'static str),
    #[error("invalid {field} template: {value:?}")]
    InvalidTemplate { field: &'static str, value: String },
    #[error("expected exactly one character: {0:?}")]
    NotOneChar(String),
    #[error("empty reading for character: {0}")]
    EmptyReading(String),
    #[error("tone for {key} must be 1-4, got {tone}")]
    InvalidTone { key: String, tone: u8 },
}

/// The neutral vowel a toned character stands for, and its tone (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneMark {
    pub base: char,
    pub tone: u8,
}

/// Data the decomposer consumes. Implementations must be immutable once
/// built so they can be shared across threads.
pub trait PinyinSource: Send + Sync {
    /// Toned romanization for one character, if known.
    fn lookup_character(&self, c: char) -> Option<&str>;
    fn lookup_tone_char(&self, c: char) -> Option<ToneMark>;
    fn initial_templates(&self) -> &[String];
    fn final_templates(&self) -> &[String];
}

pub struct PinyinTables {
    characters: HashMap<char, String>,
    tones: HashMap<char, ToneMark>,
    initials: Vec<String>,
    finals: Vec<String>,
}

impl PinyinTables {
    /// Build tables from templates and dictionary TOML text.
    pub fn from_toml(templates_toml: &str, dictionary_toml: &str) -> Result<Self, TablesError> {
        let templates = config::parse_templates_toml(templates_toml)?;
        let characters = config::parse_dictionary_toml(dictionary_toml)?;
        debug!(
            characters = characters.len(),
            initials = templates.initials.len(),
            finals = templates.finals.len(),
            tones = templates.tones.len(),
            "pinyin tables loaded"
        );
        Ok(Self {
            characters,
            tones: templates.tones,
            initials: templates.initials,
            finals: templates.finals,
        })
    }

    /// Load tables from TOML files on disk.
    pub fn open(templates_path: &Path, dictionary_path: &Path) -> Result<Self, TablesError> {
        let templates = fs::read_to_string(templates_path)?;
        let dictionary = fs::read_to_string(dictionary_path)?;
        Self::from_toml(&templates, &dictionary)
    }

    /// Builtin templates with a caller-supplied dictionary.
    pub fn with_dictionary(dictionary_toml: &str) -> Result<Self, TablesError> {
        Self::from_toml(DEFAULT_TEMPLATES_TOML, dictionary_toml)
    }

    /// Get or initialize the tables built from the embedded TOML files.
    pub fn builtin() -> &'static PinyinTables {
        static INSTANCE: OnceLock<PinyinTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            PinyinTables::from_toml(DEFAULT_TEMPLATES_TOML, DEFAULT_DICTIONARY_TOML)
                .expect("embedded pinyin tables must be valid")
        })
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl PinyinSource for PinyinTables {
    fn lookup_character(&self, c: char) -> Option<&str> {
        self.characters.get(&c).map(String::as_str)
    }

    fn lookup_tone_char(&self, c: char) -> Option<ToneMark> {
        self.tones.get(&c).copied()
    }

    fn initial_templates(&self) -> &[String] {
        &self.initials
    }

    fn final_templates(&self) -> &[String] {
        &self.finals
    }
}
