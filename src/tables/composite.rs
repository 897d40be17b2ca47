use std::collections::HashMap;
use std::sync::Arc;

use super::config::parse_dictionary_toml;
use super::{PinyinSource, TablesError, ToneMark};

/// Dictionary layers over a base source.
///
/// Character lookups try layers from last to first, then fall back to the
/// base. Tone marks and templates always come from the base.
pub struct CompositeTables {
    base: Arc<dyn PinyinSource>,
    layers: Vec<HashMap<char, String>>,
}

impl CompositeTables {
    pub fn new(base: Arc<dyn PinyinSource>) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// Add an override layer. Later layers have higher priority.
    pub fn with_layer(mut self, characters: HashMap<char, String>) -> Self {
        self.layers.push(characters);
        self
    }

    /// Add an override layer parsed from dictionary TOML.
    pub fn with_toml_layer(self, dictionary_toml: &str) -> Result<Self, TablesError> {
        let characters = parse_dictionary_toml(dictionary_toml)?;
        Ok(self.with_layer(characters))
    }
}

impl PinyinSource for CompositeTables {
    fn lookup_character(&self, c: char) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(&c).map(String::as_str))
            .or_else(|| self.base.lookup_character(c))
    }

    fn lookup_tone_char(&self, c: char) -> Option<ToneMark> {
        self.base.lookup_tone_char(c)
    }

    fn initial_templates(&self) -> &[String] {
        self.base.initial_templates()
    }

    fn final_templates(&self) -> &[String] {
        self.base.final_templates()
    }
}
