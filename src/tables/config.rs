use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::{TablesError, ToneMark};

#[derive(Deserialize)]
struct TemplatesConfig {
    initials: Vec<String>,
    finals: Vec<String>,
    #[serde(default)]
    tones: BTreeMap<String, ToneEntry>,
}

#[derive(Deserialize)]
struct ToneEntry {
    base: String,
    tone: u8,
}

#[derive(Deserialize)]
struct DictionaryConfig {
    characters: BTreeMap<String, String>,
}

/// Validated contents of a templates TOML file.
#[derive(Debug)]
pub struct Templates {
    pub initials: Vec<String>,
    pub finals: Vec<String>,
    pub tones: HashMap<char, ToneMark>,
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn check_templates(list: &[String], field: &'static str) -> Result<(), TablesError> {
    if list.is_empty() {
        return Err(TablesError::EmptyTemplates(field));
    }
    if let Some(bad) = list.iter().find(|t| t.trim().is_empty() || t.trim() != t.as_str()) {
        return Err(TablesError::InvalidTemplate {
            field,
            value: bad.clone(),
        });
    }
    Ok(())
}

/// Parse templates TOML into initials, finals and the tone table.
///
/// Template order is kept exactly as written.
pub fn parse_templates_toml(toml_str: &str) -> Result<Templates, TablesError> {
    let config: TemplatesConfig =
        toml::from_str(toml_str).map_err(|e| TablesError::Parse(e.to_string()))?;

    check_templates(&config.initials, "initials")?;
    check_templates(&config.finals, "finals")?;

    let mut tones = HashMap::with_capacity(config.tones.len());
    for (key, entry) in &config.tones {
        let toned = single_char(key).ok_or_else(|| TablesError::NotOneChar(key.clone()))?;
        let base =
            single_char(&entry.base).ok_or_else(|| TablesError::NotOneChar(entry.base.clone()))?;
        if !(1..=4).contains(&entry.tone) {
            return Err(TablesError::InvalidTone {
                key: key.clone(),
                tone: entry.tone,
            });
        }
        tones.insert(
            toned,
            ToneMark {
                base,
                tone: entry.tone,
            },
        );
    }

    Ok(Templates {
        initials: config.initials,
        finals: config.finals,
        tones,
    })
}

/// Parse dictionary TOML into a `char -> toned reading` map.
pub fn parse_dictionary_toml(toml_str: &str) -> Result<HashMap<char, String>, TablesError> {
    let config: DictionaryConfig =
        toml::from_str(toml_str).map_err(|e| TablesError::Parse(e.to_string()))?;

    let mut characters = HashMap::with_capacity(config.characters.len());
    for (key, reading) in config.characters {
        let c = single_char(&key).ok_or_else(|| TablesError::NotOneChar(key.clone()))?;
        if reading.trim().is_empty() {
            return Err(TablesError::EmptyReading(key));
        }
        characters.insert(c, reading);
    }
    Ok(characters)
}
