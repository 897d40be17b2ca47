
use crate::tables::config::parse_dictionary_toml;
use crate::tables::{PinyinSource, PinyinTables, DEFAULT_DICTIONARY_TOML};
use crate::{decompose_char, segment, to_toned_string, Token, TokenKind};

/// Every character in the builtin dictionary, sorted.
pub(crate) fn dictionary_chars() -> Vec<char> {
    let mut chars: Vec<char> = parse_dictionary_toml(DEFAULT_DICTIONARY_TOML)
        .unwrap()
        .into_keys()
        .collect();
    chars.sort_unstable();
    chars
}

#[test]
fn every_dictionary_entry_decomposes() {
    let tables = PinyinTables::builtin();
    for c in dictionary_chars() {
        let t = decompose_char(tables, c);
        assert!(t.failure().is_none(), "{c}");
        assert_eq!(t.kind(), Some(TokenKind::Syllable));
        assert_eq!(Some(t.toned()), tables.lookup_character(c), "{c}");
        assert!(t.tone() <= 4, "{c}: tone {}", t.tone());
        assert!(t.toneless().is_ascii() || t.toneless().contains('ü'), "{c}");
    }
}

#[test]
fn every_multi_letter_reading_has_a_final() {
    let tables = PinyinTables::builtin();
    for c in dictionary_chars() {
        let t = decompose_char(tables, c);
        if t.toneless().chars().any(|ch| "aeiouü".contains(ch)) {
            assert!(!t.finals().is_empty(), "{c} ({}) has no final", t.toned());
        }
    }
}

#[test]
fn sentence_end_to_end() {
    let tables = PinyinTables::builtin();
    let tokens = segment(tables, "我爱北京 and 你");
    let toned: Vec<&str> = tokens.iter().map(Token::toned).collect();
    // 京 is not in the builtin dictionary.
    assert_eq!(toned, vec!["wǒ", "ài", "běi", "京", " ", "and", " ", "nǐ"]);
    assert!(tokens[3].failure().is_some());
    assert_eq!(to_toned_string(&tokens), "wǒ ài běi 京  and  nǐ");
}

#[test]
fn overrides_layer_over_builtin() {
    use std::sync::Arc;

    use crate::tables::CompositeTables;

    let builtin = PinyinTables::from_toml(
        crate::tables::DEFAULT_TEMPLATES_TOML,
        DEFAULT_DICTIONARY_TOML,
    )
    .unwrap();
    let tables = CompositeTables::new(Arc::new(builtin))
        .with_toml_layer("[characters]\n\"京\" = \"jīng\"\n\"得\" = \"de\"\n")
        .unwrap();
    let tokens = segment(&tables, "北京得");
    assert_eq!(to_toned_string(&tokens), "běi jīng de");
    assert_eq!(tokens[1].initial(), "j");
    assert_eq!(tokens[1].finals(), &["ing"]);
    assert_eq!(tokens[2].tone(), 0);
}
