//! Read-only reference catalogs the editor joins against: the enemy roster
//! and the item table, both produced offline by `catalog_compiler` from
//! engine data dumps. Nothing here is authored through the editor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Game language codes as the engine numbers them. Message tables and
/// `MessageAsset.Language` carry these raw integers.
pub mod language {
    pub const JAPANESE: i64 = 0;
    pub const ENGLISH: i64 = 1;
    pub const FRENCH: i64 = 2;
    pub const ITALIAN: i64 = 3;
    pub const GERMAN: i64 = 4;
    pub const SPANISH: i64 = 5;
    pub const RUSSIAN: i64 = 6;
    pub const POLISH: i64 = 7;
    pub const PORTUGUESE_BR: i64 = 10;
    pub const KOREAN: i64 = 11;
    pub const TRADITIONAL_CHINESE: i64 = 12;
    pub const SIMPLIFIED_CHINESE: i64 = 13;
    pub const ARABIC: i64 = 21;
    pub const LATIN_AMERICAN_SPANISH: i64 = 32;
}

/// All language codes the engine's message tables carry, in table column
/// order.
pub const LANGUAGE_CODES: [i64; 14] = [
    language::JAPANESE,
    language::ENGLISH,
    language::FRENCH,
    language::ITALIAN,
    language::GERMAN,
    language::SPANISH,
    language::RUSSIAN,
    language::POLISH,
    language::PORTUGUESE_BR,
    language::KOREAN,
    language::TRADITIONAL_CHINESE,
    language::SIMPLIFIED_CHINESE,
    language::ARABIC,
    language::LATIN_AMERICAN_SPANISH,
];

/// Native display name for a game language code.
pub fn language_name(code: i64) -> Option<&'static str> {
    Some(match code {
        language::JAPANESE => "日本語",
        language::ENGLISH => "English",
        language::FRENCH => "Français",
        language::ITALIAN => "Italiano",
        language::GERMAN => "Deutsch",
        language::SPANISH => "Español",
        language::RUSSIAN => "Русский",
        language::POLISH => "Polski",
        language::PORTUGUESE_BR => "Português (BR)",
        language::KOREAN => "한국어",
        language::TRADITIONAL_CHINESE => "繁體中文",
        language::SIMPLIFIED_CHINESE => "简体中文",
        language::ARABIC => "العربية",
        language::LATIN_AMERICAN_SPANISH => "Español (LA)",
        _ => return None,
    })
}

/// Three-locale name bundle of an enemy catalog entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct EnemyName {
    pub cn: String,
    pub en: String,
    pub jp: String,
}

/// One enemy roster entry from `enemies.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Enemy {
    pub id: u32,
    #[serde(rename = "fixedId")]
    pub fixed_id: u32,
    pub label: String,
    pub name: EnemyName,
}

/// One item table entry from `items.json`. Names are keyed by the decimal
/// string of the game language code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "fixedId")]
    pub fixed_id: u32,
    pub label: String,
    pub name: HashMap<String, String>,
}

impl Item {
    /// Name in the given language, if the table carried one.
    pub fn name_in(&self, code: i64) -> Option<&str> {
        self.name.get(&code.to_string()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_has_a_display_name() {
        for code in LANGUAGE_CODES {
            assert!(language_name(code).is_some(), "missing name for {code}");
        }
        assert_eq!(language_name(99), None);
    }

    #[test]
    fn enemy_entries_parse_from_the_catalog_shape() {
        let entry = r#"{
            "id": 6025,
            "fixedId": 37,
            "label": "EM0106_25_0",
            "name": { "cn": "煌雷龙", "en": "Rey Dau", "jp": "レ・ダウ" }
        }"#;
        let enemy: Enemy = serde_json::from_str(entry).unwrap();
        assert_eq!(enemy.fixed_id, 37);
        assert_eq!(enemy.name.en, "Rey Dau");
    }

    #[test]
    fn item_names_are_keyed_by_language_code() {
        let entry = r#"{
            "id": 1,
            "fixedId": 622,
            "label": "ITEM_0648",
            "name": { "1": "Potion", "13": "回复药" }
        }"#;
        let item: Item = serde_json::from_str(entry).unwrap();
        assert_eq!(item.name_in(language::ENGLISH), Some("Potion"));
        assert_eq!(item.name_in(language::SIMPLIFIED_CHINESE), Some("回复药"));
        assert_eq!(item.name_in(language::KOREAN), None);
    }
}
