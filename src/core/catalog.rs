//! Catalog model: decoded project, key and translation entries.
//!
//! These are passive data structures. A catalog document looks like:
//!
//! ```json
//! {
//!   "project_id": "42",
//!   "project_name": "Klondike",
//!   "languages": [{ "language_id": 640, "language_iso": "en_GB" }],
//!   "keys": [{
//!     "key_id": 1,
//!     "key_name": "bananas",
//!     "is_plural": true,
//!     "translations": [{
//!       "translation_id": 7,
//!       "language_iso": "en_GB",
//!       "translation": "{\"one\": \"One banana\", \"other\": \"[%i:bananas] bananas\"}"
//!     }]
//!   }]
//! }
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[serde(rename = "project_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "project_name")]
    pub name: String,
    #[serde(default)]
    pub languages: Vec<ProjectLanguage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectLanguage {
    #[serde(rename = "language_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "language_iso")]
    pub iso_code: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslationKey {
    #[serde(rename = "key_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "key_name")]
    pub name: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub is_plural: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub char_limit: u32,
    /// Placeholder name that drives plural selection.
    #[serde(default)]
    pub plural_argument: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Translation {
    #[serde(rename = "translation_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "language_iso")]
    pub language_code: String,
    /// Plain text for singular keys. For plural keys either a JSON object
    /// keyed by category name, or a string containing such an object.
    #[serde(rename = "translation")]
    pub value: Value,
}

/// A whole catalog document: one project plus its keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub keys: Vec<TranslationKey>,
}

impl Catalog {
    pub fn from_json(content: &str) -> Result<Catalog> {
        serde_json::from_str(content).context("Failed to decode catalog")
    }

    pub fn load(path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to decode catalog: {:?}", path))
    }
}

/// Fixture constructors for tests.
#[cfg(test)]
impl TranslationKey {
    pub fn singular(name: &str, translations: &[(&str, &str)]) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            translations: translations
                .iter()
                .enumerate()
                .map(|(index, (language, text))| Translation {
                    id: index.to_string(),
                    language_code: language.to_string(),
                    value: Value::String(text.to_string()),
                })
                .collect(),
            is_plural: false,
            is_hidden: false,
            is_archived: false,
            char_limit: 0,
            plural_argument: None,
        }
    }

    pub fn plural(name: &str, translations: &[(&str, &[(&str, &str)])]) -> Self {
        Self {
            is_plural: true,
            translations: translations
                .iter()
                .enumerate()
                .map(|(index, (language, forms))| Translation {
                    id: index.to_string(),
                    language_code: language.to_string(),
                    value: Value::Object(
                        forms
                            .iter()
                            .map(|(category, text)| {
                                (category.to_string(), Value::String(text.to_string()))
                            })
                            .collect(),
                    ),
                })
                .collect(),
            ..Self::singular(name, &[])
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}
