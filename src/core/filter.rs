//! Key selection applied before the intermediate model is built.
//!
//! The builder itself never drops keys; callers decide which keys take part
//! in a run by passing a [`KeyFilter`] to the pipeline.

use anyhow::{Context, Result};
use glob::Pattern;

use crate::config::Config;
use crate::core::TranslationKey;

pub trait KeyFilter: Send + Sync {
    fn accepts(&self, key: &TranslationKey) -> bool;
}

/// Keeps every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl KeyFilter for AcceptAll {
    fn accepts(&self, _key: &TranslationKey) -> bool {
        true
    }
}

/// Filter driven by the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigKeyFilter {
    pub include_hidden: bool,
    pub include_archived: bool,
    pub ignores: Vec<Pattern>,
}

impl ConfigKeyFilter {
    pub fn from_config(config: &Config) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            include_hidden: config.include_hidden,
            include_archived: config.include_archived,
            ignores,
        })
    }
}

impl KeyFilter for ConfigKeyFilter {
    fn accepts(&self, key: &TranslationKey) -> bool {
        if key.is_hidden && !self.include_hidden {
            return false;
        }
        if key.is_archived && !self.include_archived {
            return false;
        }
        !self.ignores.iter().any(|pattern| pattern.matches(&key.name))
    }
}
