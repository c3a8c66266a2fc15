use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog files or directories containing `*.json` catalogs.
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<String>,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Separator splitting key names into nested modules; `null` keeps every
    /// key in the project module.
    #[serde(default = "default_namespace_separator")]
    pub namespace_separator: Option<String>,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default)]
    pub include_hidden: bool,
    #[serde(default)]
    pub include_archived: bool,
    /// Glob patterns over key names to leave out of generation.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_catalogs() -> Vec<String> {
    vec!["./catalogs".to_string()]
}

fn default_out_dir() -> String {
    "./src/generated".to_string()
}

fn default_namespace_separator() -> Option<String> {
    Some(".".to_string())
}

fn default_indent_width() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogs: default_catalogs(),
            out_dir: default_out_dir(),
            namespace_separator: default_namespace_separator(),
            indent_width: default_indent_width(),
            include_hidden: false,
            include_archived: false,
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// indent width is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.indent_width == 0 {
            bail!("'indentWidth' must be at least 1");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
