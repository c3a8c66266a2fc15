use std::{fs, path::Path};

use anyhow::{Result, bail};

use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config into `dir`; refuses to overwrite an existing one.
pub fn init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
