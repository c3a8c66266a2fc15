use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};

use super::CatalogReport;
use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{ConfigKeyFilter, Renderer, SeparatorPlacement, pipeline::Generation},
};

/// Everything a command needs to run the pipeline.
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub catalogs: Vec<PathBuf>,
    pub filter: ConfigKeyFilter,
    pub placement: SeparatorPlacement,
    pub renderer: Renderer,
}

impl CommandContext {
    /// Load config from the working directory and apply CLI overrides.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root = env::current_dir()?;
        Self::from_root(root, args)
    }

    pub fn from_root(root: PathBuf, args: &CommonArgs) -> Result<Self> {
        let mut config = load_config(&root)?.config;
        if args.include_hidden {
            config.include_hidden = true;
        }
        if args.include_archived {
            config.include_archived = true;
        }

        let paths: Vec<PathBuf> = if args.catalogs.is_empty() {
            config.catalogs.iter().map(|p| resolve(&root, p)).collect()
        } else {
            args.catalogs.iter().map(|p| resolve(&root, p)).collect()
        };
        let catalogs = crate::core::pipeline::discover_catalogs(&paths)?;
        if catalogs.is_empty() {
            bail!("No catalog files found");
        }
        tracing::debug!(count = catalogs.len(), "discovered catalogs");

        let filter = ConfigKeyFilter::from_config(&config)?;
        let placement = SeparatorPlacement::new(config.namespace_separator.clone());
        let renderer = Renderer::new(config.indent_width);

        Ok(Self {
            root,
            config,
            catalogs,
            filter,
            placement,
            renderer,
        })
    }

    /// Path shown to the user, relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Join `path` onto `root`, dropping a leading `./`.
pub fn resolve(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    root.join(path.strip_prefix(".").unwrap_or(path))
}

/// Fold one pipeline outcome into a report.
pub fn catalog_report(display_path: String, outcome: &Result<Generation>) -> CatalogReport {
    let mut report = CatalogReport::new(display_path);
    match outcome {
        Ok(generation) => {
            report.project_name = Some(generation.project_name.clone());
            report.functions = generation.build.function_count();
            report.filtered_out = generation.filtered_out;
            report.errors = generation.build.errors.clone();
            report.warnings = generation.build.warnings.clone();
        }
        Err(err) => report.load_error = Some(format!("{:#}", err)),
    }
    report
}
