//! End-to-end generation for one or many catalogs.
//!
//! Each catalog runs `filter -> build -> render` on its own; nothing is
//! shared between runs, so multiple catalogs are processed in parallel.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::{
    BuildOutput, Builder, Catalog, KeyFilter, Placement, Renderer, TranslationKey,
    build::project_module_name,
};

/// Outcome of generating one catalog.
#[derive(Debug, Clone)]
pub struct Generation {
    pub project_name: String,
    pub module_name: String,
    /// Keys rejected by the pre-filter.
    pub filtered_out: usize,
    pub build: BuildOutput,
    /// Rendered source for every key that built successfully.
    pub source: String,
}

impl Generation {
    /// File name for the rendered source.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name)
    }
}

/// Shared collaborators for a run.
pub struct Pipeline<'a> {
    pub filter: &'a dyn KeyFilter,
    pub placement: &'a dyn Placement,
    pub renderer: Renderer,
}

impl<'a> Pipeline<'a> {
    pub fn generate(&self, catalog: &Catalog) -> Generation {
        let keys: Vec<TranslationKey> = catalog
            .keys
            .iter()
            .filter(|key| self.filter.accepts(key))
            .cloned()
            .collect();
        let filtered_out = catalog.keys.len() - keys.len();

        let build = Builder::new(self.placement).build(&catalog.project, &keys);
        tracing::debug!(
            project = %catalog.project.name,
            keys = keys.len(),
            filtered_out,
            functions = build.function_count(),
            errors = build.errors.len(),
            "built project"
        );
        let source = self.renderer.render(&build.modules);

        Generation {
            project_name: catalog.project.name.clone(),
            module_name: project_module_name(&catalog.project),
            filtered_out,
            build,
            source,
        }
    }

    pub fn generate_file(&self, path: &Path) -> Result<Generation> {
        let catalog = Catalog::load(path)?;
        Ok(self.generate(&catalog))
    }

    /// Generate every catalog in parallel; results keep the input order.
    pub fn generate_files(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<Generation>)> {
        paths
            .par_iter()
            .map(|path| (path.clone(), self.generate_file(path)))
            .collect()
    }
}

/// Expand files and directories into a sorted list of catalog files.
///
/// Directories are searched recursively for `*.json` files.
pub fn discover_catalogs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_file() {
            found.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            bail!("Catalog path not found: {}", path.display());
        }
        let mut in_dir: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable path");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        in_dir.sort();
        found.extend(in_dir);
    }
    Ok(found)
}
