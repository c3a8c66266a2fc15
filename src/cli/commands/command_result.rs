use std::path::PathBuf;

use crate::issues::{BuildError, BuildWarning};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub out_dir: PathBuf,
    /// False when build errors blocked writing.
    pub written: bool,
    pub allow_partial: bool,
}

/// Per-catalog outcome.
#[derive(Debug)]
pub struct CatalogReport {
    pub path: String,
    pub project_name: Option<String>,
    pub functions: usize,
    pub filtered_out: usize,
    pub errors: Vec<BuildError>,
    pub warnings: Vec<BuildWarning>,
    /// Set when the catalog could not be read or decoded.
    pub load_error: Option<String>,
    /// Output file, once written.
    pub output: Option<PathBuf>,
}

impl CatalogReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            project_name: None,
            functions: 0,
            filtered_out: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            load_error: None,
            output: None,
        }
    }
}

/// Result of running a locgen command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub catalogs: Vec<CatalogReport>,
}

impl CommandResult {
    pub fn error_count(&self) -> usize {
        self.catalogs.iter().map(|c| c.errors.len()).sum()
    }

    pub fn failed_catalog_count(&self) -> usize {
        self.catalogs
            .iter()
            .filter(|c| c.load_error.is_some())
            .count()
    }

    pub fn function_count(&self) -> usize {
        self.catalogs.iter().map(|c| c.functions).sum()
    }
}
