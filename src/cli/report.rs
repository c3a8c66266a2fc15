//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style, one block per issue, followed by a
//! one-line summary. Kept apart from the pipeline so locgen can be used as a
//! library without any terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CatalogReport, CommandResult, CommandSummary, GenerateSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{BuildError, BuildWarning, Rule, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    if let CommandSummary::Init(_) = &result.summary {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
        return;
    }

    report_to(&result.catalogs, writer);

    if verbose {
        print_catalog_table(&result.catalogs, writer);
    }

    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(result, summary, writer),
        CommandSummary::Check => print_check(result, writer),
        CommandSummary::Init(_) => {}
    }
}

/// Print every problem of every catalog, followed by the problem count.
pub fn report_to<W: Write>(catalogs: &[CatalogReport], writer: &mut W) {
    for catalog in catalogs {
        if let Some(message) = &catalog.load_error {
            let _ = writeln!(
                writer,
                "{}: could not load catalog: {}",
                "error".bold().red(),
                message
            );
            let _ = writeln!(writer, "  {} {}", "-->".blue(), catalog.path);
            let _ = writeln!(writer);
        }
        for error in &catalog.errors {
            print_issue(&catalog.path, error, writer);
        }
        for warning in &catalog.warnings {
            print_issue(&catalog.path, warning, writer);
        }
    }
    print_problem_count(catalogs, writer);
}

/// Common view over errors and warnings for printing.
trait Reportable {
    fn severity(&self) -> Severity;
    fn rule(&self) -> Rule;
    fn key(&self) -> &str;
    fn message(&self) -> String;
}

impl Reportable for BuildError {
    fn severity(&self) -> Severity {
        BuildError::severity()
    }
    fn rule(&self) -> Rule {
        BuildError::rule(self)
    }
    fn key(&self) -> &str {
        &self.key
    }
    fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Reportable for BuildWarning {
    fn severity(&self) -> Severity {
        BuildWarning::severity()
    }
    fn rule(&self) -> Rule {
        BuildWarning::rule(self)
    }
    fn key(&self) -> &str {
        &self.key
    }
    fn message(&self) -> String {
        self.kind.to_string()
    }
}

fn print_issue<W: Write, R: Reportable>(path: &str, issue: &R, writer: &mut W) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}: key '{}'",
        "-->".blue(),
        path,
        issue.key()
    );
    let _ = writeln!(writer);
}

fn print_problem_count<W: Write>(catalogs: &[CatalogReport], writer: &mut W) {
    let total_errors: usize = catalogs
        .iter()
        .map(|c| c.errors.len() + usize::from(c.load_error.is_some()))
        .sum();
    let total_warnings: usize = catalogs.iter().map(|c| c.warnings.len()).sum();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// One aligned line per catalog: project name, function count and path.
fn print_catalog_table<W: Write>(catalogs: &[CatalogReport], writer: &mut W) {
    let name_of = |c: &CatalogReport| c.project_name.clone().unwrap_or_else(|| "-".to_string());
    let max_width = catalogs
        .iter()
        .map(|c| name_of(c).width())
        .max()
        .unwrap_or(0);

    for catalog in catalogs {
        let name = name_of(catalog);
        let padding = " ".repeat(max_width - name.width());
        let mark = if catalog.load_error.is_some() || !catalog.errors.is_empty() {
            FAILURE_MARK.red()
        } else {
            SUCCESS_MARK.green()
        };
        let _ = writeln!(
            writer,
            "  {} {}{}  {} functions, {} filtered  {}",
            mark,
            name,
            padding,
            catalog.functions,
            catalog.filtered_out,
            catalog.path.dimmed()
        );
    }
}

fn print_generate<W: Write>(result: &CommandResult, summary: &GenerateSummary, writer: &mut W) {
    if !summary.written {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Nothing written; fix the errors above or pass --allow-partial".red()
        );
        return;
    }

    let written = result.catalogs.iter().filter(|c| c.output.is_some()).count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} functions from {} catalogs into {}",
            result.function_count(),
            written,
            summary.out_dir.display()
        )
        .green()
    );
    if summary.allow_partial && result.error_count() > 0 {
        let _ = writeln!(
            writer,
            "{} keys with errors were left out",
            result.error_count().to_string().yellow()
        );
    }
}

fn print_check<W: Write>(result: &CommandResult, writer: &mut W) {
    if result.error_count() > 0 || result.failed_catalog_count() > 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalogs: {} functions, no errors",
            result.catalogs.len(),
            result.function_count()
        )
        .green()
    );
}
