//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Build and write accessor modules for translation catalogs
//! - `check`: Build catalogs and report problems without writing anything
//! - `init`: Create a default `.locgenrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `generate` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalog file or directory (overrides config file, repeatable)
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalogs: Vec<PathBuf>,

    /// Include hidden keys (overrides config file)
    #[arg(long)]
    pub include_hidden: bool,

    /// Include archived keys (overrides config file)
    #[arg(long)]
    pub include_archived: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Write output even when some keys fail to build (failed keys are left out)
    #[arg(long)]
    pub allow_partial: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate locale-dispatching accessor functions from catalogs
    Generate(GenerateCommand),
    /// Build catalogs and report problems without writing files
    Check(CheckCommand),
    /// Initialize a new .locgenrc.json configuration file
    Init,
}
