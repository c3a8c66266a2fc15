//! Build every catalog and report problems without writing output.

use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::{CommandContext, catalog_report}};
use crate::{cli::args::CheckCommand, core::pipeline::Pipeline};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    Ok(check_with(&ctx))
}

pub fn check_with(ctx: &CommandContext) -> CommandResult {
    let pipeline = Pipeline {
        filter: &ctx.filter,
        placement: &ctx.placement,
        renderer: ctx.renderer,
    };
    let catalogs = pipeline
        .generate_files(&ctx.catalogs)
        .iter()
        .map(|(path, outcome)| catalog_report(ctx.display_path(path), outcome))
        .collect();

    CommandResult {
        summary: CommandSummary::Check,
        catalogs,
    }
}
