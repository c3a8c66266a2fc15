//! Build every catalog and write one `<module>.rs` file per catalog.
//!
//! Strict by default: when any key fails to build, or a catalog cannot be
//! read, nothing is written. `--allow-partial` writes the successfully built
//! keys of every readable catalog.

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::{
    CommandResult, CommandSummary, GenerateSummary,
    helper::{CommandContext, catalog_report, resolve},
};
use crate::{cli::args::GenerateCommand, core::pipeline::Pipeline};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let out_dir = match cmd.out_dir {
        Some(dir) => resolve(&ctx.root, dir),
        None => resolve(&ctx.root, &ctx.config.out_dir),
    };
    generate_with(&ctx, out_dir, cmd.allow_partial)
}

pub fn generate_with(
    ctx: &CommandContext,
    out_dir: PathBuf,
    allow_partial: bool,
) -> Result<CommandResult> {
    let pipeline = Pipeline {
        filter: &ctx.filter,
        placement: &ctx.placement,
        renderer: ctx.renderer,
    };
    let outcomes = pipeline.generate_files(&ctx.catalogs);

    // Two projects mapping to the same file would overwrite each other.
    let mut seen: HashMap<String, &PathBuf> = HashMap::new();
    for (path, outcome) in &outcomes {
        if let Ok(generation) = outcome
            && let Some(previous) = seen.insert(generation.file_name(), path)
        {
            bail!(
                "Catalogs {} and {} both generate {}",
                ctx.display_path(previous),
                ctx.display_path(path),
                generation.file_name()
            );
        }
    }

    let blocked = outcomes.iter().any(|(_, outcome)| match outcome {
        Ok(generation) => generation.build.has_errors(),
        Err(_) => true,
    });
    let mut catalogs: Vec<_> = outcomes
        .iter()
        .map(|(path, outcome)| catalog_report(ctx.display_path(path), outcome))
        .collect();
    let written = allow_partial || !blocked;

    if written {
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;
        for ((_, outcome), report) in outcomes.iter().zip(catalogs.iter_mut()) {
            let Ok(generation) = outcome else {
                continue;
            };
            let target = out_dir.join(generation.file_name());
            fs::write(&target, &generation.source)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            tracing::debug!(path = %target.display(), "wrote module");
            report.output = Some(target);
        }
    } else {
        tracing::debug!("build errors; nothing written");
    }

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            out_dir: PathBuf::from(ctx.display_path(&out_dir)),
            written,
            allow_partial,
        }),
        catalogs,
    })
}
