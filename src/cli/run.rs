//! Dispatches parsed arguments to the matching command handler.

use std::env;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, CommandSummary, InitSummary, check::check, generate::generate, init::init,
    },
};
use crate::config::CONFIG_FILE_NAME;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            let dir = env::current_dir()?;
            init(&dir)?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary {
                    path: dir.join(CONFIG_FILE_NAME),
                }),
                catalogs: Vec::new(),
            })
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
