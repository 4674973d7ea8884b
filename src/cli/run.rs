use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, init::init, keys::keys, language::language,
        translate::translate,
    },
};

/// Dispatch a parsed command.
///
/// Returns `Err` for failures that prevent the command from running at all
/// (bad config, unreadable catalog directory, storage write errors).
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Language(cmd)) => language(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
