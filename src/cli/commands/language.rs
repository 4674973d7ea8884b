use anyhow::Result;

use super::{CommandResult, CommandSummary, LanguageSummary};
use crate::{
    cli::args::LanguageCommand, config::validate_language_id, core::context::I18nContext,
};

/// Print the active language, or switch and persist it.
pub fn language(cmd: LanguageCommand) -> Result<CommandResult> {
    let mut ctx = I18nContext::new(&cmd.common)?;

    let previous = match cmd.language {
        Some(language) => {
            validate_language_id(&language)?;
            let previous = ctx.state().language().to_string();
            ctx.state_mut().set_language(&language)?;
            Some(previous)
        }
        None => None,
    };

    let state = ctx.state();
    Ok(CommandResult::new(CommandSummary::Language(
        LanguageSummary {
            language: state.language().to_string(),
            previous,
            has_catalog: state.is_supported(state.language()),
            storage_path: ctx.storage_path.display().to_string(),
        },
    )))
}
