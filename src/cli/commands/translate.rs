use anyhow::Result;

use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::{
    cli::args::TranslateCommand,
    core::{Params, context::I18nContext},
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = I18nContext::new(&cmd.common)?;
    let state = ctx.state();

    let translator = match cmd.lang.as_deref() {
        Some(language) => state.translator_for(language),
        None => state.translator(),
    };
    let params = Params::from(cmd.params);

    Ok(CommandResult::new(CommandSummary::Translate(
        TranslateSummary {
            found: translator.has(&cmd.key),
            value: translator.t_with(&cmd.key, &params),
            language: translator.language().to_string(),
            key: cmd.key,
        },
    )))
}
