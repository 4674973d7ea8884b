use anyhow::Result;

use super::{CommandResult, CommandSummary, KeysSummary};
use crate::{cli::args::KeysCommand, core::context::I18nContext};

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = I18nContext::new(&cmd.common)?;
    let language = cmd
        .lang
        .unwrap_or_else(|| ctx.state().language().to_string());

    let catalog = ctx.catalogs().get(&language);
    let entries = catalog
        .map(|catalog| {
            catalog
                .leaf_entries()
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect()
        })
        .unwrap_or_default();

    Ok(CommandResult::new(CommandSummary::Keys(KeysSummary {
        has_catalog: catalog.is_some(),
        language,
        entries,
        show_values: cmd.values,
    })))
}
