use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    core::context::I18nContext,
    rules::{CheckInput, run_checks},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = I18nContext::new(&cmd.common)?;
    let catalog_source = ctx.catalog_source();

    let input = CheckInput {
        catalogs: ctx.catalogs(),
        default_language: &ctx.config.default_language,
        supported_languages: &ctx.config.supported_languages,
        catalog_source: &catalog_source,
    };
    let issues = run_checks(&cmd.checks, &input, &ctx.warnings);

    let summary = CheckSummary {
        catalog_count: ctx.catalogs().len(),
        key_count: input.default_catalog().map_or(0, |c| c.len()),
    };

    Ok(CommandResult::with_issues(
        CommandSummary::Check(summary),
        issues,
    ))
}
