//! Missing translation detection rule.
//!
//! Every key in the default language must resolve in every other language,
//! otherwise visitors using that language see the raw key. Supported
//! languages with no catalog at all are reported once instead of per key.

use crate::{
    issues::{Issue, MissingCatalogIssue, MissingTranslationIssue},
    rules::CheckInput,
};

pub fn check_missing(input: &CheckInput<'_>) -> Vec<Issue> {
    let mut issues: Vec<Issue> = input
        .supported_languages
        .iter()
        .filter(|language| !input.catalogs.contains(language))
        .map(|language| {
            Issue::MissingCatalog(MissingCatalogIssue {
                language: language.clone(),
                source: input.catalog_source.to_string(),
            })
        })
        .collect();

    let Some(default_catalog) = input.default_catalog() else {
        return issues;
    };
    let others = input.other_catalogs();

    for (key, _) in default_catalog.leaf_entries() {
        let missing_in: Vec<String> = others
            .iter()
            .filter(|catalog| !catalog.contains_key(&key))
            .map(|catalog| catalog.language.clone())
            .collect();

        if missing_in.is_empty() {
            continue;
        }
        if let Some(context) = default_catalog.context(&key) {
            issues.push(Issue::MissingTranslation(MissingTranslationIssue {
                context,
                default_language: input.default_language.to_string(),
                missing_in,
            }));
        }
    }

    issues
}
