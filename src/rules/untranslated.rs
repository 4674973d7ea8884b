//! Untranslated value detection rule.
//!
//! Flags values that are byte-for-byte the same as the default language.
//! Values without any letter (prices, phone numbers) are skipped. Brand
//! names and addresses still show up here, which is why this is a warning.

use crate::{
    issues::{Issue, UntranslatedIssue},
    rules::CheckInput,
    utils::contains_alphabetic,
};

pub fn check_untranslated(input: &CheckInput<'_>) -> Vec<Issue> {
    let Some(default_catalog) = input.default_catalog() else {
        return Vec::new();
    };
    let others = input.other_catalogs();

    let mut issues = Vec::new();
    for (key, value) in default_catalog.leaf_entries() {
        if !contains_alphabetic(value) {
            continue;
        }

        let identical_in: Vec<String> = others
            .iter()
            .filter(|catalog| catalog.text(&key) == Some(value))
            .map(|catalog| catalog.language.clone())
            .collect();

        if identical_in.is_empty() {
            continue;
        }
        if let Some(context) = default_catalog.context(&key) {
            issues.push(Issue::Untranslated(UntranslatedIssue {
                context,
                default_language: input.default_language.to_string(),
                identical_in,
            }));
        }
    }
    issues
}
