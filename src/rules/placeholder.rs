//! Placeholder mismatch detection rule.
//!
//! A translation that drops `{year}` shows a stale value; one that invents
//! `{yaer}` shows the literal token. Both sides must name the same set.

use crate::{
    core::interpolate::placeholders,
    issues::{Issue, PlaceholderMismatchIssue},
    rules::CheckInput,
};

pub fn check_placeholders(input: &CheckInput<'_>) -> Vec<Issue> {
    let Some(default_catalog) = input.default_catalog() else {
        return Vec::new();
    };
    let others = input.other_catalogs();

    let mut issues = Vec::new();
    for (key, value) in default_catalog.leaf_entries() {
        let expected = placeholders(value);
        for catalog in &others {
            let Some(translated) = catalog.text(&key) else {
                continue;
            };
            let actual = placeholders(translated);
            if actual == expected {
                continue;
            }
            if let Some(context) = catalog.context(&key) {
                issues.push(Issue::PlaceholderMismatch(PlaceholderMismatchIssue {
                    context,
                    language: catalog.language.clone(),
                    expected: expected.clone(),
                    actual,
                }));
            }
        }
    }
    issues
}
