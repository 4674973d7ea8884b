//! Orphan key detection rule.
//!
//! Keys present in a translation but absent from the default language are
//! never looked up by the site and usually mean a key was renamed or removed.

use crate::{
    issues::{Issue, OrphanKeyIssue},
    rules::CheckInput,
};

pub fn check_orphan_keys(input: &CheckInput<'_>) -> Vec<Issue> {
    let Some(default_catalog) = input.default_catalog() else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for catalog in input.other_catalogs() {
        for key in catalog.leaf_keys() {
            if default_catalog.contains_key(&key) {
                continue;
            }
            if let Some(context) = catalog.context(&key) {
                issues.push(Issue::OrphanKey(OrphanKeyIssue {
                    context,
                    language: catalog.language.clone(),
                }));
            }
        }
    }
    issues
}
