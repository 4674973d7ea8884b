//! Catalog check rules.
//!
//! Each rule is a pure function over the loaded catalogs that returns the
//! issues it finds. The default language's catalog is the reference every
//! other supported language is compared against.
//!
//! ## Module Structure
//!
//! - `missing`: keys (or whole catalogs) the default language has and others lack
//! - `orphan`: keys other languages have and the default language lacks
//! - `placeholder`: translations whose `{name}` tokens differ from the default
//! - `untranslated`: values identical to the default language

pub mod missing;
pub mod orphan;
pub mod placeholder;
pub mod untranslated;

use clap::ValueEnum;

use crate::{
    core::{Catalogs, LocaleCatalog, parsers::json::CatalogWarning},
    issues::{CatalogErrorIssue, Issue, compare_issues},
};

/// Selectable check rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Orphan,
    Placeholder,
    Untranslated,
}

impl CheckRule {
    pub const ALL: [CheckRule; 4] = [
        CheckRule::Missing,
        CheckRule::Orphan,
        CheckRule::Placeholder,
        CheckRule::Untranslated,
    ];
}

/// What the rules look at.
pub struct CheckInput<'a> {
    pub catalogs: &'a Catalogs,
    pub default_language: &'a str,
    pub supported_languages: &'a [String],
    /// Shown as the location of catalogs that do not exist.
    pub catalog_source: &'a str,
}

impl<'a> CheckInput<'a> {
    pub fn default_catalog(&self) -> Option<&'a LocaleCatalog> {
        self.catalogs.get(self.default_language)
    }

    /// Loaded catalogs other than the default language's, in language order.
    ///
    /// Languages outside `supported_languages` are compared too: a stray
    /// catalog is still served to anyone who selects it.
    pub fn other_catalogs(&self) -> Vec<&'a LocaleCatalog> {
        self.catalogs
            .languages()
            .into_iter()
            .filter(|language| *language != self.default_language)
            .filter_map(|language| self.catalogs.get(language))
            .collect()
    }
}

/// Run `rules` (all rules when empty) and return issues sorted for output.
///
/// Catalog load warnings are always included.
pub fn run_checks(
    rules: &[CheckRule],
    input: &CheckInput<'_>,
    warnings: &[CatalogWarning],
) -> Vec<Issue> {
    let rules: &[CheckRule] = if rules.is_empty() {
        &CheckRule::ALL
    } else {
        rules
    };

    let mut issues: Vec<Issue> = warnings
        .iter()
        .map(|w| {
            Issue::CatalogError(CatalogErrorIssue {
                file_path: w.file_path.clone(),
                error: w.error.clone(),
            })
        })
        .collect();

    for rule in rules {
        match rule {
            CheckRule::Missing => issues.extend(missing::check_missing(input)),
            CheckRule::Orphan => issues.extend(orphan::check_orphan_keys(input)),
            CheckRule::Placeholder => {
                issues.extend(placeholder::check_placeholders(input))
            }
            CheckRule::Untranslated => {
                issues.extend(untranslated::check_untranslated(input))
            }
        }
    }

    issues.sort_by(compare_issues);
    issues.dedup();
    issues
}
