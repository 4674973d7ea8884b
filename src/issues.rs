//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporters (CLI and MCP)
//! need to display it.

use std::collections::BTreeSet;

use enum_dispatch::enum_dispatch;

use crate::core::MessageContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    MissingCatalog,
    OrphanKey,
    PlaceholderMismatch,
    Untranslated,
    CatalogError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::MissingCatalog => write!(f, "missing-catalog"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::CatalogError => write!(f, "catalog-error"),
        }
    }
}

// ============================================================
// Issue Types - Catalog entries (MessageContext)
// ============================================================

/// Key in the default language that other languages lack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    /// The entry in the default language's catalog.
    pub context: MessageContext,
    pub default_language: String,
    /// Languages without this key, sorted.
    pub missing_in: Vec<String>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Key in a non-default language that the default language lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanKeyIssue {
    pub context: MessageContext,
    /// The language where this orphan key exists.
    pub language: String,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// Translation whose `{name}` placeholders differ from the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    /// The entry in the translated catalog.
    pub context: MessageContext,
    pub language: String,
    /// Placeholders in the default language's value.
    pub expected: BTreeSet<String>,
    /// Placeholders in this language's value.
    pub actual: BTreeSet<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Value is identical to the default language (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub default_language: String,
    /// Languages where the value is identical, sorted.
    pub identical_in: Vec<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Supported language with no catalog at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCatalogIssue {
    pub language: String,
    /// Where the catalog was expected.
    pub source: String,
}

impl MissingCatalogIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingCatalog
    }
}

/// Catalog file (or a value in it) could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl CatalogErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::CatalogError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in the loaded catalogs.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    MissingCatalog(MissingCatalogIssue),
    OrphanKey(OrphanKeyIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Untranslated(UntranslatedIssue),
    CatalogError(CatalogErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }
}

/// Order by file, then line, then message, for stable output.
pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    a.file_path()
        .cmp(b.file_path())
        .then_with(|| a.line().cmp(&b.line()))
        .then_with(|| a.message().cmp(&b.message()))
        .then_with(|| a.rule().cmp(&b.rule()))
}

// ============================================================
// Report Trait (for CLI and MCP output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// An entry in a catalog file.
    Message(&'a MessageContext),
    /// File-level only.
    File { path: &'a str },
}

/// Trait for types that can be reported.
///
/// Implemented by all issue types; `enum_dispatch` forwards it on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, language, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn format_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "none".to_string()
    } else {
        set.iter()
            .map(|name| format!("{{{}}}", name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for OrphanKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.language, self.context.value))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}: expected {}, found {}",
            self.language,
            format_set(&self.expected),
            format_set(&self.actual)
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") identical in: {}",
            self.context.value,
            self.identical_in.join(", ")
        ))
    }
}

impl Report for MissingCatalogIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File { path: &self.source }
    }

    fn message(&self) -> String {
        self.language.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "supported language '{}' has no catalog",
            self.language
        ))
    }
}

impl Report for CatalogErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
