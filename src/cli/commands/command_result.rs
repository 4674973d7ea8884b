use crate::issues::{Issue, Severity};

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Language(LanguageSummary),
    Keys(KeysSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub key: String,
    pub language: String,
    /// Resolved text, or the key itself on a miss.
    pub value: String,
    pub found: bool,
}

#[derive(Debug)]
pub struct LanguageSummary {
    pub language: String,
    /// Set when the language was switched by this command.
    pub previous: Option<String>,
    pub has_catalog: bool,
    pub storage_path: String,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub language: String,
    pub has_catalog: bool,
    /// Sorted leaf keys with their values.
    pub entries: Vec<(String, String)>,
    pub show_values: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub catalog_count: usize,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a CLI command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Issues found by `check`; empty for other commands.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    /// Result with no issues.
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            exit_on_errors: true,
            issues: Vec::new(),
        }
    }

    /// Result carrying issues, with counts filled in.
    pub fn with_issues(summary: CommandSummary, issues: Vec<Issue>) -> Self {
        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        Self {
            summary,
            error_count,
            exit_on_errors: true,
            issues,
        }
    }
}
