//! Report formatting and printing utilities.
//!
//! Issues are shown cargo-style; other commands print plain lines so their
//! output can be piped. Kept apart from the commands so the library can be
//! used without any terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, InitSummary, KeysSummary, LanguageSummary,
    TranslateSummary,
};
use crate::{
    config::CONFIG_FILE_NAME,
    issues::{Issue, Report, ReportLocation, Severity},
    utils::{single_line, truncate_to_width},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Widest value shown by `keys --values`, in terminal columns.
const MAX_VALUE_WIDTH: usize = 60;

/// Print issues in cargo-style format. Issues are expected to be sorted.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} ({} {}) - no issues found",
            summary.catalog_count,
            if summary.catalog_count == 1 {
                "catalog"
            } else {
                "catalogs"
            },
            summary.key_count,
            if summary.key_count == 1 { "key" } else { "keys" }
        )
        .green()
    );
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err);
}

/// Print a command result: normal output to `out`, warnings to `err`.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Translate(summary) => print_translate(summary, verbose, out, err),
        CommandSummary::Language(summary) => print_language(summary, out, err),
        CommandSummary::Keys(summary) => print_keys(summary, out, err),
        CommandSummary::Check(summary) => {
            if result.issues.is_empty() {
                print_success_to(summary, out);
            } else {
                report_to(&result.issues, out);
            }
        }
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let location = match issue.location() {
        ReportLocation::Message(ctx) => format!("{}:{}", ctx.file_path(), ctx.line()),
        ReportLocation::File { path } => path.to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 { "problem" } else { "problems" },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn print_no_catalog_warning<E: Write>(language: &str, err: &mut E) {
    let _ = writeln!(
        err,
        "{} no catalog for language '{}'; keys will resolve to themselves",
        "warning:".bold().yellow(),
        language
    );
}

fn print_translate<W: Write, E: Write>(
    summary: &TranslateSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    let _ = writeln!(out, "{}", summary.value);
    if verbose && !summary.found {
        let _ = writeln!(
            err,
            "{} \"{}\" not found in '{}'",
            "note:".bold(),
            summary.key,
            summary.language
        );
    }
}

fn print_language<W: Write, E: Write>(summary: &LanguageSummary, out: &mut W, err: &mut E) {
    match &summary.previous {
        None => {
            let _ = writeln!(out, "{}", summary.language);
        }
        Some(previous) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Language set to {} (was {}), saved to {}",
                    summary.language, previous, summary.storage_path
                )
                .green()
            );
        }
    }
    if !summary.has_catalog {
        print_no_catalog_warning(&summary.language, err);
    }
}

fn print_keys<W: Write, E: Write>(summary: &KeysSummary, out: &mut W, err: &mut E) {
    if !summary.has_catalog {
        print_no_catalog_warning(&summary.language, err);
        return;
    }

    if !summary.show_values {
        for (key, _) in &summary.entries {
            let _ = writeln!(out, "{}", key);
        }
        return;
    }

    let key_width = summary
        .entries
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);
    for (key, value) in &summary.entries {
        let value = single_line(value);
        let padding = key_width - key.width();
        let _ = writeln!(
            out,
            "{}{:padding$}  {}",
            key,
            "",
            truncate_to_width(&value, MAX_VALUE_WIDTH).dimmed(),
            padding = padding
        );
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Tests
// ============================================================
