//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Resolve a key in the active (or given) language
//! - `language`: Show or switch the active language
//! - `keys`: List the keys of a catalog
//! - `check`: Compare catalogs against the default language
//! - `init`: Write a default `.isimrc.json`
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{core::Param, rules::CheckRule};

#[derive(Debug, Parser)]
#[command(name = "isim-i18n", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Translate(cmd)) => Some(&cmd.common),
            Some(Command::Language(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project directory; the config file is searched from here upwards
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Catalog directory (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Storage file for the active language (overrides config file)
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Language used when nothing is saved (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dotted key, e.g. `hero.title`
    pub key: String,

    /// Interpolation parameter; repeat for several
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<Param>,

    /// Resolve in this language instead of the active one (not saved)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguageCommand {
    /// Language to switch to; prints the active language when omitted
    pub language: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Catalog to list (default: the active language)
    #[arg(long)]
    pub lang: Option<String>,

    /// Show values next to keys
    #[arg(long)]
    pub values: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a translation key
    Translate(TranslateCommand),
    /// Show or switch the active language
    Language(LanguageCommand),
    /// List catalog keys
    Keys(KeysCommand),
    /// Check catalogs for missing, orphan, mismatched or untranslated entries
    Check(CheckCommand),
    /// Initialize a new .isimrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
