//! isim-i18n - translation resolver for the iSIM eSIM site
//!
//! Resolves dotted keys like `hero.title` against per-language catalogs,
//! fills `{name}` placeholders and falls back to the key itself when a
//! translation is missing. The selected language is persisted between
//! sessions under the storage key `"language"`.
//!
//! ```
//! use isim_i18n::core::{LanguageState, Params, parsers::json::builtin_catalogs};
//! use isim_i18n::storage::MemoryStore;
//!
//! let catalogs = builtin_catalogs().unwrap();
//! let mut state = LanguageState::init(catalogs, MemoryStore::new().into(), "en");
//!
//! assert_eq!(state.t("nav.nothing"), "nav.nothing");
//! let footer = state.t_with("footer.copyright", &Params::new().with("year", 2025));
//! assert!(footer.contains("2025"));
//!
//! state.set_language("my").unwrap();
//! assert_eq!(state.language(), "my");
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalogs, lookup, interpolation and the active language
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Catalog consistency checks
//! - `storage`: Durable key-value storage for the active language
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod storage;
pub mod utils;
