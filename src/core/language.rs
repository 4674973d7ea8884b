//! Active language for a session.
//!
//! `LanguageState` is the one owner of the selected language. Consumers get
//! it passed in and read through `translator()`; only `set_language` writes.

use anyhow::{Context, Result};

use crate::{
    config::validate_language_id,
    core::{
        Catalogs,
        interpolate::Params,
        resolve::Translator,
    },
    storage::{ClientStore, STORAGE_KEY, Store},
};

/// Fallback language when storage holds nothing usable.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Catalogs, the selected language and where the selection is persisted.
#[derive(Debug)]
pub struct LanguageState {
    catalogs: Catalogs,
    language: String,
    store: Store,
}

impl LanguageState {
    /// Start a session, restoring the persisted language.
    ///
    /// An absent, blank, malformed or unreadable entry selects
    /// `default_language`.
    /// A persisted language with no catalog is kept as-is.
    pub fn init(catalogs: Catalogs, store: Store, default_language: &str) -> Self {
        let language = match store.load(STORAGE_KEY) {
            Ok(Some(saved)) if !saved.trim().is_empty() => match validate_language_id(&saved) {
                Ok(()) => saved,
                Err(e) => {
                    tracing::warn!("ignoring saved language ({:#}), using {}", e, default_language);
                    default_language.to_string()
                }
            },
            Ok(_) => default_language.to_string(),
            Err(e) => {
                tracing::warn!(
                    "could not read saved language ({:#}), using {}",
                    e,
                    default_language
                );
                default_language.to_string()
            }
        };

        if !catalogs.contains(&language) {
            tracing::warn!(language = %language, "active language has no catalog");
        }

        Self {
            catalogs,
            language,
            store,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Whether a catalog is loaded for `language`.
    pub fn is_supported(&self, language: &str) -> bool {
        self.catalogs.contains(language)
    }

    /// Switch the active language and persist the choice.
    ///
    /// The switch takes effect for this session even if persisting fails;
    /// the storage error is still returned.
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        tracing::debug!(from = %self.language, to = language, "switching language");
        self.language = language.to_string();
        self.store
            .save(STORAGE_KEY, language)
            .with_context(|| format!("Failed to persist language '{}'", language))
    }

    /// Resolver for the active language.
    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.catalogs, &self.language)
    }

    /// Resolver for another language, without switching.
    pub fn translator_for<'a>(&'a self, language: &'a str) -> Translator<'a> {
        Translator::new(&self.catalogs, language)
    }

    pub fn t(&self, key: &str) -> String {
        self.translator().t(key)
    }

    pub fn t_with(&self, key: &str, params: &Params) -> String {
        self.translator().t_with(key, params)
    }
}
