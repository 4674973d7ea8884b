//! Translation key resolution.
//!
//! A lookup walks the active language's catalog one key segment at a time.
//! Any miss (unknown language, unknown segment, a leaf with segments left
//! over, or a walk ending on a group) resolves to the lookup key itself.
//! Resolution never fails.

use crate::core::{
    Catalogs, MessageNode,
    interpolate::{Params, interpolate},
};

/// Outcome of walking a key, before interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key names a leaf.
    Found(&'a str),
    /// The key does not name a leaf; the key itself stands in.
    Fallback,
}

/// Walk `key` in `language`'s catalog.
pub fn lookup<'a>(catalogs: &'a Catalogs, language: &str, key: &str) -> Lookup<'a> {
    let Some(catalog) = catalogs.get(language) else {
        return Lookup::Fallback;
    };

    let mut current = catalog.root();
    for segment in key.split('.') {
        match current {
            MessageNode::Group(children) => match children.get(segment) {
                Some(child) => current = child,
                None => return Lookup::Fallback,
            },
            MessageNode::Text(_) => return Lookup::Fallback,
        }
    }

    match current {
        MessageNode::Text(text) => Lookup::Found(text),
        MessageNode::Group(_) => Lookup::Fallback,
    }
}

/// Resolve `key` to display text in `language`, interpolating `params`.
pub fn resolve(catalogs: &Catalogs, language: &str, key: &str, params: &Params) -> String {
    match lookup(catalogs, language, key) {
        Lookup::Found(text) => interpolate(text, params).into_owned(),
        Lookup::Fallback => {
            tracing::debug!(key, language, "translation missing, using key");
            key.to_string()
        }
    }
}

/// Resolver bound to a catalog set and one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalogs: &'a Catalogs,
    language: &'a str,
}

impl<'a> Translator<'a> {
    pub fn new(catalogs: &'a Catalogs, language: &'a str) -> Self {
        Self { catalogs, language }
    }

    pub fn language(&self) -> &'a str {
        self.language
    }

    /// Resolve without placeholders.
    pub fn t(&self, key: &str) -> String {
        resolve(self.catalogs, self.language, key, &Params::new())
    }

    /// Resolve and substitute placeholders.
    pub fn t_with(&self, key: &str, params: &Params) -> String {
        resolve(self.catalogs, self.language, key, params)
    }

    /// Whether `key` names a leaf in this language.
    pub fn has(&self, key: &str) -> bool {
        matches!(
            lookup(self.catalogs, self.language, key),
            Lookup::Found(_)
        )
    }
}
