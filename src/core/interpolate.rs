//! `{name}` placeholder substitution for resolved translations.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
    sync::LazyLock,
};

use anyhow::{Result, bail};
use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Placeholder values for a single lookup. Values are stored as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, converting it to a string.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// One `name=value` pair as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: String,
}

impl FromStr for Param {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((name, value)) = s.split_once('=') else {
            bail!("expected NAME=VALUE, got \"{}\"", s);
        };
        if name.is_empty() {
            bail!("parameter name is empty in \"{}\"", s);
        }
        Ok(Param {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl From<Vec<Param>> for Params {
    fn from(params: Vec<Param>) -> Self {
        params.into_iter().map(|p| (p.name, p.value)).collect()
    }
}

/// Replace every `{name}` token with its parameter value.
///
/// Tokens with no parameter, or whose value is empty, are kept verbatim.
/// Substituted text is not rescanned.
pub fn interpolate<'a>(template: &'a str, params: &Params) -> Cow<'a, str> {
    if params.is_empty() {
        return Cow::Borrowed(template);
    }
    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures| {
        match params.get(&caps[1]) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => caps[0].to_string(),
        }
    })
}

/// Names of all placeholders in `template`.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
