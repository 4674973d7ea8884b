use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::Config,
    core::Params,
    issues::{Issue, Report},
};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path of the project (where `.isimrc.json` is looked up)
    pub project_root_path: String,
    /// Dotted key, e.g. `hero.title`
    pub key: String,
    /// Values for `{name}` placeholders. Strings are used as-is, numbers
    /// and booleans are formatted, null leaves the placeholder in place.
    #[serde(default)]
    pub params: Option<BTreeMap<String, Value>>,
    /// Resolve in this language instead of the active one
    #[serde(default)]
    pub language: Option<String>,
}

impl TranslateParams {
    pub fn interpolation_params(&self) -> Params {
        let mut params = Params::new();
        for (name, value) in self.params.iter().flatten() {
            match value {
                Value::Null => {}
                Value::String(s) => params.insert(name.as_str(), s),
                other => params.insert(name.as_str(), other),
            }
        }
        params
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLanguageParams {
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetLanguageParams {
    pub project_root_path: String,
    /// Language identifier to make active, e.g. `my`
    pub language: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListKeysParams {
    pub project_root_path: String,
    /// Catalog to list (default: the active language)
    #[serde(default)]
    pub language: Option<String>,
    /// Page size (default 50, max 200)
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckCatalogsParams {
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    pub project_root_path: String,
}

// ============================================================
// Translate / Language Results
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub key: String,
    pub language: String,
    /// Resolved text; equal to `key` when not found
    pub value: String,
    pub found: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResult {
    pub language: String,
    /// Set by `set_language` to the language that was active before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub default_language: String,
    /// Whether a catalog exists for `language`
    pub has_catalog: bool,
    pub available_languages: Vec<String>,
    pub storage_path: String,
}

// ============================================================
// Key Listing (list_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyListResult {
    pub language: String,
    pub has_catalog: bool,
    pub total_count: usize,
    pub items: Vec<KeyItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyItem {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Check Results (check_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub catalog_source: String,
    pub languages: Vec<String>,
    pub error_count: usize,
    pub warning_count: usize,
    pub items: Vec<IssueItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub severity: String,
    pub rule: String,
    /// Key, language or error text, depending on the rule
    pub message: String,
    pub file_path: String,
    /// 0 for file-level issues
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        Self {
            severity: issue.severity().to_string(),
            rule: issue.rule().to_string(),
            message: issue.message(),
            file_path: issue.file_path().to_string(),
            line: issue.line(),
            details: issue.details(),
        }
    }
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    /// Null when the builtin catalogs are used
    pub messages_root: Option<String>,
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub storage_path: String,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            messages_root: c.messages_root,
            default_language: c.default_language,
            supported_languages: c.supported_languages,
            storage_path: c.storage_path,
        }
    }
}
