use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::language::DEFAULT_LANGUAGE;

pub const CONFIG_FILE_NAME: &str = ".isimrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory of `<language>.json` catalogs. Unset means the builtin
    /// site catalogs.
    #[serde(default, alias = "messagesDir", skip_serializing_if = "Option::is_none")]
    pub messages_root: Option<String>,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_supported_languages() -> Vec<String> {
    ["en", "my"].map(String::from).to_vec()
}

fn default_storage_path() -> String {
    ".isim/storage.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: None,
            default_language: default_language(),
            supported_languages: default_supported_languages(),
            storage_path: default_storage_path(),
        }
    }
}

/// Check that `language` can be used as a catalog name and lookup root.
pub fn validate_language_id(language: &str) -> Result<()> {
    if language.is_empty() {
        bail!("Language identifier must not be empty");
    }
    if language.contains('.') || language.chars().any(char::is_whitespace) {
        bail!(
            "Invalid language identifier \"{}\": dots and whitespace are not allowed",
            language
        );
    }
    Ok(())
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_language_id(&self.default_language).context("Invalid 'defaultLanguage'")?;

        if self.supported_languages.is_empty() {
            bail!("'supportedLanguages' must list at least one language");
        }
        for language in &self.supported_languages {
            validate_language_id(language).context("Invalid entry in 'supportedLanguages'")?;
        }
        if !self.supported_languages.contains(&self.default_language) {
            bail!(
                "'defaultLanguage' \"{}\" is not listed in 'supportedLanguages'",
                self.default_language
            );
        }
        if self.storage_path.trim().is_empty() {
            bail!("'storagePath' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against: the
    /// config file's directory, or the start directory for defaults.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
