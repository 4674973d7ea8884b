use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config, validate_language_id},
    core::{
        Catalogs,
        language::LanguageState,
        parsers::json::{CatalogWarning, builtin_catalogs, scan_catalog_dir},
    },
    storage::FileStore,
};

/// Everything a command needs: configuration, loaded catalogs and the
/// language state for this session.
///
/// Built once per CLI invocation or MCP tool call. Catalogs are loaded here
/// and never reloaded; the active language is restored from storage.
pub struct I18nContext {
    pub config: Config,
    /// True if `.isimrc.json` was found.
    pub from_file: bool,
    pub root_dir: PathBuf,
    /// Catalog directory, or `None` for the builtin catalogs.
    pub messages_dir: Option<PathBuf>,
    pub storage_path: PathBuf,
    /// Problems found while loading catalogs.
    pub warnings: Vec<CatalogWarning>,
    pub verbose: bool,
    state: LanguageState,
}

impl I18nContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = args.path.clone();
        let config_result = load_config(&root_dir)?;

        if args.verbose && !config_result.from_file {
            eprintln!("Note: No .isimrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(language) = &args.default_language {
            validate_language_id(language).context("Invalid --default-language")?;
            config.default_language = language.clone();
        }

        let base_dir = config_result.base_dir;
        let messages_dir = match &args.messages_root {
            Some(dir) => Some(resolve_path(&root_dir, dir)),
            None => config
                .messages_root
                .as_ref()
                .map(|dir| resolve_path(&base_dir, Path::new(dir))),
        };
        let storage_path = match &args.storage {
            Some(path) => resolve_path(&root_dir, path),
            None => resolve_path(&base_dir, Path::new(&config.storage_path)),
        };

        let (catalogs, warnings) = load_catalogs(messages_dir.as_deref())?;
        for warning in &warnings {
            tracing::warn!(file = %warning.file_path, "{}", warning.error);
        }

        let state = LanguageState::init(
            catalogs,
            FileStore::new(&storage_path).into(),
            &config.default_language,
        );

        Ok(Self {
            config,
            from_file: config_result.from_file,
            root_dir,
            messages_dir,
            storage_path,
            warnings,
            verbose: args.verbose,
            state,
        })
    }

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LanguageState {
        &mut self.state
    }

    pub fn catalogs(&self) -> &Catalogs {
        self.state.catalogs()
    }

    /// Human-readable catalog source for reports.
    pub fn catalog_source(&self) -> String {
        match &self.messages_dir {
            Some(dir) => dir.display().to_string(),
            None => "<builtin>".to_string(),
        }
    }
}

fn load_catalogs(messages_dir: Option<&Path>) -> Result<(Catalogs, Vec<CatalogWarning>)> {
    match messages_dir {
        Some(dir) => {
            let scan = scan_catalog_dir(dir)?;
            Ok((scan.catalogs, scan.warnings))
        }
        None => Ok((builtin_catalogs()?, Vec::new())),
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
