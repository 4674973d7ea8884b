use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write `.isimrc.json` into the current directory, refusing to overwrite.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        let mut result = CommandResult::new(CommandSummary::Init(InitSummary { created: false }));
        result.error_count = 1;
        return Ok(result);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        created: true,
    })))
}
