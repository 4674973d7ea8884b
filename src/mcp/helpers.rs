use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::{cli::CommonArgs, core::context::I18nContext};

/// Default and maximum page sizes for `list_keys`.
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 200;

/// Load config, catalogs and the persisted language for a project.
pub fn load_context(project_root_path: &str) -> Result<I18nContext, McpError> {
    let args = CommonArgs {
        path: PathBuf::from(project_root_path),
        ..Default::default()
    };
    I18nContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Serialize `value` as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Clamp `limit`/`offset` from tool parameters.
pub fn page_bounds(limit: Option<u32>, offset: Option<u32>) -> (usize, usize) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    (limit, offset)
}
