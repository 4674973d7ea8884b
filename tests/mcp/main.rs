use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a messages/ directory and a config
/// pointing at it.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty project that uses the builtin catalogs
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a project with catalogs in messages/<language>.json
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_messages(vec![
    ///     ("en", json!({"nav": {"home": "Home"}})),
    ///     ("my", json!({"nav": {"home": "ပင်မ"}})),
    /// ])?;
    /// ```
    pub fn with_messages(catalogs: Vec<(&str, Value)>) -> Result<Self> {
        let fixture = Self::new()?;
        fs::create_dir_all(fixture.project_root.join("messages"))?;

        let languages: Vec<&str> = catalogs.iter().map(|(language, _)| *language).collect();
        fixture.write_config(&json!({
            "messagesRoot": "messages",
            "supportedLanguages": languages,
        }))?;

        for (language, content) in &catalogs {
            fixture.write_locale_file(language, content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog to messages/<language>.json
    pub fn write_locale_file(&self, language: &str, content: &Value) -> Result<()> {
        let path = self
            .project_root
            .join("messages")
            .join(format!("{}.json", language));
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for language: {}", language))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Write a .isimrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".isimrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Read the persisted storage file, if any
    pub fn read_storage(&self) -> Option<Value> {
        let content = fs::read_to_string(self.project_root.join(".isim/storage.json")).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Two complete catalogs with one interpolated value
pub fn fixture_site() -> Result<McpTestFixture> {
    McpTestFixture::with_messages(vec![
        (
            "en",
            json!({
                "nav": {"home": "Home", "plans": "Plans"},
                "footer": {"copyright": "© {year} iSIM"}
            }),
        ),
        (
            "my",
            json!({
                "nav": {"home": "ပင်မ", "plans": "အစီအစဉ်များ"},
                "footer": {"copyright": "© {year} iSIM မြန်မာ"}
            }),
        ),
    ])
}

/// Catalogs with one issue of each kind
pub fn fixture_with_issues() -> Result<McpTestFixture> {
    McpTestFixture::with_messages(vec![
        (
            "en",
            json!({
                "nav": {"home": "Home", "faq": "FAQ", "plans": "Plans"},
                "footer": {"copyright": "© {year} iSIM"}
            }),
        ),
        (
            "my",
            json!({
                "nav": {"home": "ပင်မ", "plans": "Plans", "old": "ဟောင်း"},
                "footer": {"copyright": "© 2024 iSIM"}
            }),
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a list result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
