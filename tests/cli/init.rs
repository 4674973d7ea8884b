use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "✓ Created .isimrc.json\n");

    let content = test.read_file(".isimrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["supportedLanguages"], serde_json::json!(["en", "my"]));
    assert_eq!(parsed["storagePath"], ".isim/storage.json");
    assert!(parsed.get("messagesRoot").is_none());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    // The generated config is usable as-is.
    let out = test.run(&["translate", "nav.home"])?;
    assert_eq!(out.stdout, "Home\n");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".isimrc.json", "{}")?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr, "Error: .isimrc.json already exists\n");
    assert_eq!(test.read_file(".isimrc.json")?, "{}");

    Ok(())
}
