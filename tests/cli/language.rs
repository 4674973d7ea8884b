use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn test_language_defaults_to_en() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["language"])?;
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "en\n");
    assert!(!test.root().join(".isim").exists());

    Ok(())
}

#[test]
fn test_switch_is_persisted() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["language", "my"])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Language set to my (was en)"));

    let saved: Value = serde_json::from_str(&test.read_file(".isim/storage.json")?)?;
    assert_eq!(saved, json!({"language": "my"}));

    let out = test.run(&["language"])?;
    assert_eq!(out.stdout, "my\n");

    let out = test.run(&["translate", "nav.home"])?;
    assert_eq!(out.stdout, "ပင်မစာမျက်နှာ\n");

    Ok(())
}

#[test]
fn test_switch_back_and_forth() -> Result<()> {
    let test = CliTest::new()?;

    test.run(&["language", "my"])?;
    let out = test.run(&["language", "en"])?;
    assert!(out.stdout.contains("Language set to en (was my)"));

    let out = test.run(&["translate", "nav.home"])?;
    assert_eq!(out.stdout, "Home\n");

    Ok(())
}

#[test]
fn test_unknown_language_warns_and_falls_back() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["language", "fr"])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stderr.contains("no catalog for language 'fr'"));

    let out = test.run(&["translate", "nav.home"])?;
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "nav.home\n");

    Ok(())
}

#[test]
fn test_invalid_language_id_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["language", "en.US"])?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.starts_with("Error:"));
    assert!(!test.root().join(".isim/storage.json").exists());

    Ok(())
}

#[test]
fn test_blank_saved_language_uses_default() -> Result<()> {
    let test = CliTest::with_file(".isim/storage.json", r#"{"language": "  "}"#)?;

    let out = test.run(&["language"])?;
    assert_eq!(out.stdout, "en\n");

    Ok(())
}

#[test]
fn test_custom_storage_path() -> Result<()> {
    let test = CliTest::new()?;

    test.run(&["language", "my", "--storage", "state/lang.json"])?;
    assert!(test.root().join("state/lang.json").exists());
    assert!(!test.root().join(".isim/storage.json").exists());

    let out = test.run(&["language", "--storage", "state/lang.json"])?;
    assert_eq!(out.stdout, "my\n");
    let out = test.run(&["language"])?;
    assert_eq!(out.stdout, "en\n");

    Ok(())
}

#[test]
fn test_default_language_from_config() -> Result<()> {
    let test = CliTest::with_file(
        ".isimrc.json",
        r#"{ "defaultLanguage": "my", "supportedLanguages": ["en", "my"] }"#,
    )?;

    let out = test.run(&["language"])?;
    assert_eq!(out.stdout, "my\n");

    Ok(())
}
