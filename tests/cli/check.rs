use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_check_clean_catalogs() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", r#"{"nav": {"home": "Home", "faq": "FAQ"}}"#),
        ("my", r#"{"nav": {"home": "ပင်မ", "faq": "မေးခွန်းများ"}}"#),
    ])?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "✓ Checked 2 catalogs (2 keys) - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", "{\n  \"nav\": {\n    \"home\": \"Home\",\n    \"faq\": \"FAQ\"\n  }\n}\n"),
        ("my", r#"{"nav": {"home": "ပင်မ"}}"#),
    ])?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"nav.faq\"  missing-translation"));
    assert!(out.stdout.contains("messages/en.json:4"));
    assert!(out.stdout.contains("= note: (\"FAQ\") missing in: my"));
    assert!(out.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_placeholder_mismatch() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", r#"{"footer": {"copyright": "© {year} iSIM"}}"#),
        ("my", r#"{"footer": {"copyright": "© 2024 iSIM"}}"#),
    ])?;

    let out = test.run(&["check", "placeholder"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("placeholder-mismatch"));
    assert!(out.stdout.contains("in my: expected {year}, found none"));

    Ok(())
}

#[test]
fn test_check_warnings_only_succeeds() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", r#"{"nav": {"home": "Home"}}"#),
        ("my", r#"{"nav": {"home": "Home"}, "old": "ဟောင်း"}"#),
    ])?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"old\"  orphan-key"));
    assert!(out.stdout.contains("warning: \"nav.home\"  untranslated"));
    assert!(out.stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_check_selected_rule_only() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", r#"{"nav": {"home": "Home", "faq": "FAQ"}}"#),
        ("my", r#"{"nav": {"home": "Home"}}"#),
    ])?;

    let out = test.run(&["check", "untranslated"])?;
    assert_eq!(out.code, Some(0));
    assert!(!out.stdout.contains("missing-translation"));
    assert!(out.stdout.contains("untranslated"));

    Ok(())
}

#[test]
fn test_check_missing_catalog() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", r#"{"a": "A"}"#)])?;
    test.write_file(
        ".isimrc.json",
        r#"{ "messagesRoot": "messages", "supportedLanguages": ["en", "my"] }"#,
    )?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"my\"  missing-catalog"));
    assert!(out.stdout.contains("supported language 'my' has no catalog"));

    Ok(())
}

#[test]
fn test_check_broken_catalog_is_reported() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", r#"{"a": "A"}"#),
        ("my", r#"{"a": "#),
    ])?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("catalog-error"));
    assert!(out.stdout.contains("messages/my.json"));

    Ok(())
}

#[test]
fn test_check_reports_dotted_keys() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("en", r#"{"a.b": "Apple", "c": "Cherry"}"#),
        ("my", r#"{"a.b": "ပန်းသီး", "c": "ချယ်ရီ"}"#),
    ])?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("catalog-error"));
    assert!(out.stdout.contains("key 'a.b' contains '.' and can never be looked up"));
    assert!(out.stdout.contains("2 problems (2 errors, 0 warnings)"));

    let keys = test.run(&["keys"])?;
    assert!(!keys.stdout.contains("a.b"));

    Ok(())
}

#[test]
fn test_check_builtin_catalogs_have_no_errors() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(0));
    assert!(!out.stdout.contains("error:"));

    Ok(())
}

#[test]
fn test_check_missing_messages_dir_is_error() -> Result<()> {
    let test = CliTest::with_file(".isimrc.json", r#"{ "messagesRoot": "nowhere" }"#)?;

    let out = test.run(&["check"])?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("does not exist"));

    Ok(())
}
