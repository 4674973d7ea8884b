use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const EN: &str = r#"{
  "nav": {"home": "Home", "faq": "FAQ"},
  "hero": {"title": "Stay connected\neverywhere"}
}"#;

#[test]
fn test_keys_sorted() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN)])?;

    assert_cmd_snapshot!(test.command().arg("keys"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    hero.title
    nav.faq
    nav.home

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_keys_with_values() -> Result<()> {
    let test = CliTest::with_catalogs(&[("en", EN)])?;

    let out = test.run(&["keys", "--values"])?;
    assert_eq!(
        out.stdout,
        "hero.title  Stay connected everywhere\n\
         nav.faq     FAQ\n\
         nav.home    Home\n"
    );

    Ok(())
}

#[test]
fn test_keys_other_language() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["keys", "--lang", "my"])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.lines().any(|line| line == "footer.copyright"));

    let out = test.run(&["keys", "--lang", "th"])?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("no catalog for language 'th'"));

    Ok(())
}
