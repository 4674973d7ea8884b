use isim_i18n::mcp::{IsimMcpServer, types::CheckCatalogsParams};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::Value;

use crate::{extract_tool_result_json, fixture_site, fixture_with_issues};

fn find<'a>(items: &'a [Value], rule: &str) -> Vec<&'a Value> {
    items.iter().filter(|item| item["rule"] == rule).collect()
}

#[tokio::test]
async fn test_check_clean_site() {
    let fixture = fixture_site().unwrap();
    let server = IsimMcpServer::new();

    let result = server
        .check_catalogs(Parameters(CheckCatalogsParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["errorCount"], 0);
    assert_eq!(json_result["warningCount"], 0);
    assert!(json_result["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_check_reports_each_rule() {
    let fixture = fixture_with_issues().unwrap();
    let server = IsimMcpServer::new();

    let result = server
        .check_catalogs(Parameters(CheckCatalogsParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    let items = json_result["items"].as_array().unwrap();

    let missing = find(items, "missing-translation");
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0]["message"], "nav.faq");
    assert_eq!(missing[0]["severity"], "error");
    assert!(missing[0]["filePath"].as_str().unwrap().ends_with("en.json"));

    let orphan = find(items, "orphan-key");
    assert_eq!(orphan.len(), 1);
    assert_eq!(orphan[0]["message"], "nav.old");
    assert_eq!(orphan[0]["severity"], "warning");

    let placeholder = find(items, "placeholder-mismatch");
    assert_eq!(placeholder.len(), 1);
    assert_eq!(placeholder[0]["message"], "footer.copyright");
    assert_eq!(
        placeholder[0]["details"],
        "in my: expected {year}, found none"
    );

    let untranslated = find(items, "untranslated");
    assert_eq!(untranslated.len(), 1);
    assert_eq!(untranslated[0]["message"], "nav.plans");

    assert_eq!(json_result["errorCount"], 2);
    assert_eq!(json_result["warningCount"], 2);
}
