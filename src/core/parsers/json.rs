use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{Catalogs, LocaleCatalog, MessageNode};

const BUILTIN_EN: &str = include_str!("../../../locales/en.json");
const BUILTIN_MY: &str = include_str!("../../../locales/my.json");

/// A problem found while loading catalog files.
///
/// Loading carries on past these: a bad file or a non-string value only
/// drops that file or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    pub catalogs: Catalogs,
    pub warnings: Vec<CatalogWarning>,
}

/// Parsed catalog plus any values that had to be skipped.
#[derive(Debug)]
pub struct ParsedCatalog {
    pub catalog: LocaleCatalog,
    pub warnings: Vec<CatalogWarning>,
}

pub fn parse_catalog_file(path: &Path, language: &str) -> Result<ParsedCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_catalog_str(language, &path.to_string_lossy(), &content)
}

/// Parse one language's catalog from JSON text.
///
/// The root must be an object. Strings become leaves, objects become groups
/// and arrays are expanded with index segments (`faq.items.0.question`).
pub fn parse_catalog_str(language: &str, file_path: &str, content: &str) -> Result<ParsedCatalog> {
    let json: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", file_path))?;

    if !json.is_object() {
        bail!(
            "Catalog '{}' must be a JSON object at the top level",
            file_path
        );
    }

    let line_index = build_line_index(content);
    let mut builder = TreeBuilder {
        file_path,
        content,
        line_index: &line_index,
        lines: HashMap::new(),
        warnings: Vec::new(),
    };
    let root = builder
        .build(&json, "")
        .unwrap_or_else(MessageNode::group);

    let TreeBuilder {
        lines, warnings, ..
    } = builder;
    Ok(ParsedCatalog {
        catalog: LocaleCatalog::new(language, file_path).with_root(root, lines),
        warnings,
    })
}

struct TreeBuilder<'a> {
    file_path: &'a str,
    content: &'a str,
    line_index: &'a [usize],
    lines: HashMap<String, usize>,
    warnings: Vec<CatalogWarning>,
}

impl TreeBuilder<'_> {
    fn build(&mut self, value: &Value, prefix: &str) -> Option<MessageNode> {
        match value {
            Value::Object(map) => {
                let mut children = BTreeMap::new();
                for (key, val) in map {
                    let path = join_key(prefix, key);
                    if let Some(reason) = unreachable_key_reason(key) {
                        self.warnings.push(CatalogWarning {
                            file_path: self.file_path.to_string(),
                            error: format!(
                                "key '{}' {} and can never be looked up",
                                path, reason
                            ),
                        });
                        continue;
                    }
                    if let Some(child) = self.build(val, &path) {
                        children.insert(key.clone(), child);
                    }
                }
                Some(MessageNode::Group(children))
            }
            Value::Array(items) => {
                let mut children = BTreeMap::new();
                for (index, val) in items.iter().enumerate() {
                    let segment = index.to_string();
                    let path = join_key(prefix, &segment);
                    if let Some(child) = self.build(val, &path) {
                        children.insert(segment, child);
                    }
                }
                Some(MessageNode::Group(children))
            }
            Value::String(s) => {
                let line = find_key_line(self.content, prefix, self.line_index);
                self.lines.insert(prefix.to_string(), line);
                Some(MessageNode::Text(s.clone()))
            }
            other => {
                let line = find_key_line(self.content, prefix, self.line_index);
                self.warnings.push(CatalogWarning {
                    file_path: self.file_path.to_string(),
                    error: format!(
                        "line {}: value of '{}' is {} and was skipped (expected a string)",
                        line,
                        prefix,
                        json_type_name(other)
                    ),
                });
                None
            }
        }
    }
}

/// Lookups split keys on `.`, so a segment that is empty or contains a dot
/// has no dotted path that reaches it.
fn unreachable_key_reason(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        Some("is empty")
    } else if segment.contains('.') {
        Some("contains '.'")
    } else {
        None
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number containing `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a key path is declared.
///
/// Each segment is searched after the previous one, and only a quoted
/// match followed by `:` counts, so `nav.home` finds the `"home"` inside
/// `"nav"` rather than a value that happens to read "home". Index segments
/// of arrays have no quoted key and end the search at the array's line.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if after_pattern < remaining.len()
                && remaining[after_pattern..].trim_start().starts_with(':')
            {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

/// Language identifier from a catalog filename.
///
/// - "en.json" -> Some("en")
/// - "/path/to/messages/my.json" -> Some("my")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

pub fn scan_catalog_dir(catalog_dir: impl AsRef<Path>) -> Result<ScanCatalogsResult> {
    let catalog_dir = catalog_dir.as_ref();
    let mut result = ScanCatalogsResult::default();

    if !catalog_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .isimrc.json 'messagesRoot' setting.",
            catalog_dir.display()
        );
    }

    if !catalog_dir.is_dir() {
        bail!("'{}' is not a directory.", catalog_dir.display());
    }

    let mut paths: Vec<_> = fs::read_dir(catalog_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    for path in paths {
        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(language) = extract_language(&path)
        {
            match parse_catalog_file(&path, &language) {
                Ok(parsed) => {
                    result.warnings.extend(parsed.warnings);
                    result.catalogs.insert(parsed.catalog);
                }
                Err(e) => {
                    result.warnings.push(CatalogWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
    }

    Ok(result)
}

/// The site copy shipped with the binary: English and Myanmar.
pub fn builtin_catalogs() -> Result<Catalogs> {
    [("en", BUILTIN_EN), ("my", BUILTIN_MY)]
        .into_iter()
        .map(|(language, content)| {
            let file_path = format!("<builtin>/{}.json", language);
            parse_catalog_str(language, &file_path, content).map(|parsed| parsed.catalog)
        })
        .collect()
}
