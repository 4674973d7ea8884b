use std::collections::{BTreeMap, HashMap};

/// Position information in catalog files (JSON).
///
/// Used for error reporting when a translation value has a problem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A key and its value at a location in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The lookup key (e.g., "nav.home").
    pub key: String,
    /// The translation value.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// One node of a catalog tree.
///
/// Intermediate nodes are groups, leaves are always strings. Lookups walk
/// groups segment by segment and stop at the first leaf or miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    /// A translated string: `"home": "Home"`
    Text(String),
    /// A nested mapping: `"nav": { ... }`
    Group(BTreeMap<String, MessageNode>),
}

impl MessageNode {
    pub fn group() -> Self {
        MessageNode::Group(BTreeMap::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageNode::Text(text) => Some(text),
            MessageNode::Group(_) => None,
        }
    }

    pub fn child(&self, segment: &str) -> Option<&MessageNode> {
        match self {
            MessageNode::Group(children) => children.get(segment),
            MessageNode::Text(_) => None,
        }
    }

    /// Walk a dotted key. Returns `None` as soon as a segment is missing or
    /// the walk hits a leaf with segments left over.
    pub fn get(&self, key: &str) -> Option<&MessageNode> {
        let mut current = self;
        for segment in key.split('.') {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a str)>) {
        match self {
            MessageNode::Text(text) => out.push((prefix.to_string(), text)),
            MessageNode::Group(children) => {
                for (segment, child) in children {
                    let key = if prefix.is_empty() {
                        segment.clone()
                    } else {
                        format!("{}.{}", prefix, segment)
                    };
                    child.collect_leaves(&key, out);
                }
            }
        }
    }
}

/// All translations for a single language.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    /// Language identifier (e.g., "en", "my").
    pub language: String,
    /// Where the catalog was loaded from.
    pub file_path: String,
    root: MessageNode,
    /// 1-based line of each leaf key in `file_path`.
    lines: HashMap<String, usize>,
}

impl LocaleCatalog {
    pub fn new(language: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            file_path: file_path.into(),
            root: MessageNode::group(),
            lines: HashMap::new(),
        }
    }

    pub(crate) fn with_root(mut self, root: MessageNode, lines: HashMap<String, usize>) -> Self {
        self.root = root;
        self.lines = lines;
        self
    }

    pub fn root(&self) -> &MessageNode {
        &self.root
    }

    /// Walk `key` from the root.
    pub fn get(&self, key: &str) -> Option<&MessageNode> {
        self.root.get(key)
    }

    /// Leaf text for `key`, if the key names a leaf.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MessageNode::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.text(key).is_some()
    }

    /// All leaves as `(key, text)`, sorted by key.
    pub fn leaf_entries(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        self.root.collect_leaves("", &mut out);
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// All leaf keys, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        self.leaf_entries().into_iter().map(|(key, _)| key).collect()
    }

    pub fn line_of(&self, key: &str) -> usize {
        self.lines.get(key).copied().unwrap_or(1)
    }

    /// Location and value of a leaf, for reporting.
    pub fn context(&self, key: &str) -> Option<MessageContext> {
        self.text(key).map(|value| {
            MessageContext::new(
                MessageLocation::new(&self.file_path, self.line_of(key)),
                key,
                value,
            )
        })
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaf_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        match &self.root {
            MessageNode::Group(children) => children.is_empty(),
            MessageNode::Text(_) => false,
        }
    }
}

/// Catalogs for every loaded language, keyed by language identifier.
///
/// Built once when a session starts and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    by_language: BTreeMap<String, LocaleCatalog>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, catalog: LocaleCatalog) {
        self.by_language.insert(catalog.language.clone(), catalog);
    }

    pub fn get(&self, language: &str) -> Option<&LocaleCatalog> {
        self.by_language.get(language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.by_language.contains_key(language)
    }

    /// Loaded language identifiers, sorted.
    pub fn languages(&self) -> Vec<&str> {
        self.by_language.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.by_language.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }
}

impl FromIterator<LocaleCatalog> for Catalogs {
    fn from_iter<I: IntoIterator<Item = LocaleCatalog>>(iter: I) -> Self {
        let mut catalogs = Catalogs::new();
        for catalog in iter {
            catalogs.insert(catalog);
        }
        catalogs
    }
}
