//! Core, format-agnostic types for langkeys.
//! Every source format decodes into these; the flattener and reconciler only see these.

use std::{collections::BTreeMap, fmt::Display};

use serde::Serialize;
use serde_json::Value;

/// Mapping from locale identifier to that locale's translation tree.
pub type Translations = BTreeMap<String, TranslationTree>;

/// A nested key-value translation structure.
///
/// Mapping keys keep the order in which they appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationTree {
    /// A terminal value: a message, or anything that is never descended into.
    Leaf(Terminal),

    /// A mapping from key to subtree.
    Node(Vec<(String, TranslationTree)>),
}

/// Terminal values of a translation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Terminal {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
    /// Sequences are terminal even when they hold mappings.
    Sequence(Vec<Value>),
}

impl TranslationTree {
    /// An empty mapping, the tree used for locales whose source failed to load.
    pub fn empty() -> Self {
        TranslationTree::Node(Vec::new())
    }

    /// A text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        TranslationTree::Leaf(Terminal::Text(value.into()))
    }

    /// A mapping built from `(key, subtree)` pairs, in order.
    pub fn node<K: Into<String>>(children: impl IntoIterator<Item = (K, TranslationTree)>) -> Self {
        TranslationTree::Node(
            children
                .into_iter()
                .map(|(key, child)| (key.into(), child))
                .collect(),
        )
    }

    pub fn is_node(&self) -> bool {
        matches!(self, TranslationTree::Node(_))
    }

    /// Direct child of a mapping. Leaves have no children.
    pub fn get(&self, key: &str) -> Option<&TranslationTree> {
        match self {
            TranslationTree::Node(children) => children
                .iter()
                .find(|(child_key, _)| child_key == key)
                .map(|(_, child)| child),
            TranslationTree::Leaf(_) => None,
        }
    }

    /// Whether this value counts as "no translation" when used as reference text.
    ///
    /// Mappings are never blank, not even empty ones.
    pub fn is_blank(&self) -> bool {
        match self {
            TranslationTree::Leaf(terminal) => terminal.is_blank(),
            TranslationTree::Node(_) => false,
        }
    }

    /// Resolves a dotted key path by descending one segment at a time.
    ///
    /// Returns `None` when a segment is absent, when descent hits a leaf, or when
    /// any node along the path (including the final one) is blank.
    ///
    /// ```
    /// use langkeys::TranslationTree;
    ///
    /// let tree = TranslationTree::from(serde_json::json!({
    ///     "menu": { "open": "Open", "close": "" }
    /// }));
    /// assert_eq!(tree.lookup("menu.open"), Some(&TranslationTree::text("Open")));
    /// assert_eq!(tree.lookup("menu.close"), None);
    /// assert_eq!(tree.lookup("menu.open.extra"), None);
    /// ```
    pub fn lookup(&self, path: &str) -> Option<&TranslationTree> {
        path.split('.').try_fold(self, |node, segment| {
            node.get(segment).filter(|child| !child.is_blank())
        })
    }
}

impl Terminal {
    pub fn is_blank(&self) -> bool {
        match self {
            Terminal::Text(text) => text.is_empty(),
            Terminal::Number(number) => number.as_f64() == Some(0.0),
            Terminal::Bool(value) => !value,
            Terminal::Null => true,
            Terminal::Sequence(_) => false,
        }
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terminal::Text(text) => write!(f, "{}", text),
            Terminal::Number(number) => write!(f, "{}", number),
            Terminal::Bool(value) => write!(f, "{}", value),
            Terminal::Null => write!(f, "null"),
            Terminal::Sequence(items) => {
                let rendered: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        Value::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{}", rendered.join(","))
            }
        }
    }
}

impl Display for TranslationTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationTree::Leaf(terminal) => write!(f, "{}", terminal),
            TranslationTree::Node(_) => write!(f, "{}", Value::from(self)),
        }
    }
}

impl From<Value> for TranslationTree {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => TranslationTree::Node(
                map.into_iter()
                    .map(|(key, child)| (key, TranslationTree::from(child)))
                    .collect(),
            ),
            Value::String(text) => TranslationTree::Leaf(Terminal::Text(text)),
            Value::Number(number) => TranslationTree::Leaf(Terminal::Number(number)),
            Value::Bool(flag) => TranslationTree::Leaf(Terminal::Bool(flag)),
            Value::Null => TranslationTree::Leaf(Terminal::Null),
            Value::Array(items) => TranslationTree::Leaf(Terminal::Sequence(items)),
        }
    }
}

impl From<&TranslationTree> for Value {
    fn from(tree: &TranslationTree) -> Self {
        match tree {
            TranslationTree::Node(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), Value::from(child)))
                    .collect(),
            ),
            TranslationTree::Leaf(Terminal::Text(text)) => Value::String(text.clone()),
            TranslationTree::Leaf(Terminal::Number(number)) => Value::Number(number.clone()),
            TranslationTree::Leaf(Terminal::Bool(flag)) => Value::Bool(*flag),
            TranslationTree::Leaf(Terminal::Null) => Value::Null,
            TranslationTree::Leaf(Terminal::Sequence(items)) => Value::Array(items.clone()),
        }
    }
}

/// The missing keys of one locale, in the locale order given to the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleGaps<T> {
    pub locale: String,
    pub missing: Vec<T>,
}

impl<T> LocaleGaps<T> {
    /// True when the locale has every key of the union.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A key absent from one locale, with the text other locales have for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    pub key: String,
    /// Only locales where the key resolves to a non-blank value appear here.
    pub translations: Vec<Reference>,
}

impl MissingKey {
    pub fn translation(&self, locale: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|reference| reference.locale == locale)
            .map(|reference| reference.text.as_str())
    }
}

/// Reference text for a missing key, taken from another locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub locale: String,
    pub text: String,
}
