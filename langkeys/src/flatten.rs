//! Flattening of nested translation trees into dotted key paths.

use crate::types::TranslationTree;

/// Leading segment left behind by sources that wrap their tree in a `default` export.
const DEFAULT_PREFIX: &str = "default.";

/// Flattens a translation tree into dotted key paths, depth-first.
///
/// Every mapping key is emitted, parents immediately before their first
/// descendant. Sequences are terminal. A leading `default.` is removed from
/// each path once; the bare key `default` is kept.
///
/// ```
/// use langkeys::{TranslationTree, flatten};
///
/// let tree = TranslationTree::from(serde_json::json!({
///     "default": { "home": { "title": "Home" } }
/// }));
/// assert_eq!(flatten(&tree), vec!["default", "home", "home.title"]);
/// ```
pub fn flatten(tree: &TranslationTree) -> Vec<String> {
    let mut keys = Vec::new();
    flatten_into(tree, "", &mut keys);
    keys
}

fn flatten_into(tree: &TranslationTree, prefix: &str, keys: &mut Vec<String>) {
    let TranslationTree::Node(children) = tree else {
        return;
    };

    for (key, child) in children {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        let clean_key = strip_default_prefix(full_key);

        if child.is_node() {
            keys.push(clean_key.clone());
            flatten_into(child, &clean_key, keys);
        } else {
            keys.push(clean_key);
        }
    }
}

fn strip_default_prefix(key: String) -> String {
    match key.strip_prefix(DEFAULT_PREFIX) {
        Some(rest) => rest.to_string(),
        None => key,
    }
}
