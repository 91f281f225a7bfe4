//! Reconciliation of key sets across locales.
//!
//! The union of every locale's flattened keys is compared against each
//! requested locale. [`reconcile`] attaches reference text from the other
//! locales to every gap; [`missing_keys`] reports the bare key paths.

use std::collections::{BTreeSet, HashSet};

use crate::{
    flatten::flatten,
    types::{LocaleGaps, MissingKey, Reference, Translations},
};

/// All dotted key paths present in at least one tree of `trees`.
///
/// Every entry of `trees` contributes, including locales that are not reported on.
pub fn key_union(trees: &Translations) -> BTreeSet<String> {
    trees.values().flat_map(flatten).collect()
}

/// Finds, for each locale in `locales`, the keys of the union it lacks, and
/// the text the other locales in `locales` hold for each of them.
///
/// ```
/// use langkeys::{Translations, TranslationTree, reconcile};
/// use serde_json::json;
///
/// let mut trees = Translations::new();
/// trees.insert("en".into(), TranslationTree::from(json!({ "greeting": "Hello", "farewell": "Bye" })));
/// trees.insert("es".into(), TranslationTree::from(json!({ "greeting": "Hola" })));
///
/// let locales = vec!["en".to_string(), "es".to_string()];
/// let gaps = reconcile(&locales, &trees);
/// assert!(gaps[0].is_complete());
/// assert_eq!(gaps[1].missing[0].key, "farewell");
/// assert_eq!(gaps[1].missing[0].translation("en"), Some("Bye"));
/// ```
pub fn reconcile(locales: &[String], trees: &Translations) -> Vec<LocaleGaps<MissingKey>> {
    gaps(locales, trees, |locale, key| MissingKey {
        translations: references(locales, trees, locale, &key),
        key,
    })
}

/// Same gaps as [`reconcile`], without reference lookups.
pub fn missing_keys(locales: &[String], trees: &Translations) -> Vec<LocaleGaps<String>> {
    gaps(locales, trees, |_, key| key)
}

fn gaps<T>(
    locales: &[String],
    trees: &Translations,
    mut record: impl FnMut(&str, String) -> T,
) -> Vec<LocaleGaps<T>> {
    let all_keys = key_union(trees);
    tracing::debug!(
        locales = locales.len(),
        unique_keys = all_keys.len(),
        "reconciling key sets"
    );

    locales
        .iter()
        .map(|locale| {
            let locale_keys: HashSet<String> = trees
                .get(locale)
                .map(|tree| flatten(tree).into_iter().collect())
                .unwrap_or_default();

            let missing: Vec<T> = all_keys
                .iter()
                .filter(|key| !locale_keys.contains(*key))
                .map(|key| record(locale.as_str(), key.clone()))
                .collect();

            tracing::debug!(locale = %locale, missing = missing.len(), "locale checked");
            LocaleGaps {
                locale: locale.clone(),
                missing,
            }
        })
        .collect()
}

fn references(locales: &[String], trees: &Translations, locale: &str, key: &str) -> Vec<Reference> {
    locales
        .iter()
        .filter(|other| other.as_str() != locale)
        .filter_map(|other| {
            let text = trees.get(other)?.lookup(key)?;
            Some(Reference {
                locale: other.clone(),
                text: text.to_string(),
            })
        })
        .collect()
}
