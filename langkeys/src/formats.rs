//! Supported translation source formats and source shapes.
//!
//! Every format decodes into a [`serde_json::Value`] first, which is then
//! converted into a [`TranslationTree`].

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::Error, types::TranslationTree};

/// Structured-data formats a translation source can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
}

/// Implements [`std::fmt::Display`] for [`SourceFormat`] as the canonical extension.
///
/// # Example
/// ```rust
/// use langkeys::SourceFormat;
/// assert_eq!(SourceFormat::Json.to_string(), "json");
/// assert_eq!(SourceFormat::Yaml.to_string(), "yaml");
/// ```
impl Display for SourceFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Accepts a file extension, with or without a leading dot, case-insensitively.
///
/// # Example
/// ```rust
/// use langkeys::SourceFormat;
/// use std::str::FromStr;
/// assert_eq!(SourceFormat::from_str("JSON").unwrap(), SourceFormat::Json);
/// assert_eq!(SourceFormat::from_str(".yml").unwrap(), SourceFormat::Yaml);
/// assert!(SourceFormat::from_str("ts").is_err());
/// ```
impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match s.as_str() {
            "json" => Ok(SourceFormat::Json),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            "toml" => Ok(SourceFormat::Toml),
            other => Err(Error::UnsupportedFormat(format!(
                "`{}` (supported: json, yaml, yml, toml)",
                other
            ))),
        }
    }
}

impl SourceFormat {
    /// Returns the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Yaml => "yaml",
            SourceFormat::Toml => "toml",
        }
    }

    /// Decodes a document of this format.
    pub fn parse(&self, content: &str) -> Result<Value, Error> {
        match self {
            SourceFormat::Json => Ok(serde_json::from_str(content)?),
            SourceFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            SourceFormat::Toml => Ok(toml_to_json(toml::from_str(content)?)),
        }
    }
}

/// Converts a TOML document into JSON. Datetimes become their RFC 3339 text
/// instead of serde's private datetime wrapper table.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// How a decoded document maps onto a translation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceShape {
    /// The document is the tree.
    #[default]
    Plain,
    /// The document is a data module whose tree may sit under a `default` export.
    Module,
}

impl FromStr for SourceShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(SourceShape::Plain),
            "module" => Ok(SourceShape::Module),
            other => Err(Error::invalid_config(format!(
                "unknown source shape `{}` (expected plain or module)",
                other
            ))),
        }
    }
}

impl Display for SourceShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceShape::Plain => write!(f, "plain"),
            SourceShape::Module => write!(f, "module"),
        }
    }
}

impl SourceShape {
    /// Turns a decoded document into the tree it exports.
    ///
    /// For [`SourceShape::Module`], a non-blank top-level `default` entry replaces
    /// the whole document; otherwise the document is used as is.
    pub fn into_tree(self, document: Value) -> TranslationTree {
        let tree = TranslationTree::from(document);
        match self {
            SourceShape::Plain => tree,
            SourceShape::Module => match tree.get("default") {
                Some(export) if !export.is_blank() => export.clone(),
                _ => tree,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use serde_json::json;

    #[test]
    fn test_parse_json() {
        let value = SourceFormat::Json.parse(r#"{"a": {"b": "c"}}"#).unwrap();
        assert_eq!(value, json!({ "a": { "b": "c" } }));
    }

    #[test]
    fn test_parse_yaml_keeps_order() {
        let content = indoc! {"
            zeta: Z
            alpha:
              inner: I
        "};
        let value = SourceFormat::Yaml.parse(content).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_toml_tables() {
        let content = indoc! {r#"
            title = "Home"

            [menu]
            open = "Open"
        "#};
        let value = SourceFormat::Toml.parse(content).unwrap();
        assert_eq!(value, json!({ "title": "Home", "menu": { "open": "Open" } }));
    }

    #[test]
    fn test_parse_toml_datetimes_as_text() {
        let content = indoc! {r#"
            released = 1979-05-27
            updated = 1979-05-27T07:32:00Z
            title = "T"
        "#};
        let value = SourceFormat::Toml.parse(content).unwrap();
        assert_eq!(
            value,
            json!({
                "released": "1979-05-27",
                "updated": "1979-05-27T07:32:00Z",
                "title": "T"
            })
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            SourceFormat::Json.parse("{ nope"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            SourceFormat::Toml.parse("= broken"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_shape_from_str() {
        assert_eq!(SourceShape::from_str("Module").unwrap(), SourceShape::Module);
        assert_eq!(SourceShape::from_str(" plain ").unwrap(), SourceShape::Plain);
        assert!(SourceShape::from_str("esm").is_err());
    }

    #[test]
    fn test_module_shape_unwraps_default_export() {
        let document = json!({ "default": { "hello": "Hello" }, "__esModule": true });
        let tree = SourceShape::Module.into_tree(document);
        assert_eq!(tree, TranslationTree::from(json!({ "hello": "Hello" })));
    }

    #[test]
    fn test_module_shape_without_default_export() {
        let document = json!({ "hello": "Hello" });
        let tree = SourceShape::Module.into_tree(document.clone());
        assert_eq!(tree, TranslationTree::from(document));
    }

    #[test]
    fn test_module_shape_ignores_blank_default() {
        let document = json!({ "default": "", "hello": "Hello" });
        let tree = SourceShape::Module.into_tree(document.clone());
        assert_eq!(tree, TranslationTree::from(document));
    }

    #[test]
    fn test_plain_shape_keeps_default_key() {
        let document = json!({ "default": { "hello": "Hello" } });
        let tree = SourceShape::Plain.into_tree(document.clone());
        assert_eq!(tree, TranslationTree::from(document));
    }
}
