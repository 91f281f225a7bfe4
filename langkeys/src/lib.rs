#![forbid(unsafe_code)]
//! Find translation keys that are present in some locales but missing in others.
//!
//! Each locale's nested translation tree is flattened into dotted key paths;
//! the union of all paths is compared against every locale, and each gap is
//! annotated with the text the other locales hold for that key.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langkeys::{CheckConfig, load_all, reconcile};
//!
//! let config = CheckConfig::new()
//!     .with_source_dir("src/assets/i18n")
//!     .with_locales(vec!["en".into(), "es".into()]);
//!
//! let locales = config.resolve_locales()?;
//! let trees = load_all(&config.loader()?, &locales);
//! for gaps in reconcile(&locales, &trees) {
//!     for missing in &gaps.missing {
//!         println!("[{}] {}", gaps.locale, missing.key);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported Sources
//!
//! - **JSON**, **YAML**, and **TOML** documents, one file per locale
//! - Plain documents, or data modules exporting their tree under `default`

pub mod config;
pub mod error;
pub mod flatten;
pub mod formats;
pub mod loader;
pub mod reconcile;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::{CheckConfig, DEFAULT_CONFIG_FILE},
    error::Error,
    flatten::flatten,
    formats::{SourceFormat, SourceShape},
    loader::{FileLoader, Loader, load_all},
    reconcile::{key_union, missing_keys, reconcile},
    types::{LocaleGaps, MissingKey, Reference, Terminal, TranslationTree, Translations},
};
