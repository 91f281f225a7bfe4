//! Configuration of a check run: which locales, where their sources live, and how to read them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    formats::{SourceFormat, SourceShape},
    loader::FileLoader,
};

/// File name looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "langkeys.toml";

/// Settings for one check run.
///
/// Both `camelCase` and `snake_case` field names are accepted in config files:
///
/// ```toml
/// locales = ["en", "es"]
/// sourceDir = "src/assets/i18n"
/// fileExtension = "json"
/// shape = "module"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Locales to report on, in report order. Empty means "discover from `source_dir`".
    pub locales: Vec<String>,

    #[serde(alias = "source_dir")]
    pub source_dir: PathBuf,

    #[serde(alias = "file_extension")]
    pub file_extension: String,

    pub shape: SourceShape,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            source_dir: PathBuf::from("."),
            file_extension: SourceFormat::Json.extension().to_string(),
            shape: SourceShape::Plain,
        }
    }
}

impl CheckConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locales(mut self, locales: Vec<String>) -> Self {
        self.locales = locales;
        self
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_file_extension(mut self, file_extension: impl Into<String>) -> Self {
        self.file_extension = file_extension.into();
        self
    }

    pub fn with_shape(mut self, shape: SourceShape) -> Self {
        self.shape = shape;
        self
    }

    /// Reads a config file; its extension selects TOML, JSON, or YAML.
    ///
    /// A relative `source_dir` is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .parse::<SourceFormat>()?;

        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        let mut config: CheckConfig = match format {
            SourceFormat::Toml => toml::from_str(&content)?,
            SourceFormat::Json => serde_json::from_str(&content)?,
            SourceFormat::Yaml => serde_yaml::from_str(&content)?,
        };

        if config.source_dir.is_relative()
            && let Some(base) = path.parent()
        {
            config.source_dir = base.join(&config.source_dir);
        }
        Ok(config)
    }

    /// Builds the file loader these settings describe.
    pub fn loader(&self) -> Result<FileLoader, Error> {
        Ok(FileLoader::new(&self.source_dir, &self.file_extension)?.with_shape(self.shape))
    }

    /// The configured locales, or the ones found in `source_dir` when none are configured.
    pub fn resolve_locales(&self) -> Result<Vec<String>, Error> {
        if !self.locales.is_empty() {
            return Ok(self.locales.clone());
        }

        let discovered = self.loader()?.discover_locales()?;
        if discovered.is_empty() {
            return Err(Error::invalid_config(format!(
                "no locales configured and no *.{} files found in {}",
                self.file_extension,
                self.source_dir.display()
            )));
        }
        tracing::info!(locales = ?discovered, "discovered locales");
        Ok(discovered)
    }
}
