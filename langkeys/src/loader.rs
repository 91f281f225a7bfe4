//! Loading translation trees for a set of locales.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    formats::{SourceFormat, SourceShape},
    types::{TranslationTree, Translations},
};

/// Produces the translation tree of one locale.
pub trait Loader {
    fn load(&self, locale: &str) -> Result<TranslationTree, Error>;
}

impl<F> Loader for F
where
    F: Fn(&str) -> Result<TranslationTree, Error>,
{
    fn load(&self, locale: &str) -> Result<TranslationTree, Error> {
        self(locale)
    }
}

/// Loads `<source_dir>/<locale>.<extension>` files.
#[derive(Debug, Clone)]
pub struct FileLoader {
    source_dir: PathBuf,
    extension: String,
    format: SourceFormat,
    shape: SourceShape,
}

impl FileLoader {
    /// Creates a loader; fails when `extension` is not a supported format.
    pub fn new(source_dir: impl Into<PathBuf>, extension: &str) -> Result<Self, Error> {
        let format: SourceFormat = extension.parse()?;
        Ok(Self {
            source_dir: source_dir.into(),
            extension: extension.trim().trim_start_matches('.').to_string(),
            format,
            shape: SourceShape::default(),
        })
    }

    pub fn with_shape(mut self, shape: SourceShape) -> Self {
        self.shape = shape;
        self
    }

    /// Path of the source file for `locale`.
    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.source_dir
            .join(format!("{}.{}", locale, self.extension))
    }

    /// Lists locales from the file stems of `<source_dir>/*.<extension>`, sorted.
    /// Dotfiles are skipped.
    pub fn discover_locales(&self) -> Result<Vec<String>, Error> {
        let dir = self.source_dir.to_string_lossy();
        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(&dir),
            glob::Pattern::escape(&self.extension)
        );
        tracing::debug!(pattern = %pattern, "discovering locales");

        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..Default::default()
        };
        let paths = glob::glob_with(&pattern, options)
            .map_err(|e| Error::invalid_config(format!("invalid source pattern: {}", e)))?;

        let mut locales = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| Error::Io(e.into()))?;
            if !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                locales.push(stem.to_string());
            }
        }
        locales.sort();
        locales.dedup();
        Ok(locales)
    }
}

impl Loader for FileLoader {
    fn load(&self, locale: &str) -> Result<TranslationTree, Error> {
        let path = self.path_for(locale);
        if !path.exists() {
            return Err(Error::SourceNotFound(path));
        }

        let content = read_decoded(&path).map_err(|e| Error::malformed(&path, e))?;
        let document = self
            .format
            .parse(&content)
            .map_err(|e| Error::malformed(&path, e))?;

        Ok(self.shape.into_tree(document))
    }
}

/// Reads a file as text, decoding UTF-16 when a BOM says so and dropping a UTF-8 BOM.
fn read_decoded(path: &Path) -> Result<String, Error> {
    let file = File::open(path)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .strip_bom(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded)?;
    Ok(decoded)
}

/// Loads every locale in order. A failed load never aborts the run: the
/// locale gets an empty tree and the failure is logged.
pub fn load_all<L: Loader + ?Sized>(loader: &L, locales: &[String]) -> Translations {
    let mut trees = Translations::new();
    for locale in locales {
        let tree = match loader.load(locale) {
            Ok(tree) => tree,
            Err(Error::SourceNotFound(path)) => {
                tracing::warn!(
                    locale = %locale,
                    path = %path.display(),
                    "translation source not found, treating as empty"
                );
                TranslationTree::empty()
            }
            Err(e) => {
                tracing::error!(
                    locale = %locale,
                    error = %e,
                    "failed to load translation source, treating as empty"
                );
                TranslationTree::empty()
            }
        };
        trees.insert(locale.clone(), tree);
    }
    trees
}
