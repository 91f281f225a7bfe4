use langkeys::SourceFormat;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validation context for the check command
#[derive(Debug, Default)]
pub struct ValidationContext {
    pub config_file: Option<String>,
    pub output_file: Option<String>,
    pub file_extension: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_file(mut self, file: String) -> Self {
        self.config_file = Some(file);
        self
    }

    pub fn with_output_file(mut self, file: String) -> Self {
        self.output_file = Some(file);
        self
    }

    pub fn with_file_extension(mut self, extension: String) -> Self {
        self.file_extension = Some(extension);
        self
    }
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if let Some(parent) = path_obj.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create output directory: {}", e))?;
    }

    Ok(())
}

/// Validate that translation sources with this extension can be parsed
pub fn validate_file_extension(extension: &str) -> Result<(), String> {
    if extension.trim().is_empty() {
        return Err("File extension cannot be empty".to_string());
    }

    extension
        .parse::<SourceFormat>()
        .map(|_| ())
        .map_err(|e| format!("Unsupported file extension: {}", e))
}

/// Validate locale code format using unic-langid.
///
/// Locales are opaque to the checker, so callers treat a failure as a warning.
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    match lang.parse::<LanguageIdentifier>() {
        Ok(lang_id) => {
            let lang_str = lang_id.to_string();
            if lang_str.starts_with('-') || lang_str.ends_with('-') {
                return Err(format!(
                    "Invalid language code format: {}. Expected valid BCP 47 language identifier",
                    lang
                ));
            }
            Ok(())
        }
        Err(_) => Err(format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )),
    }
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if let Some(ref config) = context.config_file {
        validate_file_path(config).map_err(|e| format!("Config file validation failed: {}", e))?;
    }

    if let Some(ref output) = context.output_file {
        validate_output_path(output).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    if let Some(ref extension) = context.file_extension {
        validate_file_extension(extension)
            .map_err(|e| format!("Source format validation failed: {}", e))?;
    }

    Ok(())
}
