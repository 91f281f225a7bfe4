use crate::report::{
    DEFAULT_TRUNCATE_WIDTH, RenderOptions, Report, ReportFormat, ReportItem, print_or_write,
    render,
};
use crate::validation::{ValidationContext, validate_context, validate_language_code};
use langkeys::{
    CheckConfig, DEFAULT_CONFIG_FILE, LocaleGaps, SourceShape, key_union, load_all, missing_keys,
    reconcile,
};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub config: Option<String>,
    pub source_dir: Option<String>,
    pub locales: Vec<String>,
    pub extension: Option<String>,
    pub shape: Option<String>,
    pub format: ReportFormat,
    pub keys_only: bool,
    pub full: bool,
    pub output: Option<String>,
}

/// Totals of a finished check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub locales: usize,
    pub unique_keys: usize,
    pub missing: usize,
}

/// Builds the run configuration: config file first, command-line flags on top.
pub fn resolve_config(opts: &CheckOptions) -> Result<CheckConfig, String> {
    let mut config = match &opts.config {
        Some(path) => CheckConfig::from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path, e))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            CheckConfig::from_file(DEFAULT_CONFIG_FILE)
                .map_err(|e| format!("Failed to load config {}: {}", DEFAULT_CONFIG_FILE, e))?
        }
        None => CheckConfig::new(),
    };

    if let Some(dir) = &opts.source_dir {
        config = config.with_source_dir(dir);
    }
    if !opts.locales.is_empty() {
        config = config.with_locales(opts.locales.clone());
    }
    if let Some(extension) = &opts.extension {
        config = config.with_file_extension(extension.trim().trim_start_matches('.'));
    }
    if let Some(shape) = &opts.shape {
        let shape: SourceShape = shape.parse().map_err(|e: langkeys::Error| e.to_string())?;
        config = config.with_shape(shape);
    }

    Ok(config)
}

pub fn run_check_command(opts: CheckOptions) -> Result<CheckSummary, String> {
    let mut context = ValidationContext::new();
    if let Some(config) = &opts.config {
        context = context.with_config_file(config.clone());
    }
    if let Some(output) = &opts.output {
        context = context.with_output_file(output.clone());
    }
    if let Some(extension) = &opts.extension {
        context = context.with_file_extension(extension.clone());
    }
    validate_context(&context)?;

    let config = resolve_config(&opts)?;
    if !config.source_dir.is_dir() {
        tracing::warn!(
            dir = %config.source_dir.display(),
            "source directory does not exist"
        );
    }

    let locales = config.resolve_locales().map_err(|e| e.to_string())?;
    for locale in &locales {
        if let Err(e) = validate_language_code(locale) {
            tracing::warn!(locale = %locale, "{}", e);
        }
    }

    let loader = config.loader().map_err(|e| e.to_string())?;
    let trees = load_all(&loader, &locales);
    let unique_keys = key_union(&trees).len();

    let options = RenderOptions {
        truncate: if opts.full || opts.output.is_some() || !atty::is(atty::Stream::Stdout) {
            None
        } else {
            Some(DEFAULT_TRUNCATE_WIDTH)
        },
    };

    let missing = if opts.keys_only {
        emit(unique_keys, missing_keys(&locales, &trees), &opts, &options)?
    } else {
        emit(unique_keys, reconcile(&locales, &trees), &opts, &options)?
    };

    Ok(CheckSummary {
        locales: locales.len(),
        unique_keys,
        missing,
    })
}

fn emit<T: ReportItem>(
    unique_keys: usize,
    gaps: Vec<LocaleGaps<T>>,
    opts: &CheckOptions,
    options: &RenderOptions,
) -> Result<usize, String> {
    let report = Report::new(unique_keys, gaps);
    let rendered = render(&report, opts.format, options)?;
    print_or_write(opts.output.as_ref(), &rendered)?;
    Ok(report.total_missing())
}
