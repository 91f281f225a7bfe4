use langkeys::{LocaleGaps, MissingKey, Reference};
use serde_json::{Map, Value, json};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Reference text is cut to this many terminal columns unless `--full` is given.
pub const DEFAULT_TRUNCATE_WIDTH: usize = 50;

/// Output formats of the check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,
    /// A single JSON document
    Json,
    /// One CSV row per missing key and reference
    Csv,
}

/// A reported gap: either a bare key path or a key with reference translations.
pub trait ReportItem {
    const HAS_REFERENCES: bool;

    fn key(&self) -> &str;

    fn references(&self) -> &[Reference];
}

impl ReportItem for String {
    const HAS_REFERENCES: bool = false;

    fn key(&self) -> &str {
        self
    }

    fn references(&self) -> &[Reference] {
        &[]
    }
}

impl ReportItem for MissingKey {
    const HAS_REFERENCES: bool = true;

    fn key(&self) -> &str {
        &self.key
    }

    fn references(&self) -> &[Reference] {
        &self.translations
    }
}

#[derive(Debug, Clone)]
pub struct Report<T> {
    pub unique_keys: usize,
    pub locales: Vec<LocaleGaps<T>>,
}

impl<T> Report<T> {
    pub fn new(unique_keys: usize, locales: Vec<LocaleGaps<T>>) -> Self {
        Self {
            unique_keys,
            locales,
        }
    }

    pub fn total_missing(&self) -> usize {
        self.locales.iter().map(|gaps| gaps.missing.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Maximum display width of reference text; `None` prints it in full.
    pub truncate: Option<usize>,
}

pub fn render<T: ReportItem>(
    report: &Report<T>,
    format: ReportFormat,
    options: &RenderOptions,
) -> Result<String, String> {
    match format {
        ReportFormat::Text => Ok(render_human(report, options)),
        ReportFormat::Json => render_json(report),
        ReportFormat::Csv => render_csv(report),
    }
}

pub fn render_human<T: ReportItem>(report: &Report<T>, options: &RenderOptions) -> String {
    let mut lines = Vec::new();
    lines.push("🔍 Missing keys per locale:".to_string());

    for gaps in &report.locales {
        if gaps.is_complete() {
            lines.push(format!("✅ [{}] All keys present", gaps.locale));
            continue;
        }

        lines.push(format!(
            "❌ [{}] Missing {} key(s):\n",
            gaps.locale,
            gaps.missing.len()
        ));
        for item in &gaps.missing {
            lines.push(format!("  - {}", item.key()));
            for reference in item.references() {
                let text = match options.truncate {
                    Some(width) => truncate_display(&reference.text, width),
                    None => reference.text.clone(),
                };
                lines.push(format!("    📌 {}: \"{}\"", reference.locale, text));
            }
            if T::HAS_REFERENCES && item.references().is_empty() {
                lines.push("    ⚠️ Not found in any locale.".to_string());
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "Summary: {} locale(s), {} unique key(s), {} missing",
        report.locales.len(),
        report.unique_keys,
        report.total_missing()
    ));
    lines.join("\n")
}

pub fn render_json<T: ReportItem>(report: &Report<T>) -> Result<String, String> {
    let locales_json: Vec<_> = report
        .locales
        .iter()
        .map(|gaps| {
            let missing: Vec<Value> = gaps
                .missing
                .iter()
                .map(|item| {
                    if T::HAS_REFERENCES {
                        let translations: Map<String, Value> = item
                            .references()
                            .iter()
                            .map(|r| (r.locale.clone(), Value::String(r.text.clone())))
                            .collect();
                        json!({
                            "key": item.key(),
                            "translations": translations,
                        })
                    } else {
                        Value::String(item.key().to_string())
                    }
                })
                .collect();

            json!({
                "locale": gaps.locale,
                "missing_count": gaps.missing.len(),
                "missing": missing,
            })
        })
        .collect();

    let body = json!({
        "summary": {
            "locales": report.locales.len(),
            "unique_keys": report.unique_keys,
            "missing": report.total_missing(),
        },
        "locales": locales_json,
    });

    serde_json::to_string_pretty(&body)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))
}

pub fn render_csv<T: ReportItem>(report: &Report<T>) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let write_error = |e: csv::Error| format!("Failed to write CSV report: {}", e);

    if T::HAS_REFERENCES {
        writer
            .write_record(["locale", "key", "reference_locale", "reference_text"])
            .map_err(write_error)?;
    } else {
        writer.write_record(["locale", "key"]).map_err(write_error)?;
    }

    for gaps in &report.locales {
        for item in &gaps.missing {
            if !T::HAS_REFERENCES {
                writer
                    .write_record([gaps.locale.as_str(), item.key()])
                    .map_err(write_error)?;
            } else if item.references().is_empty() {
                writer
                    .write_record([gaps.locale.as_str(), item.key(), "", ""])
                    .map_err(write_error)?;
            } else {
                for reference in item.references() {
                    writer
                        .write_record([
                            gaps.locale.as_str(),
                            item.key(),
                            reference.locale.as_str(),
                            reference.text.as_str(),
                        ])
                        .map_err(write_error)?;
                }
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to finish CSV report: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV report is not valid UTF-8: {}", e))
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with `...`.
pub fn truncate_display(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

pub fn print_or_write(output: Option<&String>, content: &str) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path, e))?;
        println!("Report written: {}", path);
    } else {
        println!("{}", content);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_display_short_text_untouched() {
        assert_eq!(truncate_display("Hola", 10), "Hola");
    }

    #[test]
    fn test_truncate_display_counts_columns() {
        assert_eq!(truncate_display("abcdefgh", 5), "abcde...");
        // each CJK character is two columns wide
        assert_eq!(truncate_display("日本語のテキスト", 5), "日本...");
    }

    #[test]
    fn test_report_total_missing() {
        let report = Report::new(
            3,
            vec![
                LocaleGaps {
                    locale: "en".to_string(),
                    missing: vec![],
                },
                LocaleGaps {
                    locale: "es".to_string(),
                    missing: vec!["a".to_string(), "b".to_string()],
                },
            ],
        );
        assert_eq!(report.total_missing(), 2);
    }
}
