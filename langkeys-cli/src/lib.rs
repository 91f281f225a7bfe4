//! CLI library for testing purposes

pub mod check;
pub mod report;
pub mod validation;

pub use check::{CheckOptions, CheckSummary, resolve_config, run_check_command};
pub use report::{RenderOptions, Report, ReportFormat, ReportItem};
