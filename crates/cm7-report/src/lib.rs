//! # cm7-report
//!
//! Renderers for CM-7 operation logs.
//!
//! Every renderer is a pure function of the log: it reads records in order,
//! never reorders or recomputes them, and returns the report as a `String`.
//! Where the report ends up (a file, a terminal, a webview) is the caller's
//! business.

pub mod html;
pub mod text;

use std::fmt;

use tracing::debug;

use cm7_contracts::{Cm7Error, Cm7Result, OperationLog};

pub use html::render_html;
pub use text::render_text;

/// Output formats a log can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `log` in the requested format.
///
/// Only JSON rendering can fail, and only if serialization itself fails.
pub fn render(log: &OperationLog, format: ReportFormat) -> Cm7Result<String> {
    debug!(format = %format, record_count = log.len(), "rendering report");
    match format {
        ReportFormat::Text => Ok(render_text(log)),
        ReportFormat::Html => Ok(render_html(log)),
        ReportFormat::Json => render_json(log),
    }
}

/// Pretty-printed JSON of the whole log.
pub fn render_json(log: &OperationLog) -> Cm7Result<String> {
    serde_json::to_string_pretty(log).map_err(|e| Cm7Error::RenderError {
        reason: format!("failed to serialize operation log: {}", e),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
