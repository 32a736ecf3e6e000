//! Report rendering.
//!
//! Both renderers write the full report for a run to any `io::Write`.

mod json;
mod text;

use std::fmt;
use std::io::Write;

use crate::domain::SocketRecord;
use crate::error::Result;

pub use json::render_json;
pub use text::render_text;

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned table.
    #[default]
    Text,
    /// Single-line JSON document.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Render `records` in this format.
    pub fn render<W: Write>(&self, records: &[SocketRecord], out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Text => render_text(records, out),
            OutputFormat::Json => render_json(records, out),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
