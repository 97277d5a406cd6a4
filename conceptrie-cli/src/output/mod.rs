//! Output formatting module

use anyhow::Result;
use conceptrie_core::ConceptMatch;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single match found in `source`
    fn format_match(&mut self, source: &str, found: &ConceptMatch) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated source, start, end and phrase
    Text,
    /// JSON array of match records
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Short description used by `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one match per line: source, start, end, phrase (tab-separated)",
            OutputFormat::Json => "JSON array of {source, start, tokens, end} records",
            OutputFormat::Markdown => "numbered Markdown list with a total footer",
        }
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Tokens joined with single spaces
pub(crate) fn phrase(found: &ConceptMatch) -> String {
    found.tokens.join(" ")
}
