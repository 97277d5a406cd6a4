//! Markdown output formatter

use super::{phrase, OutputFormatter};
use anyhow::Result;
use conceptrie_core::ConceptMatch;
use std::io::Write;

/// Markdown formatter - outputs matches as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            match_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_match(&mut self, source: &str, found: &ConceptMatch) -> Result<()> {
        self.match_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` ({}, tokens {}..{})",
            self.match_count,
            phrase(found),
            source,
            found.start,
            found.end()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
