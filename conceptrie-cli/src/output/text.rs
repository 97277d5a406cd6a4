//! Plain text output formatter

use super::{phrase, OutputFormatter};
use anyhow::Result;
use conceptrie_core::ConceptMatch;
use std::io::Write;

/// Plain text formatter - outputs one match per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_match(&mut self, source: &str, found: &ConceptMatch) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            source,
            found.start,
            found.end(),
            phrase(found)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
