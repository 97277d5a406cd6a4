//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use conceptrie_core::ConceptMatch;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - streams matches as the elements of one JSON array
///
/// Each record is written as soon as it arrives; `finish` closes the array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    written: usize,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Input the match was found in
    pub source: String,
    /// Start index and matched tokens
    #[serde(flatten)]
    pub found: ConceptMatch,
    /// Exclusive end index
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn separator(&self) -> &'static [u8] {
        match (self.written, self.pretty) {
            (0, true) => b"[\n",
            (0, false) => b"[",
            (_, true) => b",\n",
            (_, false) => b",",
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_match(&mut self, source: &str, found: &ConceptMatch) -> Result<()> {
        let record = MatchRecord {
            source: source.to_string(),
            end: found.end(),
            found: found.clone(),
        };

        let separator = self.separator();
        self.writer.write_all(separator)?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &record)?;
        } else {
            serde_json::to_writer(&mut self.writer, &record)?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match (self.written, self.pretty) {
            (0, _) => self.writer.write_all(b"[]\n")?,
            (_, true) => self.writer.write_all(b"\n]\n")?,
            (_, false) => self.writer.write_all(b"]\n")?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(start: usize, tokens: &[&str]) -> ConceptMatch {
        ConceptMatch::new(start, tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_records_round_trip() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.format_match("doc", &found(1, &["b", "c"])).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        let records: Vec<MatchRecord> = serde_json::from_str(&out).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "doc");
        assert_eq!(records[0].found.start, 1);
        assert_eq!(records[0].end, 3);
    }

    #[test]
    fn test_compact_record_layout() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.format_match("doc", &found(1, &["b", "c"])).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(formatter.writer).unwrap(),
            "[{\"source\":\"doc\",\"start\":1,\"tokens\":[\"b\",\"c\"],\"end\":3}]\n"
        );
    }

    #[test]
    fn test_records_written_before_finish() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.format_match("doc", &found(0, &["a"])).unwrap();
        let after_first = formatter.writer.len();
        assert!(after_first > 0);

        formatter.format_match("doc", &found(1, &["b"])).unwrap();
        assert!(formatter.writer.len() > after_first);
    }

    #[test]
    fn test_pretty_output_is_valid_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_match("a.txt", &found(0, &["x"])).unwrap();
        formatter.format_match("b.txt", &found(2, &["y", "z"])).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert!(out.starts_with("[\n"));
        assert!(out.ends_with("\n]\n"));

        let records: Vec<MatchRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source, "b.txt");
        assert_eq!(records[1].end, 4);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
