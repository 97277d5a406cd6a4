//! Validate command implementation

use anyhow::Result;
use clap::Args;
use conceptrie_core::ConceptTrie;
use std::fmt::Write as _;
use std::path::PathBuf;

use super::init_logging;
use crate::config::CliConfig;
use crate::input::load_dictionary;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dictionary file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        println!("Validating dictionary: {}", self.dictionary.display());

        let concepts = load_dictionary(&self.dictionary, &config.dictionary)?;
        let supplied = concepts.len();
        let trie = ConceptTrie::build(concepts);

        print!("{}", report(&trie, supplied));
        Ok(())
    }
}

/// Human-readable summary of a built dictionary
fn report(trie: &ConceptTrie, supplied: usize) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "✓ Dictionary is valid!");
    let _ = writeln!(out, "  Entries:           {}", supplied);
    let _ = writeln!(out, "  Distinct concepts: {}", trie.len());
    let _ = writeln!(out, "  Duplicates:        {}", supplied - trie.len());
    let _ = writeln!(out, "  Longest concept:   {} tokens", trie.max_depth());
    let _ = writeln!(out, "  Trie nodes:        {}", trie.node_count());

    if trie.is_empty() {
        let _ = writeln!(out, "  ! Dictionary has no concepts; nothing will match");
    }
    if trie.has_empty_concept() {
        let _ = writeln!(
            out,
            "  ! Contains the empty concept; it is never reported as a match"
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn concept(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_report_counts_duplicates() {
        let trie = ConceptTrie::build(vec![concept("a b"), concept("a b"), concept("c")]);
        let text = report(&trie, 3);

        assert!(text.contains("Entries:           3"));
        assert!(text.contains("Distinct concepts: 2"));
        assert!(text.contains("Duplicates:        1"));
        assert!(text.contains("Longest concept:   2 tokens"));
        assert!(text.contains("Trie nodes:        4"));
        assert!(!text.contains("  ! "));
    }

    #[test]
    fn test_report_flags_empty_concept() {
        let trie = ConceptTrie::build(vec![concept("")]);
        let text = report(&trie, 1);

        assert!(text.contains("empty concept"));
    }

    #[test]
    fn test_report_flags_empty_dictionary() {
        let trie: ConceptTrie = ConceptTrie::build(Vec::<Vec<String>>::new());
        assert!(report(&trie, 0).contains("no concepts"));
    }

    #[test]
    fn test_validate_valid_dictionary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terms.json");
        fs::write(&path, r#"[["new", "york"], ["paris"]]"#).unwrap();

        let args = ValidateArgs {
            dictionary: path,
            config: None,
            verbose: 0,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_dictionary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terms.json");
        fs::write(&path, "not json").unwrap();

        let args = ValidateArgs {
            dictionary: path,
            config: None,
            verbose: 0,
        };
        assert!(args.execute().is_err());
    }
}
