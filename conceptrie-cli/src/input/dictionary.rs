//! Concept dictionary loading

use crate::config::DictionaryConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// On-disk dictionary layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    /// One concept per line, tokens separated by whitespace
    Text,
    /// JSON array of token arrays
    Json,
}

impl DictionaryFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DictionaryFormat::Json,
            _ => DictionaryFormat::Text,
        }
    }
}

/// Load every concept listed in a dictionary file
///
/// Entries are returned as written, duplicates included; the trie collapses
/// them.
pub fn load_dictionary(path: &Path, config: &DictionaryConfig) -> Result<Vec<Vec<String>>> {
    if !path.is_file() {
        return Err(CliError::DictionaryNotFound(path.to_path_buf()).into());
    }

    let format = DictionaryFormat::from_path(path);
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
    log::debug!(
        "read {:?} dictionary from {} ({} bytes)",
        format,
        path.display(),
        content.len()
    );

    let concepts = match format {
        DictionaryFormat::Text => parse_text(&content, &config.comment_prefix),
        DictionaryFormat::Json => {
            parse_json(&content).map_err(|reason| CliError::InvalidDictionary {
                path: path.to_path_buf(),
                reason,
            })?
        }
    };

    log::info!(
        "loaded {} dictionary entries from {}",
        concepts.len(),
        path.display()
    );
    Ok(concepts)
}

/// Parse a line-oriented dictionary
pub fn parse_text(content: &str, comment_prefix: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_prefix.is_empty() || !line.starts_with(comment_prefix))
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Parse a JSON dictionary
pub fn parse_json(content: &str) -> Result<Vec<Vec<String>>, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}
