//! Overlapping multi-token concept extraction
//!
//! A dictionary of concepts (phrases given as token sequences) is compiled
//! once into an immutable prefix tree. Token streams are then scanned against
//! it, and every dictionary entry found at every start position is reported,
//! including nested and overlapping occurrences.
//!
//! # Architecture
//!
//! - [`trie`]: builds the [`ConceptTrie`] by sorting the dictionary and
//!   recursively grouping entries on their first token
//! - [`extractor`]: walks a token stream with one active match per viable
//!   start position and yields [`ConceptMatch`] values lazily
//!
//! Tokenization is left to the caller: the core only compares tokens.
//!
//! # Example
//!
//! ```rust
//! use conceptrie_core::{ConceptTrie, ConceptMatch};
//!
//! let trie = ConceptTrie::build(vec![vec!["a", "b"], vec!["b", "c"]]);
//! let found: Vec<_> = trie.extract(vec!["a", "b", "c"]).collect();
//!
//! assert_eq!(found[0], ConceptMatch::new(0, vec!["a", "b"]));
//! assert_eq!(found[1], ConceptMatch::new(1, vec!["b", "c"]));
//! ```

pub mod extractor;
pub mod trie;
pub mod types;

pub use extractor::{extract, ConceptExtractor, Matches};
pub use trie::{ConceptTrie, TrieNode};
pub use types::ConceptMatch;
