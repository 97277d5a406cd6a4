//! Stream extraction of concept occurrences
//!
//! Extraction keeps one partial match per viable start position and advances
//! all of them by one trie edge per input token. Every match that lands on a
//! concept end is emitted, so nested and overlapping occurrences are all
//! reported.
//!
//! The empty concept is recorded on the trie root but never emitted: a match
//! is only produced when consuming a token moves a walk onto a concept end.

mod matches;

use std::hash::Hash;
use std::ops::ControlFlow;

use crate::trie::{ConceptTrie, TrieNode};
use crate::types::ConceptMatch;

pub use matches::Matches;

/// Lazily extract every concept occurrence from `tokens`
///
/// Start indexes are relative to `tokens`, counting from 0.
pub fn extract<T, I>(root: &TrieNode<T>, tokens: I) -> Matches<'_, T, I::IntoIter>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    Matches::new(root, tokens.into_iter())
}

/// Concept extractor owning its dictionary trie
///
/// # Example
///
/// ```rust
/// use conceptrie_core::{ConceptExtractor, ConceptMatch};
///
/// let extractor = ConceptExtractor::new(vec![vec!["cat"], vec!["cat", "nap"]]);
/// let found: Vec<_> = extractor.extract(vec!["cat", "nap"]).collect();
///
/// assert_eq!(
///     found,
///     vec![
///         ConceptMatch::new(0, vec!["cat"]),
///         ConceptMatch::new(0, vec!["cat", "nap"]),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConceptExtractor<T: Hash + Eq = String> {
    trie: ConceptTrie<T>,
}

impl<T: Ord + Hash + Clone> ConceptExtractor<T> {
    /// Build an extractor from a concept dictionary
    pub fn new<C, I>(dictionary: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        Self::from_trie(ConceptTrie::build(dictionary))
    }
}

impl<T: Hash + Eq> ConceptExtractor<T> {
    /// Wrap an already built trie
    pub fn from_trie(trie: ConceptTrie<T>) -> Self {
        Self { trie }
    }

    /// The dictionary trie
    pub fn trie(&self) -> &ConceptTrie<T> {
        &self.trie
    }

    /// Take back the dictionary trie
    pub fn into_trie(self) -> ConceptTrie<T> {
        self.trie
    }
}

impl<T: Hash + Eq + Clone> ConceptExtractor<T> {
    /// Lazily extract every concept occurrence from `tokens`
    pub fn extract<I>(&self, tokens: I) -> Matches<'_, T, I::IntoIter>
    where
        I: IntoIterator<Item = T>,
    {
        extract(self.trie.root(), tokens)
    }

    /// Hand each match to `visit` as it is found
    ///
    /// Returning [`ControlFlow::Break`] stops the scan without reading further
    /// input. Returns the number of matches delivered.
    pub fn for_each_match<I, F>(&self, tokens: I, mut visit: F) -> usize
    where
        I: IntoIterator<Item = T>,
        F: FnMut(ConceptMatch<T>) -> ControlFlow<()>,
    {
        let mut delivered = 0;
        for found in self.extract(tokens) {
            delivered += 1;
            if visit(found).is_break() {
                break;
            }
        }
        delivered
    }

    /// Collect every match of a finite token sequence
    pub fn find_all<I>(&self, tokens: I) -> Vec<ConceptMatch<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.extract(tokens).collect()
    }
}

#[cfg(feature = "parallel")]
impl<T: Hash + Eq + Clone + Send + Sync> ConceptExtractor<T> {
    /// Extract from many independent documents sharing this dictionary
    ///
    /// Documents are scanned on the rayon pool. Results keep document order
    /// and each document's start indexes count from 0.
    pub fn extract_batch<D>(&self, documents: &[D]) -> Vec<Vec<ConceptMatch<T>>>
    where
        D: AsRef<[T]> + Sync,
    {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|doc| self.find_all(doc.as_ref().iter().cloned()))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<T: Hash + Eq + Clone> ConceptExtractor<T> {
    /// Extract from many independent documents sharing this dictionary
    ///
    /// Results keep document order and each document's start indexes count
    /// from 0.
    pub fn extract_batch<D>(&self, documents: &[D]) -> Vec<Vec<ConceptMatch<T>>>
    where
        D: AsRef<[T]>,
    {
        documents
            .iter()
            .map(|doc| self.find_all(doc.as_ref().iter().cloned()))
            .collect()
    }
}

impl<T: Hash + Eq> From<ConceptTrie<T>> for ConceptExtractor<T> {
    fn from(trie: ConceptTrie<T>) -> Self {
        Self::from_trie(trie)
    }
}
