//! Lazy multi-start matching over a token stream

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::trie::TrieNode;
use crate::types::ConceptMatch;

/// Partial trie walk anchored at a start position
struct ActiveMatch<'t, T: Hash + Eq> {
    start: usize,
    tokens: SmallVec<[T; 4]>,
    node: &'t TrieNode<T>,
}

impl<'t, T: Hash + Eq> ActiveMatch<'t, T> {
    fn seed(start: usize, root: &'t TrieNode<T>) -> Self {
        Self {
            start,
            tokens: SmallVec::new(),
            node: root,
        }
    }
}

/// Lazy iterator over every concept occurrence in a token stream
///
/// Created by [`extract`](super::extract). Input tokens are pulled one at a
/// time and only when the matches already found have been handed out, so an
/// unbounded input produces an unbounded, lazily computed output.
///
/// Matches come out ordered by the index of the token that completes them and,
/// for the same completion index, by ascending start index.
pub struct Matches<'t, T: Hash + Eq, I> {
    root: &'t TrieNode<T>,
    tokens: I,
    /// Tokens consumed so far; also the start index of the next seed
    position: usize,
    /// Token being tested against `pending`
    current: Option<T>,
    /// Matches still to be tested against `current`, oldest start first
    pending: VecDeque<ActiveMatch<'t, T>>,
    /// Matches that survived `current`, in the same order
    retained: Vec<ActiveMatch<'t, T>>,
    exhausted: bool,
}

impl<'t, T: Hash + Eq, I> Matches<'t, T, I> {
    pub(super) fn new(root: &'t TrieNode<T>, tokens: I) -> Self {
        Self {
            root,
            tokens,
            position: 0,
            current: None,
            pending: VecDeque::new(),
            retained: Vec::new(),
            exhausted: false,
        }
    }

    /// Number of input tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of partial matches currently tracked
    ///
    /// Never exceeds the length of the longest concept.
    pub fn active_len(&self) -> usize {
        self.pending.len() + self.retained.len()
    }
}

impl<'t, T, I> Iterator for Matches<'t, T, I>
where
    T: Hash + Eq + Clone,
    I: Iterator<Item = T>,
{
    type Item = ConceptMatch<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = &self.current {
                while let Some(mut active) = self.pending.pop_front() {
                    let Some(child) = active.node.child(token) else {
                        continue;
                    };

                    active.node = child;
                    active.tokens.push(token.clone());

                    let found = child
                        .is_concept_end()
                        .then(|| ConceptMatch::new(active.start, active.tokens.to_vec()));

                    // A leaf cannot be extended by any later token
                    if !child.is_leaf() {
                        self.retained.push(active);
                    }

                    if found.is_some() {
                        return found;
                    }
                }
            }

            if self.exhausted {
                return None;
            }

            match self.tokens.next() {
                Some(token) => {
                    self.pending.extend(self.retained.drain(..));
                    self.pending
                        .push_back(ActiveMatch::seed(self.position, self.root));
                    self.current = Some(token);
                    self.position += 1;
                }
                None => {
                    self.exhausted = true;
                    self.current = None;
                    self.retained.clear();
                    return None;
                }
            }
        }
    }
}

impl<'t, T, I> FusedIterator for Matches<'t, T, I>
where
    T: Hash + Eq + Clone,
    I: Iterator<Item = T>,
{
}

impl<'t, T: Hash + Eq, I> fmt::Debug for Matches<'t, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches")
            .field("position", &self.position)
            .field("active", &self.active_len())
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConceptTrie;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_suspends_after_each_match() {
        let trie = ConceptTrie::build(vec![tokens(&["a"]), tokens(&["a", "a"])]);
        let mut matches = trie.extract(tokens(&["a", "a", "a"]));

        assert_eq!(matches.next(), Some(ConceptMatch::new(0, tokens(&["a"]))));
        assert_eq!(matches.position(), 1);

        // completes "a a" from 0, then "a" from 1, both on the second token
        assert_eq!(matches.next(), Some(ConceptMatch::new(0, tokens(&["a", "a"]))));
        assert_eq!(matches.position(), 2);
        assert_eq!(matches.next(), Some(ConceptMatch::new(1, tokens(&["a"]))));
        assert_eq!(matches.position(), 2);
    }

    #[test]
    fn test_unknown_tokens_prune_everything() {
        let trie = ConceptTrie::build(vec![tokens(&["a", "b", "c"])]);
        let mut matches = trie.extract(tokens(&["a", "b", "x", "c"]));

        assert_eq!(matches.next(), None);
        assert_eq!(matches.position(), 4);
        assert_eq!(matches.active_len(), 0);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let trie = ConceptTrie::build(vec![tokens(&["z"])]);
        let mut matches = trie.extract(tokens(&["z"]));

        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());
    }

    #[test]
    fn test_active_set_bounded_by_depth() {
        let trie = ConceptTrie::build(vec![tokens(&["a", "a", "a"])]);
        let mut matches = trie.extract(std::iter::repeat("a".to_string()).take(50));

        while matches.next().is_some() {
            assert!(matches.active_len() <= trie.max_depth());
        }
        assert_eq!(matches.position(), 50);
    }

    #[test]
    fn test_debug_reports_progress() {
        let trie = ConceptTrie::build(vec![tokens(&["a"])]);
        let matches = trie.extract(tokens(&["a"]));
        let debug = format!("{:?}", matches);
        assert!(debug.contains("position: 0"));
    }
}
