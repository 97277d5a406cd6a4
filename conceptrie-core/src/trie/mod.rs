//! Immutable prefix tree over concept tokens
//!
//! A [`ConceptTrie`] is built once from a dictionary of concepts and is never
//! mutated afterwards. Every node records whether the token path leading to it
//! spells a complete concept.

mod builder;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::extractor::{self, Matches};

/// Node of the concept prefix tree
///
/// Children are exclusively owned by their parent. There are no back
/// references, so the whole tree is dropped with its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode<T: Hash + Eq> {
    /// Whether the path from the root to this node is a dictionary concept
    is_concept_end: bool,
    /// Child nodes indexed by next token
    children: HashMap<T, TrieNode<T>>,
}

impl<T: Hash + Eq> TrieNode<T> {
    /// Whether the token path to this node exactly equals a concept
    pub fn is_concept_end(&self) -> bool {
        self.is_concept_end
    }

    /// Child nodes keyed by token
    pub fn children(&self) -> &HashMap<T, TrieNode<T>> {
        &self.children
    }

    /// Follow a single token edge
    pub fn child(&self, token: &T) -> Option<&TrieNode<T>> {
        self.children.get(token)
    }

    /// Whether no concept extends past this node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }
}

/// Prefix tree built from a concept dictionary
///
/// The trie is read-only after [`ConceptTrie::build`] returns, so a single
/// instance can serve any number of extraction calls, including calls made
/// concurrently from several threads.
///
/// # Example
///
/// ```rust
/// use conceptrie_core::ConceptTrie;
///
/// let trie = ConceptTrie::build(vec![vec!["new", "york"], vec!["new"]]);
/// assert!(trie.contains(["new", "york"]));
/// assert!(!trie.contains(["york"]));
/// assert_eq!(trie.max_depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptTrie<T: Hash + Eq = String> {
    root: TrieNode<T>,
    concept_count: usize,
    max_depth: usize,
    node_count: usize,
}

impl<T: Ord + Hash + Clone> ConceptTrie<T> {
    /// Build the trie from a collection of concepts
    ///
    /// Input order does not matter and duplicate concepts collapse into one.
    /// The empty concept is accepted and marks the root.
    pub fn build<C, I>(concepts: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut entries: Vec<Vec<T>> = concepts
            .into_iter()
            .map(|concept| concept.into_iter().collect())
            .collect();
        let supplied = entries.len();

        entries.sort_unstable();
        entries.dedup();

        let max_depth = entries.iter().map(Vec::len).max().unwrap_or(0);
        let root = builder::build_root(&entries);
        let node_count = root.node_count();

        log::debug!(
            "built concept trie: {} concepts ({} supplied), {} nodes, max depth {}",
            entries.len(),
            supplied,
            node_count,
            max_depth
        );

        Self {
            root,
            concept_count: entries.len(),
            max_depth,
            node_count,
        }
    }

    /// Every stored concept in ascending lexicographic order
    pub fn concepts(&self) -> Vec<Vec<T>> {
        let mut out = Vec::with_capacity(self.concept_count);
        let mut prefix = Vec::with_capacity(self.max_depth);
        collect_concepts(&self.root, &mut prefix, &mut out);
        out
    }
}

impl<T: Hash + Eq> ConceptTrie<T> {
    /// Root node of the tree
    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }

    /// Whether `concept` is exactly a dictionary entry
    ///
    /// Tokens may be given in any borrowed form of `T`, e.g. `&str` for a
    /// `String` trie.
    pub fn contains<'a, Q, I>(&self, concept: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let mut node = &self.root;
        for token in concept {
            match node.children.get(token) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_concept_end
    }

    /// Number of distinct concepts, the empty concept included
    pub fn len(&self) -> usize {
        self.concept_count
    }

    /// Whether the dictionary held no concepts at all
    pub fn is_empty(&self) -> bool {
        self.concept_count == 0
    }

    /// Length of the longest concept
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether the empty token sequence was supplied as a concept
    ///
    /// Such a concept is recorded on the root but never emitted by extraction.
    pub fn has_empty_concept(&self) -> bool {
        self.root.is_concept_end
    }
}

impl<T: Hash + Eq + Clone> ConceptTrie<T> {
    /// Lazily extract every concept occurrence from `tokens`
    pub fn extract<I>(&self, tokens: I) -> Matches<'_, T, I::IntoIter>
    where
        I: IntoIterator<Item = T>,
    {
        extractor::extract(&self.root, tokens)
    }
}

impl<T: Ord + Hash + Clone> FromIterator<Vec<T>> for ConceptTrie<T> {
    fn from_iter<C: IntoIterator<Item = Vec<T>>>(iter: C) -> Self {
        Self::build(iter)
    }
}

fn collect_concepts<T: Ord + Hash + Clone>(
    node: &TrieNode<T>,
    prefix: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if node.is_concept_end {
        out.push(prefix.clone());
    }

    let mut edges: Vec<(&T, &TrieNode<T>)> = node.children.iter().collect();
    edges.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (token, child) in edges {
        prefix.push(token.clone());
        collect_concepts(child, prefix, out);
        prefix.pop();
    }
}
