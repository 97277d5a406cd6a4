//! Recursive grouping construction
//!
//! Entries arrive sorted and deduplicated. At each level the empty suffix (if
//! any) sorts first and flags the node being built; the remaining suffixes form
//! contiguous runs sharing a first token, and each run becomes one child built
//! from the run's tails.

use std::hash::Hash;

use super::TrieNode;

/// Build the root node from sorted, deduplicated concepts
pub(super) fn build_root<T: Ord + Hash + Clone>(entries: &[Vec<T>]) -> TrieNode<T> {
    debug_assert!(entries.windows(2).all(|w| w[0] < w[1]));

    let suffixes: Vec<&[T]> = entries.iter().map(Vec::as_slice).collect();
    build_node(&suffixes)
}

fn build_node<T: Ord + Hash + Clone>(entries: &[&[T]]) -> TrieNode<T> {
    let is_concept_end = entries.first().is_some_and(|entry| entry.is_empty());
    let rest = if is_concept_end { &entries[1..] } else { entries };

    let children = rest
        .chunk_by(|a, b| a[0] == b[0])
        .map(|group| {
            let head = group[0][0].clone();
            let tails: Vec<&[T]> = group.iter().map(|entry| &entry[1..]).collect();
            (head, build_node(&tails))
        })
        .collect();

    TrieNode {
        is_concept_end,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entries_yields_bare_leaf() {
        let node = build_root::<u8>(&[]);
        assert!(!node.is_concept_end());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_groups_by_first_token() {
        let entries = vec![vec![1, 2], vec![1, 3], vec![2], vec![2, 1]];
        let root = build_root(&entries);

        assert_eq!(root.children().len(), 2);

        let one = root.child(&1).unwrap();
        assert!(!one.is_concept_end());
        assert_eq!(one.children().len(), 2);
        assert!(one.child(&2).unwrap().is_concept_end());
        assert!(one.child(&3).unwrap().is_concept_end());

        let two = root.child(&2).unwrap();
        assert!(two.is_concept_end());
        assert!(two.child(&1).unwrap().is_concept_end());
    }

    #[test]
    fn test_empty_entry_flags_root_only() {
        let entries = vec![vec![], vec![7]];
        let root = build_root(&entries);

        assert!(root.is_concept_end());
        let seven = root.child(&7).unwrap();
        assert!(seven.is_concept_end());
        assert!(seven.is_leaf());
    }
}
