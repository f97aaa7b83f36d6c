//! Huffman tree construction.
//!
//! The tree is built greedily: the two lightest subtrees are repeatedly
//! merged until one remains. Equal weights are ordered by a sequence number
//! so the same frequencies always yield the same tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// An internal node always owns exactly two children, and its frequency is
/// the sum of theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single character and its corpus frequency.
    Leaf {
        /// The character this leaf encodes.
        symbol: char,
        /// Occurrence count of `symbol`.
        freq: u64,
    },
    /// The merge of two subtrees.
    Internal {
        /// Subtree reached by a `'0'`.
        left: Box<Node>,
        /// Subtree reached by a `'1'`.
        right: Box<Node>,
        /// Combined frequency of both subtrees.
        freq: u64,
    },
}

impl Node {
    /// Frequency of the subtree rooted here.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Node {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }
}

/// A node waiting in the priority queue.
///
/// `seq` breaks frequency ties: leaves are numbered in ascending character
/// order, internal nodes continue the numbering in creation order.
struct Queued {
    seq: usize,
    node: Node,
}

impl Queued {
    fn key(&self) -> (u64, usize) {
        (self.node.freq(), self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build a tree from character frequencies.
    ///
    /// A table with a single character produces a tree whose root is that
    /// leaf.
    ///
    /// # Errors
    /// Returns `Error::EmptyCorpus` if `frequencies` is empty.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut pq = BinaryHeap::with_capacity(frequencies.len());
        for (seq, (symbol, freq)) in frequencies.iter().enumerate() {
            pq.push(Queued {
                seq,
                node: Node::Leaf { symbol, freq },
            });
        }
        let mut next_seq = pq.len();

        let root = loop {
            let left = pq.pop().ok_or(Error::EmptyCorpus)?;
            let Some(right) = pq.pop() else {
                break left.node;
            };

            log::trace!(
                "merging #{} (freq {}) with #{} (freq {}) into #{}",
                left.seq,
                left.node.freq(),
                right.seq,
                right.node.freq(),
                next_seq
            );
            pq.push(Queued {
                seq: next_seq,
                node: Node::merge(left.node, right.node),
            });
            next_seq += 1;
        };

        let tree = Self { root };
        log::debug!(
            "built Huffman tree: {} leaves, weight {}, depth {}",
            frequencies.len(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Count characters of `corpus` and build its tree.
    ///
    /// # Errors
    /// Returns `Error::EmptyCorpus` if `corpus` is empty.
    pub fn from_corpus(corpus: &str) -> Result<Self> {
        Self::build(&FrequencyTable::from_corpus(corpus))
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total frequency, i.e. the length of the corpus in characters.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Number of leaves (distinct characters).
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. Zero for a single leaf.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf(symbol: char, freq: u64) -> Node {
        Node::Leaf { symbol, freq }
    }

    fn sums_hold(node: &Node) -> bool {
        match node {
            Node::Leaf { freq, .. } => *freq > 0,
            Node::Internal { left, right, freq } => {
                *freq == left.freq() + right.freq() && sums_hold(left) && sums_hold(right)
            }
        }
    }

    #[test]
    fn test_empty_table_is_error() {
        let result = HuffmanTree::build(&FrequencyTable::new());
        assert!(matches!(result, Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_single_symbol_root_is_leaf() {
        let tree = HuffmanTree::from_corpus("aaaa").unwrap();
        assert_eq!(tree.root(), &leaf('a', 4));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_is_leaf_distinguishes_root_shapes() {
        let single = HuffmanTree::from_corpus("a").unwrap();
        assert!(single.root().is_leaf());

        let pair = HuffmanTree::from_corpus("ab").unwrap();
        assert!(!pair.root().is_leaf());
        match pair.root() {
            Node::Internal { left, right, .. } => {
                assert!(left.is_leaf());
                assert!(right.is_leaf());
            }
            Node::Leaf { .. } => panic!("two symbols must merge into an internal root"),
        }
    }

    #[test]
    fn test_first_popped_is_left_child() {
        let tree = HuffmanTree::from_corpus("aaabb").unwrap();
        assert_eq!(tree.root(), &Node::merge(leaf('b', 2), leaf('a', 3)));
    }

    #[test]
    fn test_ties_break_by_character_then_creation_order() {
        // a, b, c all weigh 1: a and b merge first (lowest characters), then
        // c (seq 2) pops before the new internal node (seq 3, weight 2).
        let tree = HuffmanTree::from_corpus("abc").unwrap();
        let expected = Node::merge(leaf('c', 1), Node::merge(leaf('a', 1), leaf('b', 1)));
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn test_skewed_distribution_depth() {
        // Fibonacci weights give the deepest possible tree.
        let mut freqs = FrequencyTable::new();
        let (mut a, mut b) = (1u64, 1u64);
        for symbol in 'a'..='t' {
            for _ in 0..a {
                freqs.add(symbol);
            }
            (a, b) = (b, a + b);
        }
        let tree = HuffmanTree::build(&freqs).unwrap();
        assert_eq!(tree.leaf_count(), 20);
        assert_eq!(tree.depth(), 19);
        assert_eq!(tree.weight(), freqs.total());
    }

    proptest! {
        #[test]
        fn prop_internal_frequencies_are_sums(corpus in ".{1,120}") {
            let freqs = FrequencyTable::from_corpus(&corpus);
            let tree = HuffmanTree::build(&freqs).unwrap();
            prop_assert!(sums_hold(tree.root()));
            prop_assert_eq!(tree.weight(), freqs.total());
            prop_assert_eq!(tree.leaf_count(), freqs.len());
        }

        #[test]
        fn prop_build_is_reproducible(corpus in "[a-e]{1,60}") {
            let freqs = FrequencyTable::from_corpus(&corpus);
            prop_assert_eq!(HuffmanTree::build(&freqs).unwrap(), HuffmanTree::build(&freqs).unwrap());
        }
    }
}
