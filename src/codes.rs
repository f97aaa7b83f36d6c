//! Code extraction from a finished tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// Mapping from character to its `'0'`/`'1'` code.
///
/// Codes are prefix-free whenever the table has two or more entries. A table
/// extracted from a single-leaf tree maps its only character to `""`, which
/// carries no bits and cannot separate repeated characters in an encoded
/// stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Walk `tree` from the root, labelling left edges `'0'` and right edges
    /// `'1'`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        // Explicit stack: skewed trees can be as deep as the alphabet is large.
        let mut stack = vec![(tree.root(), String::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, prefix);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    stack.push((right.as_ref(), right_prefix));

                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((left.as_ref(), left_prefix));
                }
            }
        }
        log::debug!("extracted {} codes", codes.len());
        Self { codes }
    }

    /// Code of `symbol`, if it has one.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Whether `symbol` has a code.
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of coded characters.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Encoded size in bits of text with the given frequencies: the sum of
    /// frequency times code length. Characters without a code are skipped.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, freq)| self.get(symbol).map(|code| freq * code.len() as u64))
            .sum()
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_codes(self))
    }
}

/// Derive the code table of `tree`.
pub fn extract_codes(tree: &HuffmanTree) -> CodeTable {
    CodeTable::from_tree(tree)
}
