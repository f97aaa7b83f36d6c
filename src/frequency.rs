//! Character frequency analysis.
//!
//! Counting is commutative, so a corpus may be split, counted piecewise and
//! the partial tables combined with [`FrequencyTable::merge`].

use std::collections::BTreeMap;
use std::io::Read;

use crate::error::Result;

/// Absolute occurrence count of every distinct character in a corpus.
///
/// Iteration is in ascending character order. Every stored count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of `corpus`.
    pub fn from_corpus(corpus: &str) -> Self {
        corpus.chars().collect()
    }

    /// Read a UTF-8 corpus to the end and count its characters.
    ///
    /// # Errors
    /// Returns `Error::Io` if reading fails or the input is not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut corpus = String::new();
        reader.read_to_string(&mut corpus)?;
        Ok(Self::from_corpus(&corpus))
    }

    /// Record one occurrence of `symbol`.
    pub fn add(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Add the counts of `other` into `self`.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (&symbol, &count) in &other.counts {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    /// Occurrence count of `symbol`, if it was seen.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no character has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of characters counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<char> for FrequencyTable {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for symbol in iter {
            self.add(symbol);
        }
    }
}

/// Build the frequency table of `corpus`.
pub fn frequency_table(corpus: &str) -> FrequencyTable {
    FrequencyTable::from_corpus(corpus)
}
