//! # Huffman Codes for Text
//!
//! *Optimal prefix codes derived from a sample corpus.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols, because `E` turns up
//! far more often. Huffman coding makes that intuition exact: count how often
//! each character appears in a representative text, then hand out bit strings
//! so that the common characters get the short ones and no code is ever the
//! beginning of another.
//!
//! ## The Problem
//!
//! A fixed-width encoding spends the same number of bits on every character.
//! For skewed distributions (natural language, source code, logs) that wastes
//! space. We want a variable-length code that:
//! - minimizes the total encoded length of the corpus, and
//! - is prefix-free, so a concatenation of codes can be split unambiguously.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up greedy merge: provably optimal prefix codes
//! 1978  Gallager    Adaptive Huffman coding
//! 1993  PKZIP       DEFLATE pairs LZ77 with Huffman coding
//! ```
//!
//! ## Algorithm
//!
//! Given frequencies $f_1, \dots, f_n$:
//!
//! ```text
//! queue <- one leaf per character, keyed by frequency
//! while |queue| > 1:
//!     x <- pop min, y <- pop min
//!     push Internal(left = x, right = y, freq = f(x) + f(y))
//! root <- pop
//! ```
//!
//! Each character's code is the path from the root to its leaf, `'0'` for a
//! left edge and `'1'` for a right edge. The result minimizes
//! $\sum_i f_i \cdot |c_i|$ over all binary prefix codes.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(N)$ to count a corpus of $N$ characters, $O(n \log n)$ to
//!   build the tree over $n$ distinct characters, $O(M)$ output characters to
//!   encode a message.
//! - **Space**: $O(n)$ for the tree and code table.
//!
//! ## Failure Modes
//!
//! 1. **Empty corpus**: there is no tree to build; [`Error::EmptyCorpus`].
//! 2. **Single distinct character**: the tree is one leaf and its code is the
//!    empty string. Encoding succeeds but produces no bits.
//! 3. **Unseen characters**: a message may contain characters the corpus
//!    never did. They encode as [`SENTINEL`] (`'-'`), so such output is lossy.
//!
//! ## Implementation Notes
//!
//! Equal frequencies are ordered by a sequence number (ascending character for
//! leaves, then creation order for merged nodes), so the same corpus always
//! yields bit-identical codes. Output is a `String` of `'0'`/`'1'`; no bit
//! packing is done.
//!
//! ```
//! let codes = huffcode::get_codes("aaabb")?;
//! assert_eq!(huffcode::encode("abz", &codes), "10-");
//! assert_eq!(huffcode::codes_to_string(&codes).lines().collect::<Vec<_>>(), ["a=1", "b=0"]);
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. *Introduction to Algorithms*, section 16.3.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codes;
pub mod encode;
pub mod error;
pub mod format;
pub mod frequency;
pub mod tree;

pub use codes::{extract_codes, CodeTable};
pub use encode::{encode, SENTINEL};
pub use error::{Error, Result};
pub use format::format_codes;
pub use frequency::{frequency_table, FrequencyTable};
pub use tree::{HuffmanTree, Node};

/// Build the Huffman code table of `corpus`.
///
/// # Errors
/// Returns `Error::EmptyCorpus` if `corpus` is empty.
pub fn get_codes(corpus: &str) -> Result<CodeTable> {
    let tree = HuffmanTree::from_corpus(corpus)?;
    Ok(CodeTable::from_tree(&tree))
}

/// Ordered `character=code` listing of `codes`, one entry per line.
pub fn codes_to_string(codes: &CodeTable) -> String {
    format_codes(codes)
}
