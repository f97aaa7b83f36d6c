//! Error types for Huffman code construction.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus contained no characters, so no tree root exists.
    #[error("empty corpus: cannot build a Huffman tree without symbols")]
    EmptyCorpus,

    /// An I/O error occurred while reading a corpus.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
