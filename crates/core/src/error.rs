//! Error types for huffpack.
//!
//! All operations return structured errors rather than panicking. Codec
//! operations are deterministic, so none of these are worth retrying with
//! the same input.

use thiserror::Error;

use crate::symbol::Symbol;

/// Top-level error type for all operations in the library.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree construction, lookup or bit-walk failures
/// - MalformedHeader: the container header could not be parsed
/// - I/O: reading the source or writing the sink failed
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman codec error (e.g., truncated bitstream)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Container header is not a valid frequency table
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] HeaderError),

    /// Underlying read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The bit source ran dry before the end-of-stream leaf was reached
    #[error("bitstream truncated after {bits_read} bits ({bytes_decoded} bytes decoded)")]
    TruncatedStream { bits_read: u64, bytes_decoded: u64 },

    /// A symbol has no code. Never happens for tables built from the same input.
    #[error("no code for symbol {symbol}")]
    KeyNotFound { symbol: Symbol },

    /// No symbols at all (cannot build a tree)
    #[error("empty frequency table: cannot build code tree")]
    EmptyFrequencyTable,

    /// A tree without the end-of-stream leaf could never terminate decoding
    #[error("frequency table has no end-of-stream entry")]
    MissingEndOfStream,
}

/// Container header parse errors.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Header does not start with `{`
    #[error("expected '{{' at start of header, found {found:?}")]
    MissingOpenBrace { found: Option<u8> },

    /// No closing `}` before the source ended or the length limit was hit
    #[error("header not terminated within {read} bytes")]
    Unterminated { read: usize },

    /// Header text is not valid ASCII
    #[error("header contains non-ASCII byte")]
    NotAscii,

    /// Entry is not `symbol:count` with decimal integers
    #[error("invalid entry {entry:?}")]
    InvalidEntry { entry: String },

    /// Symbol value above the end-of-stream code point
    #[error("symbol {value} out of range 0..=256")]
    SymbolOutOfRange { value: u64 },

    /// Counts add up past `u64::MAX`
    #[error("total count overflows")]
    CountOverflow,

    /// Counts must be at least one
    #[error("zero count for symbol {symbol}")]
    ZeroCount { symbol: Symbol },

    /// The same symbol appears twice
    #[error("duplicate symbol {symbol}")]
    DuplicateSymbol { symbol: Symbol },

    /// No end-of-stream entry
    #[error("missing end-of-stream entry")]
    MissingEndOfStream,

    /// `{}` with no entries
    #[error("header has no entries")]
    Empty,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
