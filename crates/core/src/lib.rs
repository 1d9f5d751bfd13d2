//! huffpack-core: byte-oriented Huffman compression
//!
//! This library derives a prefix code from the byte frequencies of an input,
//! packs the input into a bit-dense stream behind a header describing those
//! frequencies, and reverses the process losslessly.
//!
//! # Architecture
//!
//! The pipeline is a strict sequence, each stage finishing before the next:
//! - `frequency`: symbol counting (every input gets one end-of-stream symbol)
//! - `tree`: greedy minimum-count merge with a canonical tie-break
//! - `code_table`: root-to-leaf bit paths per symbol
//! - `bitio`: MSB-first bit reading/writing over byte streams
//! - `codec`: bit packing and tree-walking decode
//! - `container`: header format and the compress/decompress entry points
//! - `files`: file naming and scoped file handling
//! - `metrics`: sizes, ratios and timing
//!
//! # Example
//! ```
//! let artifact = huffpack_core::compress_bytes(b"aaab").unwrap();
//! assert!(artifact.starts_with(b"{97:3, 98:1, 256:1}"));
//! assert_eq!(huffpack_core::decompress_bytes(&artifact).unwrap(), b"aaab");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: malformed artifacts produce structured errors
//! - **Deterministic**: the same input always yields the same artifact
//! - **No shared state**: every call builds its own table, tree and codes

pub mod bitio;
pub mod code_table;
pub mod codec;
pub mod container;
pub mod error;
pub mod files;
pub mod frequency;
pub mod metrics;
pub mod symbol;
pub mod tree;

// Re-export commonly used types
pub use code_table::{Code, CodeTable};
pub use container::{compress, compress_bytes, decompress, decompress_bytes};
pub use error::{Error, HeaderError, HuffmanError, Result};
pub use frequency::SymbolFrequencyTable;
pub use symbol::Symbol;
pub use tree::{CodeTree, Node};
