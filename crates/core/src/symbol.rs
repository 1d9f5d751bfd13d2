//! The alphabet the codec assigns prefix codes to.
//!
//! Every input byte is a symbol, plus one end-of-stream sentinel that is
//! appended to every input so the decoder knows where the data ends inside
//! the bitstream. Internal tree nodes are a separate node variant and never
//! carry a symbol, so no reserved marker value exists.

use std::fmt;

/// Numeric form of [`Symbol::EndOfStream`] in the container header.
pub const END_OF_STREAM_CODE_POINT: u16 = 256;

/// A byte value or the end-of-stream sentinel.
///
/// Ordering puts all bytes first (ascending), then `EndOfStream`, the same
/// order as [`Symbol::code_point`]. The tree builder's tie-break relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Byte(u8),
    EndOfStream,
}

impl Symbol {
    /// Header representation: `0..=255` for bytes, `256` for end-of-stream.
    pub fn code_point(self) -> u16 {
        match self {
            Symbol::Byte(b) => b as u16,
            Symbol::EndOfStream => END_OF_STREAM_CODE_POINT,
        }
    }

    /// Inverse of [`Symbol::code_point`]. Returns `None` above 256.
    pub fn from_code_point(value: u16) -> Option<Self> {
        match value {
            0..=255 => Some(Symbol::Byte(value as u8)),
            END_OF_STREAM_CODE_POINT => Some(Symbol::EndOfStream),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b) if b.is_ascii_graphic() => write!(f, "'{}'", *b as char),
            Symbol::Byte(b) => write!(f, "0x{:02x}", b),
            Symbol::EndOfStream => f.write_str("EOF"),
        }
    }
}
