//! Bit packing and unpacking of symbol streams.
//!
//! The encoder writes each byte's code followed by the end-of-stream code.
//! The decoder walks the tree one bit at a time and stops at the
//! end-of-stream leaf, so any padding after it is never read.

use crate::bitio::{BitSink, BitSource};
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;
use crate::tree::{CodeTree, Node};

/// Write the codes for `data` and the end-of-stream code to `sink`.
///
/// Returns the number of bits written. With a single-leaf table every code
/// is empty and nothing is written.
///
/// # Errors
/// - `HuffmanError::KeyNotFound` if a byte of `data` is missing from `table`
/// - I/O errors from the sink
pub fn encode<S: BitSink>(data: &[u8], table: &CodeTable, sink: &mut S) -> Result<u64> {
    let mut bits = 0u64;
    let symbols = data
        .iter()
        .map(|&b| Symbol::Byte(b))
        .chain(std::iter::once(Symbol::EndOfStream));

    for symbol in symbols {
        let code = table.get(symbol)?;
        for &bit in code.bits() {
            sink.write_bit(bit)?;
        }
        bits += code.len() as u64;
    }

    log::debug!("encoded {} bytes into {} bits", data.len(), bits);
    Ok(bits)
}

/// Render the encoded bitstream as a string of `0` and `1`.
pub fn encode_to_bit_string(data: &[u8], table: &CodeTable) -> Result<String> {
    let mut sink = BitString(String::new());
    encode(data, table, &mut sink)?;
    Ok(sink.0)
}

struct BitString(String);

impl BitSink for BitString {
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.0.push(if bit { '1' } else { '0' });
        Ok(())
    }
}

/// Decode bits from `source` until the end-of-stream leaf is reached.
///
/// Returns the decoded bytes. Nothing is returned on failure, so a
/// truncated stream never yields a partial result.
///
/// # Errors
/// - `HuffmanError::TruncatedStream` if the source runs out first
/// - I/O errors from the source
pub fn decode<S: BitSource>(tree: &CodeTree, source: &mut S) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut output = Vec::new();
    let mut bits_read = 0u64;
    let mut node = root;

    loop {
        match node {
            Node::Leaf {
                symbol: Symbol::EndOfStream,
                ..
            } => break,
            Node::Leaf {
                symbol: Symbol::Byte(byte),
                ..
            } => {
                output.push(*byte);
                node = root;
            }
            Node::Internal { left, right, .. } => {
                let Some(bit) = source.read_bit()? else {
                    return Err(HuffmanError::TruncatedStream {
                        bits_read,
                        bytes_decoded: output.len() as u64,
                    }
                    .into());
                };
                bits_read += 1;
                node = if bit { &**right } else { &**left };
            }
        }
    }

    log::debug!("decoded {} bytes from {} bits", output.len(), bits_read);
    Ok(output)
}
