//! Container format and the top-level compress/decompress entry points.
//!
//! An artifact is a textual frequency header followed directly by the packed
//! bitstream. The decoder rebuilds the same code tree from the header, so no
//! knowledge of the original alphabet is needed.
//!
//! # Artifact Format
//!
//! ```text
//! +-------------------------------+
//! | {sym:count, sym:count, ...}   |  ASCII, ascending by symbol,
//! |                               |  end-of-stream is symbol 256
//! +-------------------------------+
//! | packed codes                  |  MSB-first, each input byte's code
//! | (variable)                    |  then the end-of-stream code,
//! |                               |  zero-padded to a byte boundary
//! +-------------------------------+
//! ```
//!
//! For `"aaab"` the artifact is `{97:3, 98:1, 256:1}` followed by the single
//! byte `0b1110_0010`. Empty input produces `{256:1}` and no payload.

use std::io::{ErrorKind, Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::code_table::CodeTable;
use crate::codec;
use crate::error::{HeaderError, Result};
use crate::frequency::SymbolFrequencyTable;
use crate::metrics::{CompressionStats, DecompressionStats};
use crate::symbol::Symbol;
use crate::tree::CodeTree;

/// Longest header accepted when reading. A full 257-symbol table with
/// 20-digit counts stays well below this.
pub const MAX_HEADER_LEN: usize = 16 * 1024;

/// Serialize a frequency table as `{sym:count, ...}`.
pub fn serialize_header(table: &SymbolFrequencyTable) -> Vec<u8> {
    let entries: Vec<String> = table
        .iter()
        .map(|(symbol, count)| format!("{}:{}", symbol.code_point(), count))
        .collect();
    format!("{{{}}}", entries.join(", ")).into_bytes()
}

/// Parse a complete header, braces included.
///
/// # Errors
/// Any [`HeaderError`]: bad framing, bad entries, out-of-range or duplicate
/// symbols, zero counts, or a missing end-of-stream entry.
pub fn parse_header(bytes: &[u8]) -> std::result::Result<SymbolFrequencyTable, HeaderError> {
    if !bytes.is_ascii() {
        return Err(HeaderError::NotAscii);
    }
    // ASCII is valid UTF-8
    let text = std::str::from_utf8(bytes).map_err(|_| HeaderError::NotAscii)?;

    let inner = text
        .strip_prefix('{')
        .ok_or(HeaderError::MissingOpenBrace {
            found: bytes.first().copied(),
        })?
        .strip_suffix('}')
        .ok_or(HeaderError::Unterminated { read: bytes.len() })?;

    if inner.trim().is_empty() {
        return Err(HeaderError::Empty);
    }

    let mut table = SymbolFrequencyTable::new();
    let mut total = 0u64;

    for entry in inner.split(',') {
        let entry = entry.trim();
        let invalid = || HeaderError::InvalidEntry {
            entry: entry.to_string(),
        };

        let (symbol_text, count_text) = entry.split_once(':').ok_or_else(invalid)?;
        let value = parse_decimal(symbol_text.trim()).ok_or_else(invalid)?;
        let count = parse_decimal(count_text.trim()).ok_or_else(invalid)?;

        let symbol = u16::try_from(value)
            .ok()
            .and_then(Symbol::from_code_point)
            .ok_or(HeaderError::SymbolOutOfRange { value })?;

        if count == 0 {
            return Err(HeaderError::ZeroCount { symbol });
        }
        total = total.checked_add(count).ok_or(HeaderError::CountOverflow)?;

        if table.insert(symbol, count).is_some() {
            return Err(HeaderError::DuplicateSymbol { symbol });
        }
    }

    if !table.contains(Symbol::EndOfStream) {
        return Err(HeaderError::MissingEndOfStream);
    }

    Ok(table)
}

/// Strict unsigned decimal: digits only, no sign, no blanks.
fn parse_decimal(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Read a header from `reader`, stopping right after the closing `}`.
///
/// Reads one byte at a time so the payload that follows is left untouched.
/// Returns the table and the header length in bytes.
pub fn read_header<R: Read>(reader: &mut R) -> Result<(SymbolFrequencyTable, u64)> {
    let mut header = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        match reader.read(&mut byte) {
            Ok(0) if header.is_empty() => {
                return Err(HeaderError::MissingOpenBrace { found: None }.into());
            }
            Ok(0) => {
                return Err(HeaderError::Unterminated { read: header.len() }.into());
            }
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }

        if header.is_empty() && byte[0] != b'{' {
            return Err(HeaderError::MissingOpenBrace {
                found: Some(byte[0]),
            }
            .into());
        }

        header.push(byte[0]);
        if byte[0] == b'}' {
            break;
        }
        if header.len() >= MAX_HEADER_LEN {
            return Err(HeaderError::Unterminated { read: header.len() }.into());
        }
    }

    let table = parse_header(&header)?;
    log::debug!(
        "read header: {} bytes, {} symbols, {} total count",
        header.len(),
        table.len(),
        table.total()
    );
    Ok((table, header.len() as u64))
}

/// Compress everything readable from `input` into `output`.
///
/// The whole input is read into memory first. Empty input is valid and
/// produces a header-only artifact.
pub fn compress<R: Read, W: Write>(mut input: R, output: W) -> Result<CompressionStats> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    compress_slice(&data, output)
}

/// Compress an in-memory buffer into `output`.
pub fn compress_slice<W: Write>(data: &[u8], mut output: W) -> Result<CompressionStats> {
    let frequencies = SymbolFrequencyTable::from_bytes(data);
    let tree = CodeTree::build(&frequencies)?;
    let table = CodeTable::from_tree(&tree);

    let header = serialize_header(&frequencies);
    output.write_all(&header)?;

    let mut writer = BitWriter::new(output);
    let payload_bits = codec::encode(data, &table, &mut writer)?;
    writer.finish()?;

    let stats = CompressionStats {
        input_bytes: data.len() as u64,
        header_bytes: header.len() as u64,
        payload_bits,
        distinct_symbols: frequencies.len(),
        max_code_len: table.max_code_len(),
    };
    log::debug!(
        "compressed {} bytes into {} ({} header + {} payload)",
        stats.input_bytes,
        stats.output_bytes(),
        stats.header_bytes,
        stats.payload_bytes()
    );
    Ok(stats)
}

/// Decompress an artifact from `input` into `output`.
///
/// Output is written only once the end-of-stream code has been reached.
///
/// # Errors
/// - `Error::MalformedHeader` if the header does not parse
/// - `HuffmanError::TruncatedStream` if the payload ends early
/// - `Error::Io` on read or write failure
pub fn decompress<R: Read, W: Write>(mut input: R, mut output: W) -> Result<DecompressionStats> {
    let (frequencies, header_bytes) = read_header(&mut input)?;
    let tree = CodeTree::build(&frequencies)?;

    let mut reader = BitReader::new(&mut input);
    let decoded = codec::decode(&tree, &mut reader)?;

    output.write_all(&decoded)?;
    output.flush()?;

    Ok(DecompressionStats {
        header_bytes,
        payload_bits: reader.position(),
        output_bytes: decoded.len() as u64,
    })
}

/// Compress an in-memory buffer into a new artifact.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut artifact = Vec::new();
    compress_slice(data, &mut artifact)?;
    Ok(artifact)
}

/// Decompress an in-memory artifact.
pub fn decompress_bytes(artifact: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress(artifact, &mut output)?;
    Ok(output)
}
