//! Bit-level I/O over byte sinks and sources.
//!
//! This module provides BitWriter and BitReader for packing Huffman codes.
//! Both operate in MSB-first (most significant bit first) order.
//!
//! # Padding Rules
//! - BitWriter: pads the final partial byte with trailing zeros on `finish`
//! - BitReader: cannot tell padding from data; the decoder stops at the
//!   end-of-stream leaf and never reads the padding
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitReader, BitSink, BitSource, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! for bit in [true, false, true, true, true] {
//!     writer.write_bit(bit).unwrap();
//! }
//! // 10111 -> padded to 10111000
//! let bytes = writer.finish().unwrap();
//! assert_eq!(bytes, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(bytes.as_slice());
//! assert_eq!(reader.read_bit().unwrap(), Some(true));
//! assert_eq!(reader.read_bit().unwrap(), Some(false));
//! ```

use std::io::{self, Read, Write};

use crate::error::Result;

/// Destination for individual bits, in emission order.
pub trait BitSink {
    fn write_bit(&mut self, bit: bool) -> Result<()>;
}

/// Source of individual bits.
pub trait BitSource {
    /// Next bit, or `None` once the underlying source is exhausted.
    fn read_bit(&mut self) -> Result<Option<bool>>;
}

/// Writes bits MSB-first into a byte sink.
///
/// Complete bytes go to the inner writer as soon as they fill up.
///
/// # Invariants
/// - `bit_count` is always < 8
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
    /// Total bits accepted so far
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bit_buffer: 0,
            bit_count: 0,
            bits_written: 0,
        }
    }

    /// Pad the last partial byte with zeros, flush, and return the inner writer.
    pub fn finish(mut self) -> Result<W> {
        if self.bit_count > 0 {
            self.inner.write_all(&[self.bit_buffer])?;
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Total number of bits written (excluding padding).
    pub fn bit_len(&self) -> u64 {
        self.bits_written
    }
}

impl<W: Write> BitSink for BitWriter<W> {
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        if bit {
            self.bit_buffer |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;
        self.bits_written += 1;

        if self.bit_count == 8 {
            self.inner.write_all(&[self.bit_buffer])?;
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
        Ok(())
    }
}

/// Reads bits MSB-first from a byte source.
///
/// Pulls one byte at a time from the inner reader, so wrap files in a
/// `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    bytes: io::Bytes<R>,
    /// Byte currently being consumed
    current: u8,
    /// Unread bits left in `current` (0-8)
    remaining: u8,
    /// Total bits handed out so far
    bits_read: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            bytes: inner.bytes(),
            current: 0,
            remaining: 0,
            bits_read: 0,
        }
    }

    /// Number of bits read so far.
    pub fn position(&self) -> u64 {
        self.bits_read
    }
}

impl<R: Read> BitSource for BitReader<R> {
    fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.remaining == 0 {
            match self.bytes.next() {
                Some(byte) => {
                    self.current = byte?;
                    self.remaining = 8;
                }
                None => return Ok(None),
            }
        }

        self.remaining -= 1;
        self.bits_read += 1;
        Ok(Some((self.current >> self.remaining) & 1 == 1))
    }
}
