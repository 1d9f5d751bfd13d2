//! Metrics collection and reporting.
//!
//! Each compress and decompress call returns plain statistics about what it
//! did. [`Metrics`] gathers them for a timed run and reports:
//! - Sizes (input, header, payload, output)
//! - Compression ratio and bits per input byte
//! - Code shape (distinct symbols, longest code)
//! - Timing and throughput
//!
//! # Thread Safety
//!
//! `Metrics` is plain data updated explicitly by the caller; it is not
//! shared between threads.

use std::time::{Duration, Instant};

/// What a single compress call produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Raw bytes read from the input
    pub input_bytes: u64,

    /// Bytes of the textual frequency header
    pub header_bytes: u64,

    /// Code bits written, excluding padding
    pub payload_bits: u64,

    /// Distinct symbols including end-of-stream
    pub distinct_symbols: usize,

    /// Longest code in the table
    pub max_code_len: usize,
}

impl CompressionStats {
    /// Payload bytes after padding to a byte boundary.
    pub fn payload_bytes(&self) -> u64 {
        self.payload_bits.div_ceil(8)
    }

    /// Total artifact size.
    pub fn output_bytes(&self) -> u64 {
        self.header_bytes + self.payload_bytes()
    }

    /// Compute compression ratio (output / input).
    ///
    /// Returns 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes() as f64 / self.input_bytes as f64
        }
    }

    /// Average payload bits per input byte.
    pub fn bits_per_byte(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_bytes as f64
        }
    }
}

/// What a single decompress call consumed and produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecompressionStats {
    /// Bytes of the textual frequency header
    pub header_bytes: u64,

    /// Code bits consumed, up to and including the end-of-stream code
    pub payload_bits: u64,

    /// Bytes written to the output
    pub output_bytes: u64,
}

impl DecompressionStats {
    /// Artifact bytes consumed: the header plus the padded payload.
    ///
    /// Anything after the last payload byte was never read and is not counted.
    pub fn input_bytes(&self) -> u64 {
        self.header_bytes + self.payload_bits.div_ceil(8)
    }
}

/// Timed summary of a compress/decompress run.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Stages ===
    pub compression: Option<CompressionStats>,

    pub decompression: Option<DecompressionStats>,

    /// Whether decompressed output matched the input (demo runs only)
    pub verified: Option<bool>,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            compression: None,
            decompression: None,
            verified: None,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    pub fn record_compression(&mut self, stats: CompressionStats) {
        self.compression = Some(stats);
    }

    pub fn record_decompression(&mut self, stats: DecompressionStats) {
        self.decompression = Some(stats);
    }

    pub fn record_verification(&mut self, matched: bool) {
        self.verified = Some(matched);
    }

    /// Bytes processed by the run: raw input when compressing, restored
    /// output otherwise.
    pub fn processed_bytes(&self) -> u64 {
        match (&self.compression, &self.decompression) {
            (Some(c), _) => c.input_bytes,
            (None, Some(d)) => d.output_bytes,
            (None, None) => 0,
        }
    }

    /// Compute throughput in bytes/second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.processed_bytes() as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        if let Some(c) = &self.compression {
            println!("=== Compression ===");
            println!("Input:   {} bytes", c.input_bytes);
            println!("Header:  {} bytes", c.header_bytes);
            println!("Payload: {} bytes ({} bits)", c.payload_bytes(), c.payload_bits);
            println!("Output:  {} bytes", c.output_bytes());
            println!("Ratio: {:.1}%", c.ratio() * 100.0);
            println!("Bits per byte: {:.3}", c.bits_per_byte());
            println!("Symbols: {} (longest code {} bits)", c.distinct_symbols, c.max_code_len);
            println!();
        }

        if let Some(d) = &self.decompression {
            println!("=== Decompression ===");
            println!("Input:   {} bytes", d.input_bytes());
            println!("Header:  {} bytes", d.header_bytes);
            println!("Payload: {} bits read", d.payload_bits);
            println!("Output:  {} bytes", d.output_bytes);
            println!();
        }

        match self.verified {
            Some(true) => println!("Verification: PASSED ✓"),
            Some(false) => println!("Verification: FAILED ✗"),
            None => {}
        }

        println!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        let c = self.compression.unwrap_or_default();
        let d = self.decompression.unwrap_or_default();
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             header_bytes={}\n\
             payload_bits={}\n\
             compressed_bytes={}\n\
             compression_ratio={:.4}\n\
             distinct_symbols={}\n\
             max_code_len={}\n\
             artifact_bytes_read={}\n\
             decompressed_bytes={}\n\
             verified={}\n",
            self.duration().as_millis(),
            c.input_bytes,
            c.header_bytes,
            c.payload_bits,
            c.output_bytes(),
            c.ratio(),
            c.distinct_symbols,
            c.max_code_len,
            d.input_bytes(),
            d.output_bytes,
            self.verified.map_or("n/a", |v| if v { "true" } else { "false" }),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
