//! Configuration for the huffpack command-line tool.
//!
//! Parses command-line arguments with clap and resolves defaults: output
//! paths follow the `.huf` / `_unc` naming convention, and the demo seed
//! falls back to the current time. Resolved values can be printed so runs are
//! reproducible.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use huffpack_core::files::{compressed_path, decompressed_path};

/// Default size of generated demo input.
pub const DEFAULT_SAMPLE_BYTES: usize = 64 * 1024;

/// Byte-oriented Huffman compressor.
#[derive(Debug, Parser)]
#[command(name = "huffpack", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print resolved configuration
    #[arg(long, global = true)]
    pub print_config: bool,

    /// Don't print metrics summary
    #[arg(long, global = true)]
    pub no_metrics: bool,

    /// Print metrics as key=value lines instead of the summary
    #[arg(long, global = true, conflicts_with = "no_metrics")]
    pub metrics_text: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress a file (default output: <INPUT>.huf)
    Compress {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decompress a .huf file (default output: <STEM>_unc.<EXT>)
    Decompress {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the frequency table, codes and tree for a raw file
    Inspect {
        input: PathBuf,
        /// Also print the full encoded bitstream
        #[arg(long)]
        bits: bool,
    },

    /// Round-trip generated sample data in memory
    Demo {
        /// Random seed for determinism
        #[arg(long)]
        seed: Option<u64>,
        /// Sample size in bytes
        #[arg(long, default_value_t = DEFAULT_SAMPLE_BYTES)]
        size: usize,
    },
}

/// What to run, with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Compress { input: PathBuf, output: PathBuf },
    Decompress { input: PathBuf, output: PathBuf },
    Inspect { input: PathBuf, show_bits: bool },
    Demo { seed: u64, size: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,

    /// Machine-readable metrics instead of the summary
    pub metrics_text: bool,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    pub fn from_cli(cli: Cli) -> Self {
        let mode = match cli.command {
            Command::Compress { input, output } => {
                let output = output.unwrap_or_else(|| compressed_path(&input));
                Mode::Compress { input, output }
            }
            Command::Decompress { input, output } => {
                let output = output.unwrap_or_else(|| decompressed_path(&input));
                Mode::Decompress { input, output }
            }
            Command::Inspect { input, bits } => Mode::Inspect {
                input,
                show_bits: bits,
            },
            Command::Demo { seed, size } => Mode::Demo {
                seed: seed.unwrap_or_else(time_seed),
                size,
            },
        };

        Config {
            mode,
            print_config: cli.print_config,
            print_metrics: !cli.no_metrics,
            metrics_text: cli.metrics_text,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.mode {
            Mode::Compress { input, output } => {
                println!("Mode: compress");
                println!("Input file:  {}", input.display());
                println!("Output file: {}", output.display());
            }
            Mode::Decompress { input, output } => {
                println!("Mode: decompress");
                println!("Input file:  {}", input.display());
                println!("Output file: {}", output.display());
            }
            Mode::Inspect { input, show_bits } => {
                println!("Mode: inspect");
                println!("Input file: {}", input.display());
                println!("Show bits: {}", show_bits);
            }
            Mode::Demo { seed, size } => {
                println!("Mode: demo");
                println!("Seed: {}", seed);
                println!("Sample size: {} bytes ({} KiB)", size, size / 1024);
            }
        }
        println!("Print metrics: {}", self.print_metrics);
        println!("Metrics as text: {}", self.metrics_text);
        println!();
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
