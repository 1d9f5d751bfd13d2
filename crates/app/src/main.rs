//! huffpack: compress, decompress and inspect files with Huffman coding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use huffpack_core::codec::encode_to_bit_string;
use huffpack_core::container::serialize_header;
use huffpack_core::files::{compress_file, decompress_file};
use huffpack_core::metrics::Metrics;
use huffpack_core::{compress_bytes, decompress, CodeTable, CodeTree, SymbolFrequencyTable};

mod config;
mod input_gen;

use config::{Cli, Config, Mode};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_cli(Cli::parse());
    if config.print_config {
        config.print();
    }

    let mut metrics = Metrics::new();

    match &config.mode {
        Mode::Compress { input, output } => {
            let (path, stats) = compress_file(input, Some(output.as_path()))
                .with_context(|| format!("compressing {}", input.display()))?;
            metrics.record_compression(stats);
            println!("Wrote {}", path.display());
        }
        Mode::Decompress { input, output } => {
            let (path, stats) = decompress_file(input, Some(output.as_path()))
                .with_context(|| format!("decompressing {}", input.display()))?;
            metrics.record_decompression(stats);
            println!("Wrote {}", path.display());
        }
        Mode::Inspect { input, show_bits } => {
            inspect(input, *show_bits)?;
            return Ok(());
        }
        Mode::Demo { seed, size } => {
            run_demo(*seed, *size, &mut metrics)?;
        }
    }

    metrics.complete();
    if config.metrics_text {
        print!("{}", metrics.export_text());
    } else if config.print_metrics {
        metrics.print_summary();
    }

    if metrics.verified == Some(false) {
        bail!("demo round-trip produced different output");
    }
    Ok(())
}

/// Print the frequency table, codes and tree that compressing `path` would use.
fn inspect(path: &Path, show_bits: bool) -> anyhow::Result<()> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let frequencies = SymbolFrequencyTable::from_bytes(&data);
    let tree = CodeTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);

    println!("=== Frequencies ===");
    println!("{}", String::from_utf8_lossy(&serialize_header(&frequencies)));
    println!();

    println!("=== Codes ===");
    println!("{:>8} {:>10}  code", "symbol", "count");
    for (symbol, code) in codes.iter() {
        let count = frequencies.get(symbol).unwrap_or_default();
        println!("{:>8} {:>10}  {}", symbol.to_string(), count, code);
    }
    println!();

    println!("=== Tree (height {}) ===", tree.height());
    print!("{}", tree);
    println!();

    let payload_bits = codes.encoded_bit_len(&frequencies)?;
    println!(
        "Payload: {} bits for {} bytes ({:.3} bits/byte)",
        payload_bits,
        data.len(),
        if data.is_empty() {
            0.0
        } else {
            payload_bits as f64 / data.len() as f64
        }
    );

    if show_bits {
        println!();
        println!("{}", encode_to_bit_string(&data, &codes)?);
    }
    Ok(())
}

/// Generate sample data, round-trip it in memory and record the results.
fn run_demo(seed: u64, size: usize, metrics: &mut Metrics) -> anyhow::Result<()> {
    let data = input_gen::generate_sample_data(seed, size);
    log::info!("generated {} bytes of sample data with seed {}", data.len(), seed);

    let mut artifact = Vec::new();
    let stats = huffpack_core::compress(data.as_slice(), &mut artifact)
        .context("compressing sample data")?;
    metrics.record_compression(stats);

    let mut restored = Vec::new();
    let back = decompress(artifact.as_slice(), &mut restored).context("decompressing sample data")?;
    metrics.record_decompression(back);

    let matched = restored == data && artifact == compress_bytes(&data)?;
    metrics.record_verification(matched);
    Ok(())
}
