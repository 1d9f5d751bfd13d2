//! Integration tests for the full huffpack pipeline.
//!
//! These tests verify end-to-end behavior: input -> frequency table -> tree ->
//! codes -> artifact -> decoded output, with verification that output matches
//! input.

use huffpack_core::{
    compress, compress_bytes, decompress, decompress_bytes, CodeTable, CodeTree, Error,
    HeaderError, HuffmanError, Node, Symbol, SymbolFrequencyTable,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_inputs(seed: u64, count: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..2048);
            // Vary the alphabet size so trees of many shapes appear
            let alphabet: u16 = rng.gen_range(1..=256);
            (0..len).map(|_| rng.gen_range(0..alphabet) as u8).collect()
        })
        .collect()
}

fn check_shape(node: &Node) -> usize {
    match node {
        Node::Leaf { count, .. } => {
            assert!(*count >= 1);
            1
        }
        Node::Internal {
            count, left, right, ..
        } => {
            assert_eq!(*count, left.count() + right.count());
            check_shape(left) + check_shape(right)
        }
    }
}

/// Scenario: "aaab" merges b and EOF first and round-trips.
#[test]
fn test_aaab() {
    let table = SymbolFrequencyTable::from_bytes(b"aaab");
    assert_eq!(table.get(Symbol::Byte(b'a')), Some(3));
    assert_eq!(table.get(Symbol::Byte(b'b')), Some(1));
    assert_eq!(table.get(Symbol::EndOfStream), Some(1));

    let tree = CodeTree::build(&table).expect("tree build failed");
    let codes = CodeTable::from_tree(&tree);
    assert!(codes.is_prefix_free());

    // b and EOF are siblings
    let b = codes.get(Symbol::Byte(b'b')).unwrap();
    let eof = codes.get(Symbol::EndOfStream).unwrap();
    assert_eq!(b.len(), eof.len());
    assert_eq!(&b.bits()[..b.len() - 1], &eof.bits()[..eof.len() - 1]);

    let artifact = compress_bytes(b"aaab").expect("compression failed");
    assert_eq!(decompress_bytes(&artifact).expect("decompression failed"), b"aaab");
}

/// Scenario: empty input is a header-only artifact.
#[test]
fn test_empty_input() {
    let artifact = compress_bytes(b"").unwrap();
    assert_eq!(artifact, b"{256:1}");
    assert_eq!(decompress_bytes(&artifact).unwrap(), Vec::<u8>::new());
}

/// Scenario: a single repeated byte gives two one-bit codes.
#[test]
fn test_single_repeated_byte() {
    let table = SymbolFrequencyTable::from_bytes(b"zzzz");
    let tree = CodeTree::build(&table).unwrap();
    assert_eq!(tree.leaf_count(), 2);

    let codes = CodeTable::from_tree(&tree);
    assert_eq!(codes.get(Symbol::Byte(b'z')).unwrap().len(), 1);
    assert_eq!(codes.get(Symbol::EndOfStream).unwrap().len(), 1);

    let artifact = compress_bytes(b"zzzz").unwrap();
    assert_eq!(decompress_bytes(&artifact).unwrap(), b"zzzz");
}

/// Scenario: truncated payload fails without partial output.
#[test]
fn test_truncated_stream() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    let artifact = compress_bytes(&input).unwrap();
    let truncated = &artifact[..artifact.len() - 2];

    let mut output = Vec::new();
    let result = decompress(truncated, &mut output);
    assert!(matches!(
        result,
        Err(Error::Huffman(HuffmanError::TruncatedStream { .. }))
    ));
    assert!(output.is_empty(), "partial output leaked: {} bytes", output.len());
}

/// Scenario: duplicate header symbol is rejected.
#[test]
fn test_duplicate_header_symbol() {
    let mut artifact = b"{97:3, 98:1, 97:1, 256:1}".to_vec();
    artifact.push(0b1110_0010);

    let result = decompress_bytes(&artifact);
    assert!(matches!(
        result,
        Err(Error::MalformedHeader(HeaderError::DuplicateSymbol { .. }))
    ));
}

/// Header that is not a frequency table at all.
#[test]
fn test_garbage_header() {
    let result = decompress_bytes(b"\x00\x01\x02");
    assert!(matches!(result, Err(Error::MalformedHeader(_))));
}

/// Round-trip over seeded random inputs of varied alphabet size.
#[test]
fn test_random_round_trip() {
    for input in random_inputs(42, 64) {
        let artifact = compress_bytes(&input).expect("compression failed");
        let decoded = decompress_bytes(&artifact).expect("decompression failed");
        assert_eq!(decoded, input);
    }
}

/// Compressing twice gives byte-identical artifacts.
#[test]
fn test_determinism() {
    for input in random_inputs(7, 16) {
        assert_eq!(compress_bytes(&input).unwrap(), compress_bytes(&input).unwrap());
    }
}

/// Codes are prefix-free, the table counts input + EOF, and the tree sums up.
#[test]
fn test_structural_properties() {
    for input in random_inputs(99, 32) {
        let table = SymbolFrequencyTable::from_bytes(&input);
        assert_eq!(table.total(), input.len() as u64 + 1);

        let tree = CodeTree::build(&table).unwrap();
        assert_eq!(check_shape(tree.root()), table.len());

        let codes = CodeTable::from_tree(&tree);
        assert!(codes.is_prefix_free());
        assert_eq!(codes.len(), table.len());
    }
}

/// All 256 byte values present.
#[test]
fn test_all_symbols() {
    let input: Vec<u8> = (0..=255).collect();
    let artifact = compress_bytes(&input).unwrap();
    assert_eq!(decompress_bytes(&artifact).unwrap(), input);
}

/// Larger skewed input compresses below its raw size.
#[test]
fn test_large_skewed_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let input: Vec<u8> = (0..128 * 1024)
        .map(|_| if rng.gen_bool(0.9) { b'X' } else { rng.gen() })
        .collect();

    let mut artifact = Vec::new();
    let stats = compress(input.as_slice(), &mut artifact).unwrap();
    assert_eq!(stats.output_bytes(), artifact.len() as u64);
    assert!(artifact.len() < input.len() / 2);

    assert_eq!(decompress_bytes(&artifact).unwrap(), input);
}

/// Bytes after the padded payload are never read.
#[test]
fn test_trailing_bytes_ignored() {
    let mut artifact = compress_bytes(b"hello").unwrap();
    artifact.extend_from_slice(b"trailing junk");
    assert_eq!(decompress_bytes(&artifact).unwrap(), b"hello");
}
