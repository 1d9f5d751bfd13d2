//! Code table derivation from a [`CodeTree`].

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{HuffmanError, Result};
use crate::frequency::SymbolFrequencyTable;
use crate::symbol::Symbol;
use crate::tree::{CodeTree, Node};

/// The bit path from the root to a leaf. `false` is `0` (left), `true` is `1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other` (including equality).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code { bits }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its code. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    /// Walk the tree depth-first, recording each leaf's path.
    ///
    /// The single-leaf tree maps its symbol to the empty code.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = Vec::with_capacity(tree.height());
        collect_codes(tree.root(), &mut path, &mut codes);

        for (symbol, code) in &codes {
            log::trace!("code {} = {}", symbol, code);
        }

        CodeTable { codes }
    }

    /// Look up the code for `symbol`.
    ///
    /// # Errors
    /// `HuffmanError::KeyNotFound` if the symbol has no leaf in the tree.
    pub fn get(&self, symbol: Symbol) -> Result<&Code> {
        self.codes
            .get(&symbol)
            .ok_or_else(|| HuffmanError::KeyNotFound { symbol }.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// No code is a prefix of a different symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Payload size in bits for a table's worth of symbols (sum of count × code length).
    pub fn encoded_bit_len(&self, frequencies: &SymbolFrequencyTable) -> Result<u64> {
        frequencies.iter().try_fold(0u64, |acc, (symbol, count)| -> Result<u64> {
            Ok(acc + count * self.get(symbol)?.len() as u64)
        })
    }
}

fn collect_codes(node: &Node, path: &mut Vec<bool>, codes: &mut BTreeMap<Symbol, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, Code::from(path.clone()));
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();

            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(data: &[u8]) -> CodeTable {
        let freqs = SymbolFrequencyTable::from_bytes(data);
        CodeTable::from_tree(&CodeTree::build(&freqs).unwrap())
    }

    #[test]
    fn test_aaab_codes() {
        let table = table_for(b"aaab");
        assert_eq!(table.get(Symbol::Byte(b'a')).unwrap().to_string(), "1");
        assert_eq!(table.get(Symbol::Byte(b'b')).unwrap().to_string(), "00");
        assert_eq!(table.get(Symbol::EndOfStream).unwrap().to_string(), "01");
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_single_repeated_byte_gets_one_bit() {
        let table = table_for(b"zzzz");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(Symbol::Byte(b'z')).unwrap().len(), 1);
        assert_eq!(table.get(Symbol::EndOfStream).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_input_has_empty_code() {
        let table = table_for(b"");
        assert_eq!(table.len(), 1);
        assert!(table.get(Symbol::EndOfStream).unwrap().is_empty());
        assert_eq!(table.max_code_len(), 0);
    }

    #[test]
    fn test_missing_symbol() {
        let table = table_for(b"abc");
        let result = table.get(Symbol::Byte(b'x'));
        assert!(matches!(
            result,
            Err(crate::error::Error::Huffman(HuffmanError::KeyNotFound {
                symbol: Symbol::Byte(b'x')
            }))
        ));
    }

    #[test]
    fn test_full_alphabet_prefix_free() {
        let data: Vec<u8> = (0..=255u8).flat_map(|b| vec![b; (b as usize % 7) + 1]).collect();
        let table = table_for(&data);
        assert_eq!(table.len(), 257);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_encoded_bit_len() {
        let freqs = SymbolFrequencyTable::from_bytes(b"aaab");
        let table = CodeTable::from_tree(&CodeTree::build(&freqs).unwrap());
        // a:3×1 + b:1×2 + EOF:1×2
        assert_eq!(table.encoded_bit_len(&freqs).unwrap(), 7);
    }

    #[test]
    fn test_prefix_relation() {
        let short = Code::from(vec![true, false]);
        let long = Code::from(vec![true, false, true]);
        assert!(short.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
    }
}
