//! Symbol frequency counting.

use std::collections::BTreeMap;

use crate::symbol::Symbol;

/// Mapping from symbol to occurrence count.
///
/// Backed by a `BTreeMap` so key enumeration is always ascending by symbol.
/// Tables built from input always contain `EndOfStream → 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolFrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl SymbolFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte of `data`, then add one end-of-stream occurrence.
    ///
    /// Empty input yields `{EndOfStream: 1}`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.record(Symbol::Byte(byte));
        }
        table.record(Symbol::EndOfStream);
        table
    }

    /// Increment the count for `symbol`, starting at 1.
    pub fn record(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Set the count for `symbol`, returning the previous one if present.
    pub fn insert(&mut self, symbol: Symbol, count: u64) -> Option<u64> {
        self.counts.insert(symbol, count)
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Symbols in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.counts.keys().copied()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts. Equals input length + 1 for tables built from input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
