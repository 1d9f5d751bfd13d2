//! Huffman code tree and the greedy merge that builds it.
//!
//! # Tie-break
//!
//! Nodes are merged lowest count first. When counts are equal the node with
//! the smaller representative symbol (the minimum symbol among its leaves)
//! goes first. Representative symbols of disjoint subtrees never collide, so
//! this is a total order and the resulting tree depends only on the table
//! contents, never on map iteration order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::{HuffmanError, Result};
use crate::frequency::SymbolFrequencyTable;
use crate::symbol::Symbol;

/// A node of the code tree. Left is bit `0`, right is bit `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        count: u64,
    },
    Internal {
        count: u64,
        /// Smallest symbol among this subtree's leaves
        min_symbol: Symbol,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: Symbol, count: u64) -> Self {
        Node::Leaf { symbol, count }
    }

    /// Combine two nodes. `left` is the one popped first.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            count: left.count() + right.count(),
            min_symbol: left.min_symbol().min(right.min_symbol()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            Node::Leaf { count, .. } | Node::Internal { count, .. } => *count,
        }
    }

    /// Representative symbol used for tie-breaking.
    pub fn min_symbol(&self) -> Symbol {
        match self {
            Node::Leaf { symbol, .. } => *symbol,
            Node::Internal { min_symbol, .. } => *min_symbol,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn collect_frequencies(&self, table: &mut SymbolFrequencyTable) {
        match self {
            Node::Leaf { symbol, count } => {
                table.insert(*symbol, *count);
            }
            Node::Internal { left, right, .. } => {
                left.collect_frequencies(table);
                right.collect_frequencies(table);
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf { symbol, count } => {
                writeln!(f, "{}{}-> {} [count: {}]", indent, label, symbol, count)
            }
            Node::Internal {
                count, left, right, ..
            } => {
                writeln!(f, "{}{}-> * [count: {}]", indent, label, count)?;
                left.fmt_indented(f, depth + 1, "0")?;
                right.fmt_indented(f, depth + 1, "1")
            }
        }
    }
}

/// Heap entry ordering nodes by `(count, min_symbol)`.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed.
#[derive(Debug)]
struct Pending(Node);

impl Pending {
    fn key(&self) -> (u64, Symbol) {
        (self.0.count(), self.0.min_symbol())
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// A Huffman code tree. Built fresh for every compress or decompress call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
}

impl CodeTree {
    /// Build the tree by greedy minimum-count merging.
    ///
    /// # Errors
    /// - `HuffmanError::EmptyFrequencyTable` if the table has no entries
    /// - `HuffmanError::MissingEndOfStream` if the table lacks the sentinel
    pub fn build(table: &SymbolFrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffmanError::EmptyFrequencyTable.into());
        }
        if !table.contains(Symbol::EndOfStream) {
            return Err(HuffmanError::MissingEndOfStream.into());
        }

        let mut heap: BinaryHeap<Pending> = table
            .iter()
            .map(|(symbol, count)| Pending(Node::leaf(symbol, count)))
            .collect();

        while heap.len() > 1 {
            let (Some(Pending(left)), Some(Pending(right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Pending(Node::merge(left, right)));
        }

        let Pending(root) = heap.pop().ok_or(HuffmanError::EmptyFrequencyTable)?;
        let tree = CodeTree { root };

        log::debug!(
            "built code tree: {} leaves, height {}, total count {}",
            tree.leaf_count(),
            tree.height(),
            tree.root.count()
        );

        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves, i.e. distinct symbols including end-of-stream.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Longest root-to-leaf path. Zero for the single-leaf tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Recover the frequency table from the leaves.
    pub fn frequencies(&self) -> SymbolFrequencyTable {
        let mut table = SymbolFrequencyTable::new();
        self.root.collect_frequencies(&mut table);
        table
    }

    /// True when the root is the only leaf (empty input).
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }
}

impl fmt::Display for CodeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_indented(f, 0, "root")
    }
}
