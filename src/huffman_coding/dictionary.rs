//! Symbol to code lookup built by walking the Huffman tree.
//!
//! A code is kept as a u64 whose bit `depth` is a sentinel: the path bits sit below it, root
//! branch in bit 0, and the sentinel preserves any leading zero branches so the length can be
//! read back from the word itself. The sentinel never reaches the bitstream.

use log::trace;
use rustc_hash::FxHashMap;

use super::tree::{HuffTree, Node, NodeId};
use crate::error::CodecError;

/// Deepest leaf a sentinel-marked u64 can describe.
pub const MAX_CODE_LEN: u32 = 63;

/// A sentinel-marked prefix code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(u64);

impl Code {
    /// Wrap a raw sentinel-marked word. Zero has no sentinel and is not a code.
    pub fn from_raw(raw: u64) -> Option<Self> {
        (raw != 0).then(|| Code(raw))
    }

    /// The code word including the sentinel bit.
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Number of path bits, which is the leaf's depth.
    pub fn len(self) -> u32 {
        63 - self.0.leading_zeros()
    }

    /// True for the code of a lone-leaf tree, which has no path bits at all.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The path bits with the sentinel stripped. Bit 0 is the branch taken at the root.
    pub fn bits(self) -> u64 {
        self.0 & !(1 << self.len())
    }

    /// Path bits in the order they are walked from the root; false is left, true is right.
    pub fn branches(self) -> impl Iterator<Item = bool> {
        (0..self.len()).map(move |i| self.0 >> i & 1 == 1)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.branches()
            .try_for_each(|b| f.write_str(if b { "1" } else { "0" }))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeDictionary {
    codes: FxHashMap<char, Code>,
}

impl CodeDictionary {
    /// Walk the tree depth first, going left with a 0 and right with a 1, and record a code for
    /// every leaf. A lone-leaf tree gives that leaf the zero-length code.
    pub fn from_tree(tree: &HuffTree) -> Result<Self, CodecError> {
        let mut codes = FxHashMap::default();
        // (node, depth, path bits so far)
        let mut stack: Vec<(NodeId, u32, u64)> =
            tree.root().into_iter().map(|r| (r, 0, 0)).collect();

        while let Some((id, depth, state)) = stack.pop() {
            match *tree.node(id) {
                Node::Leaf { symbol, .. } => {
                    if depth > MAX_CODE_LEN {
                        return Err(CodecError::CodeTooLong(symbol));
                    }
                    let code = Code(state | 1 << depth);
                    trace!("Code for {:?} is {} ({} bits)", symbol, code, depth);
                    codes.insert(symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    let right_state = if depth < MAX_CODE_LEN {
                        state | 1 << depth
                    } else {
                        state
                    };
                    stack.push((right, depth + 1, right_state));
                    stack.push((left, depth + 1, state));
                }
            }
        }
        Ok(Self { codes })
    }

    pub fn get(&self, symbol: char) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Code)> + '_ {
        self.codes.iter().map(|(&s, &c)| (s, c))
    }
}
