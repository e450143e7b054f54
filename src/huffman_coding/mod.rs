//! The huffman module builds the prefix code for a text and moves the code tree in and out of
//! the container header.
//!
//! - priority_queue: Min-heap that hands out the two lightest subtrees.
//! - tree: Arena-backed Huffman tree and its builder.
//! - dictionary: Symbol to code lookup produced by walking the tree.
//! - tree_codec: Pre-order tree serialization and its inverse.
//!
//! Ties between equal weights are broken by queue order (leaves enter in code point order), so
//! a given text always produces the same tree and the same bits.
//!

pub mod dictionary;
pub mod priority_queue;
pub mod tree;
pub mod tree_codec;
