//! Huffman coding for UTF-8 text.
//!
//! Version 0.1.0
//!
//! Compresses a text one Unicode code point at a time. The Huffman tree travels in the file
//! header in a compact pre-order form, so no frequency table is stored, followed by the symbol
//! count and the packed codes.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffrune compress test.txt`
//!
//! This will create the file test.txt.huff. `huffrune decompress test.txt.huff` restores test.txt.
//!
//! The code points U+0000 and U+0001 double as control bytes in the tree stream and cannot be
//! compressed; encoding refuses them with [`CodecError::ReservedSymbol`].
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, encode};
pub use compression::decompress::{decode, decompress};
pub use error::CodecError;
