//! The tools module provides the helper functions around the Huffman core.
//!
//! The tools are:
//! - byte_source: Byte and UTF-8 scalar reader over an in-memory container.
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the symbols in a text.
//! - varint: Unsigned LEB128 integers, used for the symbol count in the header.
//!
pub mod byte_source;
pub mod cli;
pub mod freq_count;
pub mod varint;
