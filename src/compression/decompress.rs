use std::fs;

use log::{debug, info, warn};

use super::compress::write_output;
use super::decompressed_path;
use crate::bitstream::bitreader::BitReader;
use crate::error::CodecError;
use crate::huffman_coding::tree::{HuffTree, Node};
use crate::huffman_coding::tree_codec::deserialize_tree;
use crate::tools::byte_source::ByteSource;
use crate::tools::cli::HuffOpts;
use crate::tools::varint::read_uvarint;

/// Decode a complete container back into its text.
pub fn decode(data: &[u8]) -> Result<String, CodecError> {
    let mut src = ByteSource::new(data);

    // Header
    let tree = deserialize_tree(&mut src)?;
    let total = read_uvarint(&mut src)?;
    debug!(
        "Header is {} bytes: {} leaves, {} symbols to decode.",
        src.loc(),
        tree.leaf_count(),
        total
    );

    // Body
    unpack_payload(&tree, total, src.remaining())
}

/// Walk the tree with the payload bits until total symbols have come out. 0 goes left, 1 goes
/// right, and each leaf reached emits its symbol and sends the walk back to the root. Bits
/// left over in the last byte are ignored.
pub fn unpack_payload(tree: &HuffTree, total: u64, payload: &[u8]) -> Result<String, CodecError> {
    if total == 0 {
        return Ok(String::new());
    }
    let expected = usize::try_from(total).map_err(|_| CodecError::CountTooLarge(total))?;
    let root = tree.root().ok_or(CodecError::EmptyTree(total))?;

    // A lone leaf has no branches to take, so there are no payload bits to read
    if let Node::Leaf { symbol, .. } = *tree.node(root) {
        if !payload.is_empty() {
            warn!("Ignoring {} payload bytes after a single-symbol tree.", payload.len());
        }
        // Nothing in the payload bounds the count here, so a failed reservation is an error
        let size = expected
            .checked_mul(symbol.len_utf8())
            .ok_or(CodecError::CountTooLarge(total))?;
        let mut text = String::new();
        text.try_reserve_exact(size)
            .map_err(|_| CodecError::CountTooLarge(total))?;
        text.extend(std::iter::repeat(symbol).take(expected));
        return Ok(text);
    }

    // Every symbol needs at least one bit, which bounds what a bad header can make us reserve
    let mut text = String::with_capacity(expected.min(payload.len() * 8));
    let mut br = BitReader::new(payload);
    let mut decoded = 0_u64;
    let mut cursor = root;
    while decoded < total {
        let (left, right) = match *tree.node(cursor) {
            Node::Internal { left, right, .. } => (left, right),
            Node::Leaf { .. } => return Err(CodecError::MissingChild { token: cursor }),
        };
        let bit = br
            .bool_bit()
            .ok_or(CodecError::TruncatedPayload { decoded, expected: total })?;
        cursor = if bit { right } else { left };
        if let Node::Leaf { symbol, .. } = *tree.node(cursor) {
            text.push(symbol);
            decoded += 1;
            cursor = root;
        }
    }

    if br.bytes_left() > 0 {
        warn!("Ignoring {} bytes after the last symbol.", br.bytes_left());
    }
    debug!("Decoded {} symbols from {} payload bits.", decoded, br.bits_read());
    Ok(text)
}

/// Decompress the .huff file specified in opts (HuffOpts) to its name without the extension.
pub fn decompress(opts: &HuffOpts) -> Result<(), CodecError> {
    // Check the name first so a bad request never touches the disk
    let fname = decompressed_path(&opts.file)?;

    let data = fs::read(&opts.file)?;
    info!("Read {} bytes from {}.", data.len(), opts.file.display());

    let text = decode(&data)?;

    write_output(&fname, text.as_bytes())?;
    info!("Wrote {} bytes to {}.", text.len(), fname.display());
    Ok(())
}
