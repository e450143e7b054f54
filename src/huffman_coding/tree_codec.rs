//! Compact tree serialization. The tree is written in pre-order; a leaf is the UTF-8 encoding
//! of its symbol and an internal node is the single byte 0x01. The stream ends with 0x00.
//! Weights are not written; the decoder only needs the shape.
//!
//! Because 0x00 and 0x01 are control bytes, U+0000 and U+0001 cannot be leaves.

use std::io::Write;

use log::{debug, trace};

use super::tree::{HuffTree, Node, NodeId};
use crate::error::CodecError;
use crate::tools::byte_source::ByteSource;

/// Marks the end of the tree stream.
pub const TREE_END: u8 = 0x00;
/// Marks an internal node.
pub const INTERNAL_NODE: u8 = 0x01;

/// True for symbols the tree stream cannot carry.
pub fn is_reserved(symbol: char) -> bool {
    (symbol as u32) <= INTERNAL_NODE as u32
}

/// Write the tree tokens in pre-order. The caller appends TREE_END.
pub fn serialize_tree<W: Write>(tree: &HuffTree, w: &mut W) -> Result<(), CodecError> {
    let mut utf8 = [0_u8; 4];
    for node in tree.preorder() {
        match node {
            Node::Leaf { symbol, .. } => {
                if is_reserved(*symbol) {
                    return Err(CodecError::ReservedSymbol(*symbol));
                }
                w.write_all(symbol.encode_utf8(&mut utf8).as_bytes())?;
            }
            Node::Internal { .. } => w.write_all(&[INTERNAL_NODE])?,
        }
    }
    Ok(())
}

/// One entry of the tree stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Internal,
    Leaf(char),
}

/// Read tokens up to and including TREE_END.
fn read_tokens(src: &mut ByteSource<'_>) -> Result<Vec<Token>, CodecError> {
    let mut tokens = Vec::new();
    loop {
        match src.read_byte().ok_or(CodecError::TruncatedTree)? {
            TREE_END => break,
            INTERNAL_NODE => tokens.push(Token::Internal),
            _ => {
                src.unread_byte();
                tokens.push(Token::Leaf(src.read_char()?));
            }
        }
    }
    trace!("Read {} tree tokens, stream ends at byte {}", tokens.len(), src.loc());
    Ok(tokens)
}

/// Read a tree stream (including its terminator) and rebuild the tree.
///
/// Pre-order needs no child counts: each internal marker takes the next complete subtree as
/// its left child and the one after that as its right. Pending internal nodes are kept on an
/// explicit stack. A stream with no tokens gives the empty tree.
pub fn deserialize_tree(src: &mut ByteSource<'_>) -> Result<HuffTree, CodecError> {
    let tokens = read_tokens(src)?;

    let mut nodes: Vec<Node> = Vec::with_capacity(tokens.len());
    // Internal nodes still waiting for children, with their left child once it is known.
    let mut pending: Vec<(NodeId, Option<NodeId>)> = Vec::new();
    let mut root = None;

    for (id, token) in tokens.iter().enumerate() {
        if root.is_some() && pending.is_empty() {
            return Err(CodecError::TrailingTreeTokens(tokens.len() - id));
        }
        nodes.push(match *token {
            Token::Leaf(symbol) => Node::Leaf { symbol, weight: 0 },
            Token::Internal => Node::Internal {
                left: id,
                right: id,
                weight: 0,
            },
        });

        match pending.last_mut() {
            None => root = Some(id),
            Some((_, left @ None)) => *left = Some(id),
            Some((parent, Some(left))) => {
                let (parent, left) = (*parent, *left);
                nodes[parent] = Node::Internal {
                    left,
                    right: id,
                    weight: 0,
                };
                pending.pop();
            }
        }

        if *token == Token::Internal {
            pending.push((id, None));
        }
    }

    if let Some((token, _)) = pending.last() {
        return Err(CodecError::MissingChild { token: *token });
    }

    debug!("Rebuilt tree from {} tokens", nodes.len());
    Ok(HuffTree::from_parts(nodes, root))
}
