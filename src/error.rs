//! Error type shared by every stage of the codec.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a container.
#[derive(Debug, Error)]
pub enum CodecError {
    /// File open/read/write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// U+0000 and U+0001 collide with the tree stream's terminator and internal-node marker.
    #[error("symbol {0:?} is reserved by the container format")]
    ReservedSymbol(char),

    /// The file handed to compress is not UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    InputNotUtf8,

    /// The tree stream ran out before its 0x00 terminator.
    #[error("tree stream ended before its terminator")]
    TruncatedTree,

    /// A leaf token is not a well formed UTF-8 scalar value.
    #[error("invalid UTF-8 leaf token at byte {offset}")]
    InvalidLeaf { offset: usize },

    /// An internal marker has fewer tokens after it than its subtrees need.
    #[error("internal node at token {token} is missing a child")]
    MissingChild { token: usize },

    /// Tokens left over once the root is complete.
    #[error("tree stream holds {0} token(s) past the root")]
    TrailingTreeTokens(usize),

    /// The symbol count is cut short or overflows 64 bits.
    #[error("malformed symbol count")]
    MalformedVarint,

    /// A non-zero symbol count with nothing to decode it against.
    #[error("container declares {0} symbols but carries an empty tree")]
    EmptyTree(u64),

    /// The declared symbol count is more text than this host can hold.
    #[error("declared count of {0} symbols does not fit in memory")]
    CountTooLarge(u64),

    /// The payload ran out of bits before the declared symbol count was reached.
    #[error("payload ended after {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: u64, expected: u64 },

    /// A symbol the code dictionary has no entry for.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// The leaf sits deeper than a 64-bit sentinel code can describe.
    #[error("code for symbol {0:?} exceeds 63 bits")]
    CodeTooLong(char),

    /// Decompress was pointed at a file without the container extension.
    #[error("{0} does not carry the .huff extension")]
    BadExtension(String),
}
