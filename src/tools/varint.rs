//! Unsigned LEB128 varints: seven bits per byte, least significant group first,
//! high bit set on every byte except the last.

use crate::error::CodecError;
use crate::tools::byte_source::ByteSource;

/// The longest encoding a u64 can need.
pub const MAX_VARINT_LEN: usize = 10;

/// Append the varint encoding of value to out.
pub fn write_uvarint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push(value as u8 | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Read one varint. Fails if the source ends mid-value or the value overflows a u64.
pub fn read_uvarint(src: &mut ByteSource<'_>) -> Result<u64, CodecError> {
    let mut value = 0_u64;
    let mut shift = 0_u32;
    for i in 0..MAX_VARINT_LEN {
        let byte = src.read_byte().ok_or(CodecError::MalformedVarint)?;
        if byte < 0x80 {
            // The tenth byte may only contribute the top bit of the u64
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                return Err(CodecError::MalformedVarint);
            }
            return Ok(value | ((byte as u64) << shift));
        }
        value |= ((byte & 0x7f) as u64) << shift;
        shift += 7;
    }
    Err(CodecError::MalformedVarint)
}
