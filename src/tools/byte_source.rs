//! Cursor over an in-memory container. Hands out single bytes (with one byte of push-back)
//! and whole UTF-8 scalar values, which is all the tree stream and header need.

use crate::error::CodecError;

#[derive(Debug)]
pub struct ByteSource<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> ByteSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Return the next byte, or None if there is no more data to read.
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.cursor)?;
        self.cursor += 1;
        Some(byte)
    }

    /// Step back over the byte just read. Does nothing at the start of the data.
    pub fn unread_byte(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Read one complete UTF-8 scalar value. A sequence cut short by the end of the data
    /// reports a truncated tree; anything else that is not valid UTF-8 reports an invalid leaf.
    pub fn read_char(&mut self) -> Result<char, CodecError> {
        let start = self.cursor;
        let first = *self.data.get(start).ok_or(CodecError::TruncatedTree)?;
        let width = match first {
            0x00..=0x7f => 1,
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Err(CodecError::InvalidLeaf { offset: start }),
        };
        let bytes = self
            .data
            .get(start..start + width)
            .ok_or(CodecError::TruncatedTree)?;
        let c = std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or(CodecError::InvalidLeaf { offset: start })?;
        self.cursor += width;
        Ok(c)
    }

    /// Everything not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.cursor..]
    }

    pub fn is_empty(&self) -> bool {
        self.cursor >= self.data.len()
    }

    /// Byte offset of the cursor.
    pub fn loc(&self) -> usize {
        self.cursor
    }
}
