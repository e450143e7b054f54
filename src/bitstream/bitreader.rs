//! BitReader: reads the packed payload one byte at a time, most significant bit first.
//!
//! NOTE: The whole container is in memory, so this reads from a byte slice.

const BIT_MASK: u8 = 0x80;

/// Reads a packed payload.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = byte & (BIT_MASK >> self.bit_index) != 0;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Bytes not yet touched. A partly read byte counts as touched.
    pub fn bytes_left(&self) -> usize {
        self.buffer.len() - self.cursor - usize::from(self.bit_index > 0)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
