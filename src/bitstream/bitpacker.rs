use crate::huffman_coding::dictionary::Code;

/// Packs variable length codes into a byte buffer, MSB first, with no padding between codes.
/// The number of unused bit slots left in the last byte is carried from one code to the next.
#[derive(Debug, Default)]
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Free bit slots (0-7) remaining in the last byte of output.
    free_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Suggest the size be an
    /// estimate of the payload in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            free_bits: 0,
        }
    }

    /// Write the path bits of a sentinel-marked code, root branch first. The sentinel itself
    /// is not written, and a zero-length code writes nothing.
    pub fn push_code(&mut self, code: Code) {
        let data = code.raw();
        for read in 0..code.len() {
            // Start a new byte when the last one is full
            if self.free_bits == 0 {
                self.output.push(0);
                self.free_bits = 8;
            }
            self.free_bits -= 1;
            if data & (1 << read) != 0 {
                if let Some(last) = self.output.last_mut() {
                    *last |= 1 << self.free_bits;
                }
            }
        }
    }

    /// Free bit slots in the last output byte.
    pub fn free_bits(&self) -> u8 {
        self.free_bits
    }

    /// Total bits written so far.
    pub fn bit_count(&self) -> usize {
        self.output.len() * 8 - self.free_bits as usize
    }

    /// Hand over the packed bytes. Unused low bits of the last byte are zero.
    pub fn into_bytes(self) -> Vec<u8> {
        self.output
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_count() / 8, self.bit_count() % 8)
    }
}
