//! The bitstream module forms the bit level I/O of the codec.
//!
//! Codes are packed contiguously, most significant bit first within each byte, with no padding
//! between symbols. Only the last byte of a payload can hold unused (zero) bits, and the decoder
//! stops on the symbol count from the header rather than on the end of the data.
//!
pub mod bitpacker;
pub mod bitreader;
