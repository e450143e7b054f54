use std::fs;
use std::path::Path;

use log::{debug, info, trace, warn};

use super::compressed_path;
use crate::bitstream::bitpacker::BitPacker;
use crate::error::CodecError;
use crate::huffman_coding::dictionary::CodeDictionary;
use crate::huffman_coding::tree::HuffTree;
use crate::huffman_coding::tree_codec::{is_reserved, serialize_tree, TREE_END};
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::count_frequencies;
use crate::tools::varint::write_uvarint;

/*
    Container layout:
      tree stream (pre-order tokens) | 0x00 | varint symbol count | packed payload

    Nothing is written anywhere until the whole container has been built in memory.
*/

/// Encode a text into a complete container.
pub fn encode(text: &str) -> Result<Vec<u8>, CodecError> {
    // Reserved symbols are refused before any work is done
    if let Some(c) = text.chars().find(|&c| is_reserved(c)) {
        return Err(CodecError::ReservedSymbol(c));
    }

    let freqs = count_frequencies(text);
    let symbol_count: u64 = freqs.values().sum();
    info!(
        "Found {} symbols, {} of them distinct.",
        symbol_count,
        freqs.len()
    );

    let tree = HuffTree::from_frequencies(&freqs);
    let dictionary = CodeDictionary::from_tree(&tree)?;

    // Header
    let mut out = Vec::with_capacity(freqs.len() * 2 + 12);
    serialize_tree(&tree, &mut out)?;
    out.push(TREE_END);
    write_uvarint(&mut out, symbol_count);
    let header_len = out.len();
    debug!("Header is {} bytes.", header_len);

    // Body
    let payload = pack_payload(text, &dictionary)?;
    out.extend_from_slice(&payload);

    info!(
        "Packed {} bytes of text into {} bytes ({} header + {} payload).",
        text.len(),
        out.len(),
        header_len,
        payload.len()
    );
    if !text.is_empty() {
        info!(
            "Output is {:.2}% of the input.",
            100.0 * out.len() as f64 / text.len() as f64
        );
    }
    Ok(out)
}

/// Pack the code of every symbol of text, back to back, into a byte aligned payload.
pub fn pack_payload(text: &str, dictionary: &CodeDictionary) -> Result<Vec<u8>, CodecError> {
    // Rough guess: a couple of bits per symbol
    let mut bp = BitPacker::new(text.len() / 4 + 1);
    for c in text.chars() {
        let code = dictionary.get(c).ok_or(CodecError::UnknownSymbol(c))?;
        bp.push_code(code);
    }
    debug!("Payload is {} bits, ending at {}.", bp.bit_count(), bp.loc());
    let payload = bp.into_bytes();
    if log::log_enabled!(log::Level::Trace) {
        let bits: Vec<String> = payload.iter().map(|b| format!("{:08b}", b)).collect();
        trace!("Payload bits: {}", bits.join(" "));
    }
    Ok(payload)
}

/// Compress the input file defined in opts <HuffOpts> into the same name plus .huff.
pub fn compress(opts: &HuffOpts) -> Result<(), CodecError> {
    let raw = fs::read(&opts.file)?;
    let text = String::from_utf8(raw).map_err(|_| CodecError::InputNotUtf8)?;
    info!("Read {} bytes from {}.", text.len(), opts.file.display());

    let container = encode(&text)?;

    let fname = compressed_path(&opts.file);
    write_output(&fname, &container)?;
    info!("Wrote {} bytes to {}.", container.len(), fname.display());
    Ok(())
}

/// Write the finished output in one go. A failed write does not leave a partial file behind.
pub(crate) fn write_output(path: &Path, data: &[u8]) -> Result<(), CodecError> {
    if let Err(e) = fs::write(path, data) {
        if path.exists() {
            if let Err(rm) = fs::remove_file(path) {
                warn!("Could not remove partial output {}: {}", path.display(), rm);
            }
        }
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{encode, pack_payload};
    use crate::error::CodecError;
    use crate::huffman_coding::dictionary::CodeDictionary;
    use crate::huffman_coding::tree::HuffTree;
    use crate::tools::freq_count::count_frequencies;

    #[test]
    fn aabcd_container_test() {
        // tree | end | count 5 | a=11 a=11 b=00 c=01 d=10 -> 1111 0001 10(000000)
        let out = encode("aabcd").unwrap();
        assert_eq!(
            out,
            vec![0x01, 0x01, b'b', b'c', 0x01, b'd', b'a', 0x00, 0x05, 0b1111_0001, 0b1000_0000]
        );
    }

    #[test]
    fn empty_container_test() {
        assert_eq!(encode("").unwrap(), vec![0x00, 0x00]);
    }

    #[test]
    fn single_symbol_container_test() {
        // One leaf, no payload at all
        let out = encode("🔥🔥🔥🔥🔥🔥🔥🔥🔥🔥").unwrap();
        let mut expected = "🔥".as_bytes().to_vec();
        expected.extend_from_slice(&[0x00, 10]);
        assert_eq!(out, expected);
    }

    #[test]
    fn reserved_symbol_test() {
        assert!(matches!(
            encode("abc\0def"),
            Err(CodecError::ReservedSymbol('\0'))
        ));
        assert!(matches!(
            encode("\u{1}"),
            Err(CodecError::ReservedSymbol('\u{1}'))
        ));
        assert!(encode("\u{2}\u{3}").is_ok());
    }

    #[test]
    fn unknown_symbol_test() {
        let tree = HuffTree::from_frequencies(&count_frequencies("ab"));
        let dict = CodeDictionary::from_tree(&tree).unwrap();
        assert!(matches!(
            pack_payload("abc", &dict),
            Err(CodecError::UnknownSymbol('c'))
        ));
    }

    #[test]
    fn payload_length_test() {
        let text = "abracadabra alakazam";
        let tree = HuffTree::from_frequencies(&count_frequencies(text));
        let dict = CodeDictionary::from_tree(&tree).unwrap();
        let total_bits: u32 = text.chars().map(|c| dict.get(c).unwrap().len()).sum();
        let payload = pack_payload(text, &dict).unwrap();
        assert_eq!(payload.len(), (total_bits as usize + 7) / 8);
    }
}
