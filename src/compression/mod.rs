//! The compression module ties the Huffman stages together into a single container.
//!
//! Compression happens in the following steps:
//! - Frequency count: Count how often every symbol (Unicode scalar value) occurs in the text.
//! - Tree build: Merge the two lightest subtrees until one tree is left.
//! - Dictionary: Walk the tree to give every symbol its prefix code.
//! - Header: Write the tree in pre-order, a 0x00 terminator, and the symbol count as a varint.
//! - Payload: Pack every symbol's code back to back, most significant bit first.
//!
//! Decompression reads the header back, rebuilds the tree and walks it one payload bit at a
//! time until the declared number of symbols has come out.
//!
//! Both directions work on the whole input in memory and write their output in one go.

use std::path::{Path, PathBuf};

use crate::error::CodecError;

pub mod compress;
pub mod decompress;

/// File extension of a compressed container.
pub const EXTENSION: &str = "huff";

/// Name of the container written for input: the full input name with .huff appended.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Name of the text restored from a container: the container name with .huff stripped.
pub fn decompressed_path(input: &Path) -> Result<PathBuf, CodecError> {
    // A bare ".huff" is a dotfile with no extension, so it is refused here too
    if input.extension().map_or(true, |ext| ext != EXTENSION) {
        return Err(CodecError::BadExtension(input.display().to_string()));
    }
    Ok(input.with_extension(""))
}

#[cfg(test)]
mod test {
    use super::compress::compress;
    use super::decompress::decompress;
    use super::{compressed_path, decompressed_path};
    use crate::error::CodecError;
    use crate::tools::cli::{HuffOpts, Mode};
    use log::LevelFilter;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Fresh scratch directory per test, so tests running in parallel never share files.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("huffrune-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn opts(op_mode: Mode, file: &Path) -> HuffOpts {
        HuffOpts {
            op_mode,
            file: file.to_path_buf(),
            log_level: LevelFilter::Off,
        }
    }

    #[test]
    fn compressed_path_test() {
        assert_eq!(
            compressed_path(Path::new("notes.txt")),
            PathBuf::from("notes.txt.huff")
        );
        assert_eq!(
            compressed_path(Path::new("dir/README")),
            PathBuf::from("dir/README.huff")
        );
    }

    #[test]
    fn decompressed_path_test() {
        assert_eq!(
            decompressed_path(Path::new("notes.txt.huff")).unwrap(),
            PathBuf::from("notes.txt")
        );
        assert_eq!(
            decompressed_path(Path::new("dir/README.huff")).unwrap(),
            PathBuf::from("dir/README")
        );
    }

    #[test]
    fn bad_extension_test() {
        for name in ["notes.txt", "notes", "notes.huff.txt", "dir/.huff"] {
            assert!(
                matches!(
                    decompressed_path(Path::new(name)),
                    Err(CodecError::BadExtension(_))
                ),
                "{} should be refused",
                name
            );
        }
    }

    #[test]
    fn names_invert_test() {
        let input = Path::new("archive/some.data.file");
        assert_eq!(decompressed_path(&compressed_path(input)).unwrap(), input);
    }

    #[test]
    fn file_round_trip_test() {
        let dir = scratch("round-trip");
        let input = dir.join("poem.txt");
        let text = "Roses are red,\nЀ€🔥 are blue.\n".repeat(50);
        fs::write(&input, &text).unwrap();

        compress(&opts(Mode::Zip, &input)).unwrap();
        let packed = compressed_path(&input);
        assert!(fs::metadata(&packed).unwrap().len() < text.len() as u64);

        fs::remove_file(&input).unwrap();
        decompress(&opts(Mode::Unzip, &packed)).unwrap();
        assert_eq!(fs::read_to_string(&input).unwrap(), text);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_file_test() {
        let dir = scratch("empty");
        let input = dir.join("empty.txt");
        fs::write(&input, "").unwrap();

        compress(&opts(Mode::Zip, &input)).unwrap();
        let packed = compressed_path(&input);
        assert_eq!(fs::read(&packed).unwrap(), vec![0x00, 0x00]);

        fs::remove_file(&input).unwrap();
        decompress(&opts(Mode::Unzip, &packed)).unwrap();
        assert_eq!(fs::read(&input).unwrap(), Vec::<u8>::new());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn binary_input_test() {
        let dir = scratch("binary");
        let input = dir.join("blob.bin");
        fs::write(&input, [0x66_u8, 0x6f, 0xff, 0xfe]).unwrap();
        assert!(matches!(
            compress(&opts(Mode::Zip, &input)),
            Err(CodecError::InputNotUtf8)
        ));
        assert!(!compressed_path(&input).exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn corrupt_container_leaves_no_output_test() {
        let dir = scratch("corrupt");
        let packed = dir.join("broken.txt.huff");
        // Tree promises two children but the stream ends after one
        fs::write(&packed, [0x01, b'a', 0x00, 0x03]).unwrap();
        assert!(matches!(
            decompress(&opts(Mode::Unzip, &packed)),
            Err(CodecError::MissingChild { token: 0 })
        ));
        assert!(!dir.join("broken.txt").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_test() {
        let dir = scratch("missing");
        assert!(matches!(
            compress(&opts(Mode::Zip, &dir.join("nope.txt"))),
            Err(CodecError::Io(_))
        ));
        assert!(matches!(
            decompress(&opts(Mode::Unzip, &dir.join("nope.txt"))),
            Err(CodecError::BadExtension(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
