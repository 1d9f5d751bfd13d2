//! File-level compress and decompress with default output naming.
//!
//! `notes.txt` compresses to `notes.txt.huf`, which decompresses to
//! `notes_unc.txt` next to it. Both directions read the whole input and
//! finish encoding or decoding before the output file is created, so a
//! failed call leaves no file behind and an output path equal to the input
//! path never truncates the data before it has been read.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::container;
use crate::error::Result;
use crate::metrics::{CompressionStats, DecompressionStats};

/// Extension appended to compressed files.
pub const COMPRESSED_EXTENSION: &str = "huf";

/// Suffix added to the stem of decompressed files.
pub const DECOMPRESSED_SUFFIX: &str = "_unc";

/// `path` with `.huf` appended.
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}

/// Strip a trailing `.huf`, then insert `_unc` before the extension.
///
/// `notes.txt.huf` → `notes_unc.txt`, `data.huf` → `data_unc`.
pub fn decompressed_path(path: &Path) -> PathBuf {
    let original = if path.extension().is_some_and(|ext| ext == COMPRESSED_EXTENSION) {
        path.with_extension("")
    } else {
        path.to_path_buf()
    };

    let mut name = OsString::from(original.file_stem().unwrap_or_default());
    name.push(DECOMPRESSED_SUFFIX);
    if let Some(ext) = original.extension() {
        name.push(".");
        name.push(ext);
    }
    original.with_file_name(name)
}

/// Compress `input` to `output`, or to [`compressed_path`] when `None`.
///
/// The output file is created only after the artifact is complete.
pub fn compress_file(input: &Path, output: Option<&Path>) -> Result<(PathBuf, CompressionStats)> {
    let output = output.map_or_else(|| compressed_path(input), Path::to_path_buf);

    let data = fs::read(input)?;
    let mut artifact = Vec::new();
    let stats = container::compress_slice(&data, &mut artifact)?;

    let mut writer = BufWriter::new(File::create(&output)?);
    writer.write_all(&artifact)?;
    writer.flush()?;

    log::info!("compressed {} -> {}", input.display(), output.display());
    Ok((output, stats))
}

/// Decompress `input` to `output`, or to [`decompressed_path`] when `None`.
///
/// The output file is created only after the artifact decoded successfully.
pub fn decompress_file(
    input: &Path,
    output: Option<&Path>,
) -> Result<(PathBuf, DecompressionStats)> {
    let output = output.map_or_else(|| decompressed_path(input), Path::to_path_buf);

    let reader = BufReader::new(File::open(input)?);
    let mut decoded = Vec::new();
    let stats = container::decompress(reader, &mut decoded)?;

    let mut writer = BufWriter::new(File::create(&output)?);
    writer.write_all(&decoded)?;
    writer.flush()?;

    log::info!("decompressed {} -> {}", input.display(), output.display());
    Ok((output, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_path() {
        assert_eq!(
            compressed_path(Path::new("dir/notes.txt")),
            PathBuf::from("dir/notes.txt.huf")
        );
        assert_eq!(compressed_path(Path::new("data")), PathBuf::from("data.huf"));
    }

    #[test]
    fn test_decompressed_path() {
        assert_eq!(
            decompressed_path(Path::new("dir/notes.txt.huf")),
            PathBuf::from("dir/notes_unc.txt")
        );
        assert_eq!(decompressed_path(Path::new("data.huf")), PathBuf::from("data_unc"));
        assert_eq!(
            decompressed_path(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_unc.gz")
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("huffpack-files-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("sample.txt");
        let original = b"to be or not to be, that is the question".to_vec();
        std::fs::write(&input, &original).unwrap();

        let (compressed, stats) = compress_file(&input, None).unwrap();
        assert_eq!(compressed, dir.join("sample.txt.huf"));
        assert_eq!(stats.input_bytes, original.len() as u64);

        let (restored, _) = decompress_file(&compressed, None).unwrap();
        assert_eq!(restored, dir.join("sample_unc.txt"));
        assert_eq!(std::fs::read(&restored).unwrap(), original);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_compress_in_place_keeps_data() {
        let dir = std::env::temp_dir().join(format!("huffpack-inplace-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("data.bin");
        let original = b"important data".to_vec();
        std::fs::write(&path, &original).unwrap();

        let (written, stats) = compress_file(&path, Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(stats.input_bytes, original.len() as u64);

        let artifact = std::fs::read(&path).unwrap();
        assert_ne!(artifact, b"{256:1}");
        assert_eq!(crate::container::decompress_bytes(&artifact).unwrap(), original);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_compress_creates_no_file() {
        let dir = std::env::temp_dir().join(format!("huffpack-missing-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("absent.txt");
        let output = dir.join("absent.txt.huf");

        let result = compress_file(&input, None);
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
        assert!(!output.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_decompress_creates_no_file() {
        let dir = std::env::temp_dir().join(format!("huffpack-badart-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("broken.huf");
        std::fs::write(&input, b"{97:3, 98:1, 256:1}").unwrap();

        let result = decompress_file(&input, None);
        assert!(matches!(result, Err(crate::error::Error::Huffman(_))));
        assert!(!dir.join("broken_unc").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
