//! # Zipr Tar Container Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module provides extraction of tar-style containers, including the
//! common compressed variants. The tool never writes tar containers; the
//! builder side of the pipeline is zip-only.
//!
//! ## Architecture
//!
//! The module leverages the `tar` crate for reading the archive structure
//! and picks a decompression codec from the file name before handing the
//! byte stream to the tar reader:
//!
//! - `.tar.gz` / `.tgz` → gzip via `flate2`
//! - `.tar.xz` / `.txz` → xz via `xz2`
//! - `.tar.zst`         → zstandard via `zstd`
//! - anything else      → the raw stream is treated as an uncompressed tar
//!
//! The codec wrapper is a boxed `Read` so the unpack path is written once.
//! Extraction preserves the relative paths stored in the container, creates
//! directories as needed, and overwrites existing files without
//! confirmation (the tar reader's default, kept as-is).
//!
use crate::core::error::{Result, ZiprError};
use anyhow::Context;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decompression codecs recognized by file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Codec {
    None,
    Gzip,
    Xz,
    Zstd,
}

/// Picks the codec for a tar container from its file name.
fn codec_for(name: &str) -> Codec {
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        Codec::Gzip
    } else if name.ends_with(".tar.xz") || name.ends_with(".txz") {
        Codec::Xz
    } else if name.ends_with(".tar.zst") {
        Codec::Zstd
    } else {
        Codec::None
    }
}

/// Wraps the raw container stream in the matching decompressor.
fn wrap_reader(file: File, codec: Codec) -> Result<Box<dyn Read>> {
    match codec {
        Codec::None => Ok(Box::new(file)),
        Codec::Gzip => Ok(Box::new(flate2::read::GzDecoder::new(file))),
        Codec::Xz => Ok(Box::new(xz2::read::XzDecoder::new(file))),
        Codec::Zstd => {
            let decoder =
                zstd::stream::Decoder::new(file).context("Failed to initialize zstd decoder")?;
            Ok(Box::new(decoder))
        }
    }
}

/// # Extract Tar Container (`extract_tar`)
///
/// Unpacks every entry of the tar container at `archive` into `target`,
/// transparently decompressing gzip, xz, and zstandard variants based on
/// the file name. Entries whose paths would escape `target` are rejected
/// by the tar reader itself.
///
/// ## Arguments
///
/// * `archive` - Path to the tar container to read.
/// * `target` - Directory the entries are materialized under.
///
/// ## Errors
///
/// Returns an `Err` if the container cannot be opened, the stream cannot
/// be decompressed, or unpacking an entry fails.
pub fn extract_tar(archive: &Path, target: &Path) -> Result<()> {
    let file = File::open(archive)
        .with_context(|| format!("Failed to open archive '{}'", archive.display()))?;

    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let reader = wrap_reader(file, codec_for(&name))?;

    let mut container = tar::Archive::new(reader);
    container.unpack(target).map_err(|e| {
        anyhow::anyhow!(ZiprError::Archive(format!(
            "'{}' could not be unpacked as a tar archive: {}",
            archive.display(),
            e
        )))
    })?;
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn codec_selection_follows_file_name() {
        assert_eq!(codec_for("backup.tar.gz"), Codec::Gzip);
        assert_eq!(codec_for("backup.tgz"), Codec::Gzip);
        assert_eq!(codec_for("backup.tar.xz"), Codec::Xz);
        assert_eq!(codec_for("backup.txz"), Codec::Xz);
        assert_eq!(codec_for("backup.tar.zst"), Codec::Zstd);
        assert_eq!(codec_for("backup.tar"), Codec::None);
    }

    // Builds a small gzipped tarball fixture, then extracts it.
    #[test]
    fn extracts_gzipped_tarball() {
        let temp = tempdir().unwrap();
        let tree = temp.path().join("payload");
        fs::create_dir_all(tree.join("nested")).unwrap();
        fs::write(tree.join("root.txt"), b"root").unwrap();
        fs::write(tree.join("nested/leaf.txt"), b"leaf").unwrap();

        let archive = temp.path().join("payload.tar.gz");
        {
            let file = File::create(&archive).unwrap();
            let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
            let mut builder = tar::Builder::new(encoder);
            builder.append_dir_all("payload", &tree).unwrap();
            builder.into_inner().unwrap().finish().unwrap();
        }

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        extract_tar(&archive, &out).unwrap();

        assert_eq!(fs::read(out.join("payload/root.txt")).unwrap(), b"root");
        assert_eq!(
            fs::read(out.join("payload/nested/leaf.txt")).unwrap(),
            b"leaf"
        );
    }

    #[test]
    fn extracts_plain_tar() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("file.txt");
        fs::write(&source, b"plain").unwrap();

        let archive = temp.path().join("plain.tar");
        {
            let file = File::create(&archive).unwrap();
            let mut builder = tar::Builder::new(file);
            builder
                .append_path_with_name(&source, "file.txt")
                .unwrap();
            builder.finish().unwrap();
        }

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        extract_tar(&archive, &out).unwrap();

        assert_eq!(fs::read(out.join("file.txt")).unwrap(), b"plain");
    }

    #[test]
    fn extraction_overwrites_existing_files() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("file.txt");
        fs::write(&source, b"fresh").unwrap();

        let archive = temp.path().join("plain.tar");
        {
            let file = File::create(&archive).unwrap();
            let mut builder = tar::Builder::new(file);
            builder
                .append_path_with_name(&source, "file.txt")
                .unwrap();
            builder.finish().unwrap();
        }

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("file.txt"), b"stale contents").unwrap();

        extract_tar(&archive, &out).unwrap();
        assert_eq!(fs::read(out.join("file.txt")).unwrap(), b"fresh");
    }

    #[test]
    fn corrupt_container_reports_error() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("broken.tar");
        fs::write(&archive, b"definitely not a tar stream").unwrap();

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        assert!(extract_tar(&archive, &out).is_err());
    }
}
