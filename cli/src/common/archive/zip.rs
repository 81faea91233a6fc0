//! # Zipr Zip Container Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! This module owns the zip side of the tool: writing a fresh container
//! entry-by-entry for the archive builder, and unpacking an existing
//! container for the extractor.
//!
//! ## Architecture
//!
//! - `ZipBuilder` wraps a `zip::ZipWriter` over the destination file.
//!   Creating the builder truncates any existing file of the same name.
//!   Entries are streamed straight from their source files into the
//!   writer with `io::copy`; content is never fully buffered in memory.
//!   `finish` writes the central directory and closes the file — only
//!   after it returns may the run report success for the archive.
//! - `extract_zip` walks the container's entries in index order and
//!   materializes each one under the target directory, creating parent
//!   directories as needed and silently overwriting files already
//!   present. Entry names that escape the target directory are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{entry, zip};
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let mut builder = zip::ZipBuilder::create(Path::new("backup.zip"))?;
//! builder.append(&entry::file_entry(Path::new("notes.txt")))?;
//! builder.finish()?;
//!
//! let count = zip::extract_zip(Path::new("backup.zip"), Path::new("."))?;
//! println!("extracted {count} entries");
//! # Ok(())
//! # }
//! ```
//!
use crate::common::archive::entry::ArchiveEntry;
use crate::core::error::{Result, ZiprError};
use anyhow::Context;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::{write::FileOptions, CompressionMethod, ZipArchive, ZipWriter};

/// Streaming writer for one zip container.
pub struct ZipBuilder {
    writer: ZipWriter<File>,
    path: PathBuf,
}

impl ZipBuilder {
    /// # Create Zip Builder (`create`)
    ///
    /// Creates (or truncates) the container file at `path` and prepares a
    /// writer over it. Failure here is fatal to the run: without a
    /// destination there is nothing for the per-item loop to do.
    ///
    /// ## Arguments
    ///
    /// * `path` - Destination container path, already carrying its `.zip`
    ///   suffix.
    ///
    /// ## Returns
    ///
    /// * `Result<ZipBuilder>` - The open builder, ready for `append`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create archive file '{}'", path.display()))?;
        Ok(Self {
            writer: ZipWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// # Append Entry (`append`)
    ///
    /// Streams one source file into the container under its stored name.
    /// The source is opened read-only and copied through without buffering
    /// the whole content.
    ///
    /// ## Arguments
    ///
    /// * `entry` - The source path / stored name pair to write.
    ///
    /// ## Errors
    ///
    /// Returns an `Err` if the source cannot be opened or read, or if the
    /// writer rejects the entry. The source is opened before the entry is
    /// started, so an unreadable source leaves the container untouched.
    /// The builder stays usable; the caller decides whether to continue
    /// with further entries.
    pub fn append(&mut self, entry: &ArchiveEntry) -> Result<()> {
        let mut source = File::open(&entry.source)
            .with_context(|| format!("Failed to open source file '{}'", entry.source.display()))?;

        // Zip entry names use forward slashes regardless of host platform.
        let name = entry.stored_name.to_string_lossy().replace('\\', "/");
        let options = FileOptions::<()>::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.writer
            .start_file(name.as_str(), options)
            .with_context(|| format!("Failed to start entry '{}' in archive", name))?;
        io::copy(&mut source, &mut self.writer)
            .with_context(|| format!("Failed to write entry '{}' to archive", name))?;

        debug!(
            ">>> added file [{}] as [{}]",
            entry.source.display(),
            name
        );
        Ok(())
    }

    /// # Finish Container (`finish`)
    ///
    /// Writes the central directory, flushes, and closes the container
    /// file. A builder that added zero entries still produces a valid,
    /// empty container.
    pub fn finish(self) -> Result<()> {
        self.writer
            .finish()
            .with_context(|| format!("Failed to finalize archive '{}'", self.path.display()))?;
        Ok(())
    }
}

/// # Extract Zip Container (`extract_zip`)
///
/// Unpacks every entry of the container at `archive` into `target`,
/// preserving the relative paths stored inside. Parent directories are
/// created as needed; files already present at a destination path are
/// overwritten without confirmation, which makes repeated extraction of
/// the same container idempotent. Unix permission bits recorded for an
/// entry are restored after its content is written.
///
/// Entry names that would escape `target` (absolute names, `..`
/// traversal) are skipped.
///
/// ## Arguments
///
/// * `archive` - Path to the zip container to read.
/// * `target` - Directory the entries are materialized under.
///
/// ## Returns
///
/// * `Result<usize>` - Number of entries processed.
///
/// ## Errors
///
/// Returns an `Err` if the container cannot be opened or read as a zip
/// file, or if materializing an entry fails.
pub fn extract_zip(archive: &Path, target: &Path) -> Result<usize> {
    let file = File::open(archive)
        .with_context(|| format!("Failed to open archive '{}'", archive.display()))?;
    let mut container = ZipArchive::new(file).map_err(|e| {
        anyhow::anyhow!(ZiprError::Archive(format!(
            "'{}' is not a readable zip container: {}",
            archive.display(),
            e
        )))
    })?;

    let count = container.len();
    for index in 0..count {
        let mut entry = container
            .by_index(index)
            .with_context(|| format!("Failed to read entry {} of '{}'", index, archive.display()))?;

        // `enclosed_name` rejects names escaping the target directory.
        let relative = match entry.enclosed_name() {
            Some(path) => path,
            None => {
                debug!("skipping entry with unsafe name [{}]", entry.name());
                continue;
            }
        };
        let destination = target.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&destination).with_context(|| {
                format!("Failed to create directory '{}'", destination.display())
            })?;
            continue;
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory '{}'", parent.display())
            })?;
        }

        let mut output = File::create(&destination)
            .with_context(|| format!("Failed to create file '{}'", destination.display()))?;
        io::copy(&mut entry, &mut output)
            .with_context(|| format!("Failed to extract '{}'", destination.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&destination, fs::Permissions::from_mode(mode))
                    .with_context(|| {
                        format!("Failed to set permissions on '{}'", destination.display())
                    })?;
            }
        }
    }

    Ok(count)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::archive::entry::{file_entry, walk_directory};
    use std::fs;
    use tempfile::tempdir;

    fn read_names(archive: &Path) -> Vec<String> {
        let mut container = ZipArchive::new(File::open(archive).unwrap()).unwrap();
        (0..container.len())
            .map(|i| container.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn builder_streams_entries_and_preserves_content() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("hello.txt");
        fs::write(&source, b"hello zipr").unwrap();
        let archive = temp.path().join("out.zip");

        let mut builder = ZipBuilder::create(&archive).unwrap();
        builder.append(&file_entry(&source)).unwrap();
        builder.finish().unwrap();

        let mut container = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        assert_eq!(container.len(), 1);
        let mut entry = container.by_index(0).unwrap();
        let mut content = Vec::new();
        io::Read::read_to_end(&mut entry, &mut content).unwrap();
        assert_eq!(content, b"hello zipr");
    }

    #[test]
    fn finishing_without_entries_yields_valid_empty_container() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("empty.zip");

        ZipBuilder::create(&archive).unwrap().finish().unwrap();

        let container = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        assert_eq!(container.len(), 0);
    }

    #[test]
    fn create_truncates_preexisting_file() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("stale.zip");
        fs::write(&archive, b"not a zip at all").unwrap();

        ZipBuilder::create(&archive).unwrap().finish().unwrap();

        // The leftover bytes are gone; the file reads as an empty zip.
        let container = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        assert_eq!(container.len(), 0);
    }

    #[test]
    fn directory_round_trip_reproduces_paths_and_bytes() {
        let temp = tempdir().unwrap();
        let tree = temp.path().join("tree");
        fs::create_dir_all(tree.join("sub")).unwrap();
        fs::write(tree.join("a.txt"), b"alpha").unwrap();
        fs::write(tree.join("sub/b.bin"), &[0u8, 1, 2, 3, 255]).unwrap();

        let archive = temp.path().join("tree.zip");
        let mut builder = ZipBuilder::create(&archive).unwrap();
        for entry in walk_directory(&tree) {
            builder.append(&entry).unwrap();
        }
        builder.finish().unwrap();

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        let count = extract_zip(&archive, &out).unwrap();
        assert_eq!(count, 2);

        assert_eq!(fs::read(out.join("tree/a.txt")).unwrap(), b"alpha");
        assert_eq!(
            fs::read(out.join("tree/sub/b.bin")).unwrap(),
            vec![0u8, 1, 2, 3, 255]
        );
    }

    #[test]
    fn extraction_twice_into_same_directory_is_idempotent() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("data.txt");
        fs::write(&source, b"same bytes").unwrap();

        let archive = temp.path().join("data.zip");
        let mut builder = ZipBuilder::create(&archive).unwrap();
        builder.append(&file_entry(&source)).unwrap();
        builder.finish().unwrap();

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        extract_zip(&archive, &out).unwrap();
        extract_zip(&archive, &out).unwrap();

        let extracted: PathBuf = out.join(source.strip_prefix("/").unwrap_or(&source));
        assert_eq!(fs::read(&extracted).unwrap(), b"same bytes");
    }

    #[test]
    fn duplicate_inputs_store_duplicate_names() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("x.txt");
        fs::write(&source, b"x").unwrap();

        let archive = temp.path().join("dup.zip");
        let mut builder = ZipBuilder::create(&archive).unwrap();
        builder.append(&file_entry(&source)).unwrap();
        builder.append(&file_entry(&source)).unwrap();
        builder.finish().unwrap();

        // Pass-through is intentional: the same input twice means the same
        // stored name twice.
        let names = read_names(&archive);
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], names[1]);
    }
}
