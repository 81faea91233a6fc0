//! # Zipr Archive Entries (`common::archive::entry`)
//!
//! File: cli/src/common/archive/entry.rs
//!
//! ## Overview
//!
//! This module derives stable archive entry names from input filesystem
//! paths. It is the single place where the "what goes into the container
//! under which name" decision is made, shared by the archive builder:
//!
//! - A plain file input is stored under its own path string, unchanged
//!   apart from the relative-name normalization every stored name gets.
//! - A file discovered while walking a directory input is stored under its
//!   path relative to the *parent* of that directory, so the directory's
//!   own base name is preserved as a leading component inside the archive.
//!
//! ## Architecture
//!
//! - `ArchiveEntry`: a source path on disk paired with the name it will be
//!   stored under.
//! - `file_entry`: builds the entry for a plain file input.
//! - `walk_directory`: recursively enumerates every regular file beneath a
//!   directory input, top-down, in filesystem listing order (NOT sorted —
//!   ordering across runs is unspecified).
//! - `entry_name_in_dir`: the parent-relative name derivation, built on
//!   `pathdiff::diff_paths`.
//!
//! Stored names are always relative: root and drive prefixes as well as
//! `.`/`..` steps are stripped, matching the normalization the zip writer
//! itself applies to entry names.
//!
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// One logical file headed into a container: where it lives on disk and
/// the relative name it will be stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Source path on the local filesystem.
    pub source: PathBuf,
    /// Relative name recorded inside the container.
    pub stored_name: PathBuf,
}

/// Builds the entry for a plain-file input.
///
/// The stored name is the input path itself. Two different inputs naming
/// the same file (e.g. `a/x.txt` given twice) produce two entries with the
/// same stored name; that pass-through is not deduplicated here.
pub fn file_entry(path: &Path) -> ArchiveEntry {
    ArchiveEntry {
        source: path.to_path_buf(),
        stored_name: sanitize_stored_name(path),
    }
}

/// # Walk Directory (`walk_directory`)
///
/// Recursively enumerates every regular file beneath `dir`, top-down, and
/// returns one `ArchiveEntry` per file with its parent-relative stored
/// name. Subdirectory entries themselves are not returned; directories
/// materialize on extraction from the file names within them.
///
/// Unreadable entries encountered mid-walk are logged at warn level and
/// skipped; the walk continues.
///
/// ## Arguments
///
/// * `dir` - The directory input to walk. Must be a directory.
///
/// ## Returns
///
/// * `Vec<ArchiveEntry>` - Entries in filesystem listing order. Callers
///   must not assume the order is sorted or stable across runs.
pub fn walk_directory(dir: &Path) -> Vec<ArchiveEntry> {
    let mut entries = Vec::new();

    for result in WalkDir::new(dir).follow_links(false) {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                // Skip unreadable entries; the rest of the walk proceeds.
                warn!("skipping unreadable entry under [{}]: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        entries.push(ArchiveEntry {
            source: entry.path().to_path_buf(),
            stored_name: entry_name_in_dir(entry.path(), dir),
        });
    }

    entries
}

/// Derives the stored name for a file discovered under a directory input:
/// the file's path relative to the directory's parent, so the directory's
/// base name stays visible inside the archive.
///
/// `dir` itself may be relative or absolute; the result is always a
/// relative name.
pub fn entry_name_in_dir(file: &Path, dir: &Path) -> PathBuf {
    let base = dir.parent().unwrap_or_else(|| Path::new(""));
    let relative = pathdiff::diff_paths(file, base).unwrap_or_else(|| file.to_path_buf());
    sanitize_stored_name(&relative)
}

/// Reduces a path to the relative name a container may store: drive and
/// root prefixes and `.`/`..` steps are dropped, normal components kept.
fn sanitize_stored_name(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn file_entry_keeps_literal_relative_path() {
        let entry = file_entry(Path::new("notes/todo.txt"));
        assert_eq!(entry.source, PathBuf::from("notes/todo.txt"));
        assert_eq!(entry.stored_name, PathBuf::from("notes/todo.txt"));
    }

    #[test]
    fn file_entry_strips_root_from_absolute_path() {
        let entry = file_entry(Path::new("/var/log/syslog"));
        // Absolute sources still get a relative stored name.
        assert_eq!(entry.stored_name, PathBuf::from("var/log/syslog"));
    }

    #[test]
    fn entry_name_is_relative_to_parent_of_dir() {
        let name = entry_name_in_dir(Path::new("work/project/src/main.rs"), Path::new("work/project"));
        assert_eq!(name, PathBuf::from("project/src/main.rs"));
    }

    #[test]
    fn entry_name_for_bare_dir_input_keeps_dir_prefix() {
        // A single-component input has an empty parent; the input's own
        // name remains the leading component.
        let name = entry_name_in_dir(Path::new("project/src/main.rs"), Path::new("project"));
        assert_eq!(name, PathBuf::from("project/src/main.rs"));
    }

    #[test]
    fn entry_name_for_absolute_dir_input_is_relative() {
        let name = entry_name_in_dir(Path::new("/tmp/data/a/b.txt"), Path::new("/tmp/data"));
        assert_eq!(name, PathBuf::from("data/a/b.txt"));
    }

    #[test]
    fn walk_collects_every_regular_file_once() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("tree");
        fs::create_dir_all(root.join("sub/inner")).unwrap();
        fs::write(root.join("top.txt"), "top").unwrap();
        fs::write(root.join("sub/mid.txt"), "mid").unwrap();
        fs::write(root.join("sub/inner/deep.txt"), "deep").unwrap();

        let entries = walk_directory(&root);
        assert_eq!(entries.len(), 3);

        // Stored names are relative to the parent of `tree`, i.e. they all
        // start with the `tree` component. Order is not asserted.
        let names: HashSet<PathBuf> = entries.into_iter().map(|e| e.stored_name).collect();
        assert!(names.contains(&PathBuf::from("tree/top.txt")));
        assert!(names.contains(&PathBuf::from("tree/sub/mid.txt")));
        assert!(names.contains(&PathBuf::from("tree/sub/inner/deep.txt")));
    }

    #[test]
    fn walk_of_empty_directory_yields_no_entries() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("empty");
        fs::create_dir(&root).unwrap();
        assert!(walk_directory(&root).is_empty());
    }
}
