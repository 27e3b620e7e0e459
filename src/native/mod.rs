//! Native filesystem backend.
//!
//! Exactly one implementation is compiled per target and exported as
//! [`NativeNode`]: [`PosixNode`](posix::PosixNode) on Unix-like systems,
//! [`WindowsNode`](windows::WindowsNode) on Windows.
//!
//! Both share the helpers below. Type and size queries follow symlinks;
//! stored paths never do (see [`crate::path`]).

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub(crate) use posix::PosixNode as NativeNode;
#[cfg(windows)]
pub(crate) use windows::WindowsNode as NativeNode;

use std::fs;
use std::path::{Path, PathBuf};

use crate::path::display;
use crate::{EntryType, NodeError};

/// Resolve what `path` currently is. Any stat failure reads as missing.
pub(crate) fn entry_type(path: &Path) -> EntryType {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => EntryType::Directory,
        Ok(meta) if meta.is_file() => EntryType::File,
        Ok(_) => EntryType::Other,
        Err(_) => EntryType::Missing,
    }
}

pub(crate) fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, NodeError> {
    fs::read(path).map_err(|e| NodeError::io("read", display(path), e))
}

/// Paths of the entries in `dir`, sorted by file name (byte order).
pub(crate) fn child_paths(dir: &Path) -> Result<Vec<PathBuf>, NodeError> {
    let entries = fs::read_dir(dir).map_err(|e| NodeError::io("read_dir", display(dir), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| NodeError::io("read_dir", display(dir), e))?;
        names.push(entry.file_name());
    }
    names.sort();

    tracing::trace!(dir = %dir.display(), count = names.len(), "listed native directory");
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_of_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(entry_type(&dir.path().join("nope")), EntryType::Missing);
        assert_eq!(file_size(&dir.path().join("nope")), None);
    }

    #[test]
    fn entry_type_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("game.bin");
        fs::write(&file, [0u8; 4096]).unwrap();

        assert_eq!(entry_type(dir.path()), EntryType::Directory);
        assert_eq!(entry_type(&file), EntryType::File);
        assert_eq!(file_size(&file), Some(4096));
        assert_eq!(file_size(dir.path()), None);
    }

    #[test]
    fn child_paths_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.bin", "C.bin", "a.bin"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let names: Vec<_> = child_paths(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["C.bin", "a.bin", "b.bin"]);
    }

    #[cfg(unix)]
    #[test]
    fn device_is_other() {
        assert_eq!(entry_type(Path::new("/dev/null")), EntryType::Other);
        assert_eq!(file_size(Path::new("/dev/null")), None);
    }

    #[test]
    fn read_missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, NodeError::Io { operation: "read", .. }));
    }
}
