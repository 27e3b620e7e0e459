//! POSIX node (Linux, macOS, BSD).

use std::path::PathBuf;

use super::{child_paths, entry_type, file_size, read_file};
use crate::path::{abbreviate_home, display, resolve_host_path};
use crate::{EntryType, FsNode, NodeDir, NodeError, NodeKind, NodeList, NodeMeta, NodeRead};

/// Node on a POSIX filesystem, addressed by an absolute, lexically
/// normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PosixNode {
    path: PathBuf,
}

impl PosixNode {
    /// Build a node from a caller supplied identifier.
    ///
    /// `~` expands to the home directory and relative paths are taken
    /// from the current directory. The path does not have to exist.
    pub(crate) fn new(path: &str) -> Result<Self, NodeError> {
        if path.is_empty() {
            return Err(NodeError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(Self::from_normalized(resolve_host_path(path)))
    }

    pub(crate) fn from_normalized(path: PathBuf) -> Self {
        Self { path }
    }

    fn entry_type(&self) -> EntryType {
        entry_type(&self.path)
    }

    #[cfg(test)]
    fn as_path(&self) -> &std::path::Path {
        &self.path
    }
}

impl NodeMeta for PosixNode {
    fn kind(&self) -> NodeKind {
        NodeKind::System
    }

    fn name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => display(&self.path),
        }
    }

    fn path(&self) -> String {
        display(&self.path)
    }

    fn short_path(&self) -> String {
        abbreviate_home(&self.path)
    }

    fn exists(&self) -> bool {
        self.entry_type() != EntryType::Missing
    }

    fn is_directory(&self) -> bool {
        self.entry_type() == EntryType::Directory
    }

    fn is_file(&self) -> bool {
        self.entry_type() == EntryType::File
    }

    fn size(&self) -> Option<u64> {
        file_size(&self.path)
    }
}

impl NodeDir for PosixNode {
    fn parent(&self) -> Option<Box<dyn FsNode>> {
        self.path
            .parent()
            .map(|parent| Box::new(Self::from_normalized(parent.to_path_buf())) as Box<dyn FsNode>)
    }

    fn list_dir(&self) -> Result<NodeList, NodeError> {
        if !self.is_directory() {
            return Err(NodeError::NotADirectory { path: self.path() });
        }
        Ok(child_paths(&self.path)?
            .into_iter()
            .map(|child| Box::new(Self::from_normalized(child)) as Box<dyn FsNode>)
            .collect())
    }
}

impl NodeRead for PosixNode {
    fn read(&self) -> Result<Vec<u8>, NodeError> {
        if !self.is_file() {
            return Err(NodeError::NotAFile { path: self.path() });
        }
        read_file(&self.path)
    }
}
