//! Windows node.
//!
//! The empty identifier names a virtual root above all drives; its
//! children are the mounted drive roots.

use std::path::PathBuf;

use super::{child_paths, entry_type, file_size, read_file};
use crate::path::{abbreviate_home, display, resolve_host_path};
use crate::{EntryType, FsNode, NodeDir, NodeError, NodeKind, NodeList, NodeMeta, NodeRead};

/// Node on a Windows filesystem. `path == None` is the drive list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowsNode {
    path: Option<PathBuf>,
}

impl WindowsNode {
    pub(crate) fn new(path: &str) -> Result<Self, NodeError> {
        if path.is_empty() {
            return Ok(Self { path: None });
        }
        let mut path = path.replace('/', "\\");
        // A bare drive letter means the drive root, not the drive's
        // current directory.
        if path.len() == 2 && path.ends_with(':') {
            path.push('\\');
        }
        Ok(Self::from_normalized(resolve_host_path(&path)))
    }

    pub(crate) fn from_normalized(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn entry_type(&self) -> EntryType {
        match &self.path {
            Some(path) => entry_type(path),
            None => EntryType::Directory,
        }
    }

    fn drive_roots() -> Vec<PathBuf> {
        (b'A'..=b'Z')
            .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
            .filter(|root| root.is_dir())
            .collect()
    }
}

impl NodeMeta for WindowsNode {
    fn kind(&self) -> NodeKind {
        NodeKind::System
    }

    fn name(&self) -> String {
        match &self.path {
            None => String::new(),
            Some(path) => match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => display(path).trim_end_matches('\\').to_string(),
            },
        }
    }

    fn path(&self) -> String {
        self.path.as_deref().map(display).unwrap_or_default()
    }

    fn short_path(&self) -> String {
        self.path.as_deref().map(abbreviate_home).unwrap_or_default()
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
        self.path.as_deref().and_then(file_size)
    }
}

impl NodeDir for WindowsNode {
    fn parent(&self) -> Option<Box<dyn FsNode>> {
        let path = self.path.as_deref()?;
        let parent = match path.parent() {
            Some(parent) => Self::from_normalized(parent.to_path_buf()),
            None => Self { path: None },
        };
        Some(Box::new(parent))
    }

    fn list_dir(&self) -> Result<NodeList, NodeError> {
        if !self.is_directory() {
            return Err(NodeError::NotADirectory { path: self.path() });
        }
        let children = match &self.path {
            Some(path) => child_paths(path)?,
            None => Self::drive_roots(),
        };
        Ok(children
            .into_iter()
            .map(|child| Box::new(Self::from_normalized(child)) as Box<dyn FsNode>)
            .collect())
    }
}

impl NodeRead for WindowsNode {
    fn read(&self) -> Result<Vec<u8>, NodeError> {
        match self.path.as_deref() {
            Some(path) if self.is_file() => read_file(path),
            _ => Err(NodeError::NotAFile { path: self.path() }),
        }
    }
}
