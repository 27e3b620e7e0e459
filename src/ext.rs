//! # Extension Traits
//!
//! Convenience methods built on top of [`FsNode`].
//!
//! ## Overview
//!
//! [`NodeExt`] provides what a browser needs beyond the raw node contract:
//! filtered and sorted listings, text reads and attribute snapshots. It has
//! a blanket implementation, so every node (including `dyn FsNode`) gets
//! these methods for free.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_with`](NodeExt::list_with) | Listing filtered and sorted by [`ListOptions`] |
//! | [`read_to_string`](NodeExt::read_to_string) | Read content as UTF-8 |
//! | [`info`](NodeExt::info) | Snapshot attributes into a [`NodeInfo`] |
//! | [`has_parent`](NodeExt::has_parent) | Whether navigation upward is possible |
//! | [`is_hidden`](NodeExt::is_hidden) | Name starts with `.` |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature, [`NodeExtJson::read_json`] deserializes a
//! node's content.

use std::cmp::Ordering;

use crate::{EntryType, FsNode, ListMode, ListOptions, NodeError, NodeInfo, NodeList};

/// Extension methods for any node.
///
/// # Example
///
/// ```rust,no_run
/// use fsnode::{create, ListOptions, NodeExt, NodeKind};
///
/// # fn main() -> Result<(), fsnode::NodeError> {
/// if let Some(dir) = create("~/roms", NodeKind::System)? {
///     for rom in dir.list_with(&ListOptions::new().extensions(["a26", "bin"]))? {
///         println!("{}", rom.name());
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub trait NodeExt: FsNode {
    /// List children, then filter and sort them according to `options`.
    ///
    /// Names compare case-insensitively, with the exact byte order as a
    /// tie-break so the result stays deterministic.
    ///
    /// # Errors
    ///
    /// Same as [`list_dir`](crate::NodeDir::list_dir).
    fn list_with(&self, options: &ListOptions) -> Result<NodeList, NodeError> {
        let mut entries: Vec<(bool, String, Box<dyn FsNode>)> = Vec::new();

        for child in self.list_dir()? {
            let name = child.name();
            if !options.include_hidden && name.starts_with('.') {
                continue;
            }
            let is_dir = child.is_directory();
            let keep = match options.mode {
                ListMode::All => is_dir || options.matches_extension(&name),
                ListMode::FilesOnly => !is_dir && options.matches_extension(&name),
                ListMode::DirectoriesOnly => is_dir,
            };
            if keep {
                entries.push((is_dir, name, child));
            }
        }

        entries.sort_by(|(a_dir, a_name, _), (b_dir, b_name, _)| {
            let group = if options.directories_first {
                b_dir.cmp(a_dir)
            } else {
                Ordering::Equal
            };
            group
                .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
                .then_with(|| a_name.cmp(b_name))
        });

        Ok(entries.into_iter().map(|(_, _, node)| node).collect())
    }

    /// Read the content and decode it as UTF-8.
    ///
    /// # Errors
    ///
    /// - Everything [`read`](crate::NodeRead::read) returns
    /// - [`NodeError::InvalidData`] if the content is not UTF-8
    fn read_to_string(&self) -> Result<String, NodeError> {
        String::from_utf8(self.read()?).map_err(|e| NodeError::InvalidData {
            path: self.path(),
            details: e.to_string(),
        })
    }

    /// Snapshot the node's current attributes.
    fn info(&self) -> NodeInfo {
        let entry_type = if self.is_directory() {
            EntryType::Directory
        } else if self.is_file() {
            EntryType::File
        } else if self.exists() {
            EntryType::Other
        } else {
            EntryType::Missing
        };
        NodeInfo {
            name: self.name(),
            path: self.path(),
            kind: self.kind(),
            entry_type,
            size: self.size(),
        }
    }

    /// Returns `true` unless the node is its medium's root.
    fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Returns `true` if the name starts with `.`.
    fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }
}

// Blanket implementation - every node gets NodeExt for free
impl<N: FsNode + ?Sized> NodeExt for N {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::de::DeserializeOwned;

    /// JSON deserialization for node content.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait NodeExtJson: FsNode {
        /// Read the content and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - Everything [`read`](crate::NodeRead::read) returns
        /// - [`NodeError::Deserialization`] if parsing fails
        fn read_json<T: DeserializeOwned>(&self) -> Result<T, NodeError> {
            let bytes = self.read()?;
            serde_json::from_slice(&bytes)
                .map_err(|e| NodeError::Deserialization(format!("{}: {e}", self.path())))
        }
    }

    impl<N: FsNode + ?Sized> NodeExtJson for N {}
}

#[cfg(feature = "serde")]
pub use json::NodeExtJson;
