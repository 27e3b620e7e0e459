//! Navigation: parents and directory listings.

use crate::{FsNode, NodeError};

/// Owned children returned by [`NodeDir::list_dir`].
pub type NodeList = Vec<Box<dyn FsNode>>;

/// Navigation between nodes of the same medium.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn NodeDir`.
pub trait NodeDir: Send {
    /// The containing directory, or `None` at the medium's root.
    ///
    /// Never fails, even if the parent has since been removed; the
    /// returned node then reports `exists() == false`.
    fn parent(&self) -> Option<Box<dyn FsNode>>;

    /// List the node's children.
    ///
    /// Each child is fully constructed and owned by the caller. For every
    /// child `c`, `c.parent()` has the same [`path`](crate::NodeMeta::path)
    /// as `self`. Backends document their ordering; it is stable across
    /// calls on an unmodified medium.
    ///
    /// # Errors
    ///
    /// - [`NodeError::NotADirectory`] if the node is not a directory
    /// - [`NodeError::Io`] / [`NodeError::Archive`] on medium failures
    fn list_dir(&self) -> Result<NodeList, NodeError>;
}
