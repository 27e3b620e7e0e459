//! Identity and type queries for nodes.

use std::fmt;

use crate::NodeKind;

/// Identity and type queries.
///
/// None of these methods fail and none of them change the medium. A
/// backend answers them from the medium's current state, so two calls
/// may disagree if something else modifies the medium in between.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn NodeMeta`.
pub trait NodeMeta: fmt::Debug + Send {
    /// Backend the node is bound to. Fixed for the node's lifetime.
    fn kind(&self) -> NodeKind;

    /// Final path component.
    ///
    /// Roots have no final component; they return their own display form
    /// (`/` for the POSIX root, the archive file name for an archive root).
    fn name(&self) -> String;

    /// Full identifier as understood by the owning backend.
    ///
    /// Passing it back to [`create`](crate::create) with the same
    /// [`kind`](Self::kind) yields an equivalent node.
    fn path(&self) -> String;

    /// [`path`](Self::path) abbreviated for display, e.g. with the home
    /// directory shown as `~`.
    fn short_path(&self) -> String {
        self.path()
    }

    /// Returns `true` iff the identifier currently resolves to an entry.
    ///
    /// Any resolution failure (missing entry, permission denied on a
    /// parent, dangling symlink) yields `false`.
    fn exists(&self) -> bool;

    /// Returns `true` if the node exists and is a directory.
    fn is_directory(&self) -> bool;

    /// Returns `true` if the node exists and is a regular file.
    fn is_file(&self) -> bool;

    /// Size in bytes, if the backend knows it without reading content.
    ///
    /// `None` for directories and missing entries.
    fn size(&self) -> Option<u64>;
}
