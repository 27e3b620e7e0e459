//! # Node Traits
//!
//! The capability set every backend implements.
//!
//! ## Components
//!
//! | Trait | Methods |
//! |-------|---------|
//! | [`NodeMeta`] | `kind`, `name`, `path`, `short_path`, `exists`, `is_directory`, `is_file`, `size` |
//! | [`NodeDir`] | `parent`, `list_dir` |
//! | [`NodeRead`] | `read`, `read_into` |
//!
//! [`FsNode`] is the composite. It has a blanket implementation: implement
//! the three components (plus `Debug`) and the type is an `FsNode`.
//!
//! ```rust
//! use fsnode::{FsNode, NodeDir, NodeError, NodeKind, NodeList, NodeMeta, NodeRead};
//!
//! #[derive(Debug)]
//! struct Empty;
//!
//! # impl NodeMeta for Empty {
//! #     fn kind(&self) -> NodeKind { NodeKind::System }
//! #     fn name(&self) -> String { String::new() }
//! #     fn path(&self) -> String { String::new() }
//! #     fn exists(&self) -> bool { false }
//! #     fn is_directory(&self) -> bool { false }
//! #     fn is_file(&self) -> bool { false }
//! #     fn size(&self) -> Option<u64> { None }
//! # }
//! # impl NodeDir for Empty {
//! #     fn parent(&self) -> Option<Box<dyn FsNode>> { None }
//! #     fn list_dir(&self) -> Result<NodeList, NodeError> {
//! #         Err(NodeError::NotADirectory { path: self.path() })
//! #     }
//! # }
//! # impl NodeRead for Empty {
//! #     fn read(&self) -> Result<Vec<u8>, NodeError> {
//! #         Err(NodeError::NotAFile { path: self.path() })
//! #     }
//! # }
//! let node: Box<dyn FsNode> = Box::new(Empty);
//! assert!(!node.exists());
//! ```
//!
//! ## Thread Safety
//!
//! Nodes are `Send` but not `Sync`: one may be moved to
//! another thread, but sharing one needs external locking. Independently
//! created nodes never share mutable state.

mod node_dir;
mod node_meta;
mod node_read;

pub use node_dir::{NodeDir, NodeList};
pub use node_meta::NodeMeta;
pub use node_read::NodeRead;

/// A handle to one entry of one storage medium.
///
/// This is the type callers hold: [`create`](crate::create) and
/// [`NodeDir::list_dir`] hand out `Box<dyn FsNode>`, never a concrete
/// backend type.
///
/// # Invariants
///
/// - When [`exists`](NodeMeta::exists) is `false`, both
///   [`is_directory`](NodeMeta::is_directory) and
///   [`is_file`](NodeMeta::is_file) are `false`.
/// - When it is `true`, at most one of them is `true`.
/// - [`list_dir`](NodeDir::list_dir) fails with `NotADirectory` on
///   anything that is not a directory; [`read`](NodeRead::read) fails with
///   `NotAFile` on anything that is not a file.
pub trait FsNode: NodeMeta + NodeDir + NodeRead {}

// Blanket implementation
impl<T: NodeMeta + NodeDir + NodeRead> FsNode for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_node_is_object_safe() {
        fn _check(_: &dyn FsNode) {}
    }

    #[test]
    fn boxed_node_is_send_and_debug() {
        fn assert_send<T: Send>() {}
        fn assert_debug<T: std::fmt::Debug + ?Sized>() {}
        assert_send::<Box<dyn FsNode>>();
        assert_debug::<dyn FsNode>();
    }
}
