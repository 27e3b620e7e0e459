//! Backend selection.

use crate::{FsNode, NodeError, NodeKind};

/// Create a node of the given kind for `path`.
///
/// The backend is picked at build time: the native backend matching the
/// target OS for [`NodeKind::System`], the ZIP backend (cargo feature
/// `zip`) for [`NodeKind::Zip`].
///
/// # Returns
///
/// - `Ok(Some(node))` when a backend is compiled in. The path does not
///   have to exist; check [`exists`](crate::NodeMeta::exists).
/// - `Ok(None)` when this build has no backend for `kind`. That is a
///   property of the build, not of `path`.
///
/// # Errors
///
/// Whatever the selected backend's constructor reports, e.g.
/// [`NodeError::InvalidPath`] for an empty POSIX path or
/// [`NodeError::Archive`] for a file that is not a ZIP archive.
///
/// # Example
///
/// ```rust
/// use fsnode::{create, NodeKind};
///
/// let node = create("/no/such/path", NodeKind::System).unwrap();
/// if let Some(node) = node {
///     assert!(!node.exists());
///     assert!(!node.is_file());
/// }
/// ```
pub fn create(path: &str, kind: NodeKind) -> Result<Option<Box<dyn FsNode>>, NodeError> {
    match kind {
        NodeKind::System => create_native(path),
        NodeKind::Zip => create_zip(path),
    }
}

#[cfg(any(unix, windows))]
fn create_native(path: &str) -> Result<Option<Box<dyn FsNode>>, NodeError> {
    Ok(Some(Box::new(crate::native::NativeNode::new(path)?)))
}

#[cfg(not(any(unix, windows)))]
fn create_native(_path: &str) -> Result<Option<Box<dyn FsNode>>, NodeError> {
    Ok(None)
}

#[cfg(feature = "zip")]
fn create_zip(path: &str) -> Result<Option<Box<dyn FsNode>>, NodeError> {
    Ok(Some(Box::new(crate::archive::ZipNode::open(path)?)))
}

#[cfg(not(feature = "zip"))]
fn create_zip(_path: &str) -> Result<Option<Box<dyn FsNode>>, NodeError> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_matches_kind_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().into_owned();
        for kind in NodeKind::ALL {
            let node = create(&path, kind).unwrap();
            assert_eq!(node.is_some(), kind.is_compiled_in(), "{kind}");
        }
    }

    #[test]
    fn created_node_keeps_its_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().into_owned();
        for kind in crate::available_kinds() {
            let node = create(&path, kind).unwrap().unwrap();
            assert_eq!(node.kind(), kind);
        }
    }

    #[cfg(unix)]
    #[test]
    fn construction_errors_propagate() {
        assert!(matches!(
            create("", NodeKind::System),
            Err(NodeError::InvalidPath { .. })
        ));
    }
}
