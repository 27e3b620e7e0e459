//! Content access for file nodes.

use crate::NodeError;

/// Whole-content reads.
///
/// Reads are synchronous and load the entire entry; there is no partial
/// or streaming access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn NodeRead`.
pub trait NodeRead: Send {
    /// Read the entire content.
    ///
    /// On success the result holds exactly [`size`](crate::NodeMeta::size)
    /// bytes whenever the size is known.
    ///
    /// # Errors
    ///
    /// - [`NodeError::NotAFile`] if the node is not a file
    /// - [`NodeError::Io`] on OS level failures
    /// - [`NodeError::Archive`] / [`NodeError::ChecksumMismatch`] on
    ///   undecodable or corrupt archive members
    fn read(&self) -> Result<Vec<u8>, NodeError>;

    /// Append the content to `buf` and return the number of bytes added.
    ///
    /// `buf` is left untouched on error.
    fn read_into(&self, buf: &mut Vec<u8>) -> Result<usize, NodeError> {
        let data = self.read()?;
        buf.extend_from_slice(&data);
        Ok(data.len())
    }
}
