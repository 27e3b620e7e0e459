//! Error types for node operations.

/// Node error type with contextual variants.
///
/// Every variant names the node path it concerns. "Not found" is not an
/// error here: a missing entry is reported by [`exists`](crate::NodeMeta::exists)
/// returning `false`, and an unavailable backend by [`create`](crate::create)
/// returning `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// use fsnode::NodeError;
///
/// let err = NodeError::NotAFile { path: "/roms".into() };
/// assert_eq!(err.to_string(), "not a file: /roms");
/// assert!(!err.is_io_failure());
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The path identifier cannot be interpreted by the backend.
    #[error("invalid path: {path:?}")]
    InvalidPath {
        /// The rejected identifier.
        path: String,
    },

    /// Expected a directory but found something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: String,
    },

    /// Expected a file but found something else.
    #[error("not a file: {path}")]
    NotAFile {
        /// The path that is not a file.
        path: String,
    },

    /// I/O error reported by the operating system.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The archive or one of its members could not be decoded.
    #[error("archive error: {path} ({details})")]
    Archive {
        /// The archive or member path.
        path: String,
        /// Decoder message.
        details: String,
    },

    /// Decoded content does not match the checksum stored in the archive.
    #[error("checksum mismatch: {path} (expected {expected:08x}, got {actual:08x})")]
    ChecksumMismatch {
        /// The member path.
        path: String,
        /// CRC-32 recorded in the central directory.
        expected: u32,
        /// CRC-32 of the decoded bytes.
        actual: u32,
    },

    /// Content is not in the expected form (e.g. not UTF-8).
    #[error("invalid data: {path} ({details})")]
    InvalidData {
        /// The path with invalid data.
        path: String,
        /// Details about the invalid data.
        details: String,
    },

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl NodeError {
    /// Returns `true` for failures of the underlying medium.
    ///
    /// These are the errors a caller may choose to retry or report; type
    /// mismatches and bad identifiers are programming errors and return
    /// `false`.
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            NodeError::Io { .. } | NodeError::Archive { .. } | NodeError::ChecksumMismatch { .. }
        )
    }

    pub(crate) fn io(operation: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        NodeError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
