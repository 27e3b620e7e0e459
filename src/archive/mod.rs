//! ZIP archive backend.
//!
//! A node addresses either the archive itself (`roms.zip`, a directory
//! whose children are the top-level members) or a path inside it
//! (`roms.zip!dir/game.a26`). The central directory is parsed once when
//! the archive is opened; member content is only decompressed by
//! [`read`](NodeRead::read).
//!
//! Listings are in byte order of member names, not central-directory
//! order, so archive and native listings sort the same way.

mod index;

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use zip::ZipArchive;
use zip::result::ZipError;

use self::index::{ArchiveIndex, Member, MemberKind};
use crate::path::{
    MEMBER_SEPARATOR, abbreviate_home, display, member_name, member_parent,
    normalize_member, resolve_host_path, split_archive_path,
};
use crate::{FsNode, NodeDir, NodeError, NodeKind, NodeList, NodeMeta, NodeRead};

type Reader = ZipArchive<BufReader<File>>;

/// Largest up-front allocation made from a size recorded in the archive.
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

pub(crate) fn zip_error(operation: &'static str, path: &str, error: ZipError) -> NodeError {
    match error {
        ZipError::Io(source) => NodeError::io(operation, path, source),
        other => NodeError::Archive {
            path: path.to_string(),
            details: other.to_string(),
        },
    }
}

fn open_reader(archive: &Path) -> Result<Reader, NodeError> {
    let file = File::open(archive).map_err(|e| NodeError::io("open", display(archive), e))?;
    ZipArchive::new(BufReader::new(file)).map_err(|e| zip_error("open", &display(archive), e))
}

/// Node inside (or at the root of) a ZIP archive.
///
/// The node that opened the archive keeps its reader; nodes derived from
/// it through [`parent`](NodeDir::parent) or
/// [`list_dir`](NodeDir::list_dir) share the parsed member table and open
/// their own reader on first read. Readers are closed when their node is
/// dropped.
#[derive(Debug)]
pub(crate) struct ZipNode {
    archive: PathBuf,
    member: String,
    /// `None` when the archive file does not exist.
    index: Option<Arc<ArchiveIndex>>,
    reader: RefCell<Option<Reader>>,
}

impl ZipNode {
    /// Open the archive named by `path` and address the member it names.
    ///
    /// A missing archive file yields a node that does not exist. An
    /// existing file that cannot be opened or parsed is an error, and no
    /// node is produced.
    pub(crate) fn open(path: &str) -> Result<Self, NodeError> {
        let (archive, member) = split_archive_path(path);
        if archive.is_empty() {
            return Err(NodeError::InvalidPath {
                path: path.to_string(),
            });
        }
        let archive = resolve_host_path(archive);
        let member = normalize_member(member);

        if !archive.is_file() {
            tracing::debug!(archive = %archive.display(), "zip archive not found");
            return Ok(Self {
                archive,
                member,
                index: None,
                reader: RefCell::new(None),
            });
        }

        let mut reader = open_reader(&archive)?;
        let index = ArchiveIndex::read_from(&mut reader, &display(&archive))?;
        tracing::debug!(archive = %archive.display(), members = index.len(), "opened zip archive");

        Ok(Self {
            archive,
            member,
            index: Some(Arc::new(index)),
            reader: RefCell::new(Some(reader)),
        })
    }

    fn relative(&self, member: String) -> Self {
        Self {
            archive: self.archive.clone(),
            member,
            index: self.index.clone(),
            reader: RefCell::new(None),
        }
    }

    fn member_kind(&self) -> Option<MemberKind> {
        self.index.as_ref()?.kind_of(&self.member)
    }

    fn file_member(&self) -> Option<&Member> {
        self.index
            .as_ref()?
            .get(&self.member)
            .filter(|m| m.kind == MemberKind::File)
    }

    fn decode(&self, reader: &mut Reader, member: &Member) -> Result<Vec<u8>, NodeError> {
        let path = self.path();
        let index = member
            .index
            .ok_or_else(|| NodeError::NotAFile { path: path.clone() })?;
        let mut file = reader
            .by_index(index)
            .map_err(|e| zip_error("decompress", &path, e))?;

        let mut data = Vec::with_capacity(member.size.min(MAX_PREALLOCATION) as usize);
        let outcome = file.read_to_end(&mut data);
        let actual = crc32fast::hash(&data);
        let mismatch = actual != member.crc32;

        match outcome {
            Ok(_) if !mismatch => Ok(data),
            Ok(_) => Err(NodeError::ChecksumMismatch {
                path,
                expected: member.crc32,
                actual,
            }),
            // The decoder checks the CRC itself once the last byte is out
            // and fails with InvalidData; the bytes read so far are kept.
            Err(e)
                if e.kind() == ErrorKind::InvalidData
                    && data.len() as u64 == member.size
                    && mismatch =>
            {
                tracing::debug!(path = %path, error = %e, "member checksum mismatch");
                Err(NodeError::ChecksumMismatch {
                    path,
                    expected: member.crc32,
                    actual,
                })
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(NodeError::Archive {
                path,
                details: e.to_string(),
            }),
            Err(e) => Err(NodeError::io("decompress", path, e)),
        }
    }
}

impl NodeMeta for ZipNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Zip
    }

    fn name(&self) -> String {
        if self.member.is_empty() {
            match self.archive.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => display(&self.archive),
            }
        } else {
            member_name(&self.member).to_string()
        }
    }

    fn path(&self) -> String {
        if self.member.is_empty() {
            display(&self.archive)
        } else {
            format!("{}{MEMBER_SEPARATOR}{}", display(&self.archive), self.member)
        }
    }

    fn short_path(&self) -> String {
        if self.member.is_empty() {
            abbreviate_home(&self.archive)
        } else {
            format!("{}{MEMBER_SEPARATOR}{}", abbreviate_home(&self.archive), self.member)
        }
    }

    fn exists(&self) -> bool {
        self.member_kind().is_some()
    }

    fn is_directory(&self) -> bool {
        self.member_kind() == Some(MemberKind::Directory)
    }

    fn is_file(&self) -> bool {
        self.member_kind() == Some(MemberKind::File)
    }

    fn size(&self) -> Option<u64> {
        self.file_member().map(|m| m.size)
    }
}

impl NodeDir for ZipNode {
    fn parent(&self) -> Option<Box<dyn FsNode>> {
        match member_parent(&self.member) {
            Some(parent) => Some(Box::new(self.relative(parent.to_string()))),
            None => native_parent(&self.archive),
        }
    }

    fn list_dir(&self) -> Result<NodeList, NodeError> {
        let Some(index) = self.index.as_ref().filter(|_| self.is_directory()) else {
            return Err(NodeError::NotADirectory { path: self.path() });
        };

        let children: NodeList = index
            .children(&self.member)
            .map(|child| Box::new(self.relative(child.to_string())) as Box<dyn FsNode>)
            .collect();
        tracing::trace!(path = %self.path(), count = children.len(), "listed zip directory");
        Ok(children)
    }
}

impl NodeRead for ZipNode {
    fn read(&self) -> Result<Vec<u8>, NodeError> {
        let Some(member) = self.file_member() else {
            return Err(NodeError::NotAFile { path: self.path() });
        };

        let mut reader = match self.reader.take() {
            Some(reader) => reader,
            None => open_reader(&self.archive)?,
        };
        let result = self.decode(&mut reader, member);
        self.reader.replace(Some(reader));
        result
    }
}

/// The host directory holding the archive file.
#[cfg(any(unix, windows))]
fn native_parent(archive: &Path) -> Option<Box<dyn FsNode>> {
    use crate::native::NativeNode;

    archive
        .parent()
        .map(|dir| Box::new(NativeNode::from_normalized(dir.to_path_buf())) as Box<dyn FsNode>)
}

#[cfg(not(any(unix, windows)))]
fn native_parent(_archive: &Path) -> Option<Box<dyn FsNode>> {
    None
}
