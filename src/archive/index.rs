//! Parsed ZIP central directory.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::{Read, Seek};

use zip::ZipArchive;

use super::zip_error;
use crate::NodeError;
use crate::path::{member_parent, sanitize_entry_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberKind {
    File,
    Directory,
}

/// One addressable path inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Member {
    pub(crate) kind: MemberKind,
    /// Uncompressed size.
    pub(crate) size: u64,
    pub(crate) crc32: u32,
    /// Position in the central directory; `None` for directories that are
    /// only implied by deeper member names.
    pub(crate) index: Option<usize>,
}

impl Member {
    fn implied_directory() -> Self {
        Self {
            kind: MemberKind::Directory,
            size: 0,
            crc32: 0,
            index: None,
        }
    }
}

/// Immutable member table keyed by normalized member path.
///
/// Built once when an archive is opened and shared by every node of that
/// archive. Keys are kept sorted, so listings come out in byte order.
#[derive(Debug, Default)]
pub(crate) struct ArchiveIndex {
    members: BTreeMap<String, Member>,
}

impl ArchiveIndex {
    /// Read the central directory of `archive` without decompressing
    /// anything.
    pub(crate) fn read_from<R: Read + Seek>(
        archive: &mut ZipArchive<R>,
        archive_path: &str,
    ) -> Result<Self, NodeError> {
        let mut index = Self::default();
        for i in 0..archive.len() {
            let entry = archive
                .by_index_raw(i)
                .map_err(|e| zip_error("read central directory", archive_path, e))?;
            let member = Member {
                kind: if entry.is_dir() {
                    MemberKind::Directory
                } else {
                    MemberKind::File
                },
                size: entry.size(),
                crc32: entry.crc32(),
                index: Some(i),
            };
            index.insert(entry.name(), member, archive_path);
        }
        Ok(index)
    }

    fn insert(&mut self, raw_name: &str, member: Member, archive_path: &str) {
        let Some(name) = sanitize_entry_name(raw_name) else {
            tracing::warn!(archive = archive_path, member = raw_name, "skipping unsafe archive member");
            return;
        };

        // A name with members below it is a directory, whatever order the
        // records come in.
        let mut dir = member_parent(&name);
        while let Some(parent) = dir.filter(|d| !d.is_empty()) {
            match self.members.entry(parent.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(Member::implied_directory());
                }
                Entry::Occupied(mut slot) if slot.get().kind == MemberKind::File => {
                    tracing::warn!(archive = archive_path, member = parent, "archive file shadowed by directory");
                    slot.insert(Member::implied_directory());
                }
                Entry::Occupied(_) => {}
            }
            dir = member_parent(parent);
        }

        match member.kind {
            MemberKind::Directory => {
                self.members.insert(name, member);
            }
            MemberKind::File => match self.members.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(member);
                }
                Entry::Occupied(slot) => {
                    tracing::warn!(archive = archive_path, member = %slot.key(), "archive file shadowed by directory");
                }
            },
        }
    }

    pub(crate) fn get(&self, member: &str) -> Option<&Member> {
        self.members.get(member)
    }

    /// Kind of `member`; the empty path is the archive root.
    pub(crate) fn kind_of(&self, member: &str) -> Option<MemberKind> {
        if member.is_empty() {
            Some(MemberKind::Directory)
        } else {
            self.get(member).map(|m| m.kind)
        }
    }

    /// Full paths of the direct children of `dir`, in byte order.
    pub(crate) fn children<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.members
            .keys()
            .filter(move |key| member_parent(key) == Some(dir))
            .map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}
