//! Core types shared by every backend.

use std::fmt;

/// Storage kind a node is bound to.
///
/// The logical set is closed. Which kinds are actually compiled into a
/// build depends on the target platform and cargo features; see
/// [`NodeKind::is_compiled_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// The host operating system's filesystem.
    System,
    /// Members of a ZIP archive.
    Zip,
}

impl NodeKind {
    /// Every logical kind, compiled in or not.
    pub const ALL: [NodeKind; 2] = [NodeKind::System, NodeKind::Zip];

    /// Returns `true` if this build contains a backend for the kind.
    ///
    /// This is a build-time fact: the answer never changes while the
    /// program runs.
    pub const fn is_compiled_in(self) -> bool {
        match self {
            NodeKind::System => cfg!(any(unix, windows)),
            NodeKind::Zip => cfg!(feature = "zip"),
        }
    }

    /// Short lowercase name, used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::System => "system",
            NodeKind::Zip => "zip",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds with a backend in this build, in [`NodeKind::ALL`] order.
pub fn available_kinds() -> Vec<NodeKind> {
    NodeKind::ALL
        .into_iter()
        .filter(|kind| kind.is_compiled_in())
        .collect()
}

/// What a node currently resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryType {
    /// Regular file (symlinks are followed).
    File,
    /// Directory, archive root, or directory-like archive prefix.
    Directory,
    /// Exists but is neither a file nor a directory (device, FIFO, socket).
    Other,
    /// Nothing resolvable, including dangling symlinks.
    Missing,
}

/// Point-in-time snapshot of a node's attributes.
///
/// Built with [`NodeExt::info`](crate::NodeExt::info). Useful when a
/// listing has to outlive the nodes it came from, e.g. for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeInfo {
    /// Final path component.
    pub name: String,
    /// Full identifier, reusable with [`create`](crate::create).
    pub path: String,
    /// Backend the node belongs to.
    pub kind: NodeKind,
    /// Resolved entry type at snapshot time.
    pub entry_type: EntryType,
    /// Size in bytes, when cheaply known.
    pub size: Option<u64>,
}

/// Which entries a filtered listing keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Files and directories.
    #[default]
    All,
    /// Files only.
    FilesOnly,
    /// Directories only.
    DirectoriesOnly,
}

/// Options for [`NodeExt::list_with`](crate::NodeExt::list_with).
///
/// # Example
///
/// ```rust
/// use fsnode::{ListMode, ListOptions};
///
/// let opts = ListOptions::new()
///     .mode(ListMode::All)
///     .extensions(["a26", "bin"])
///     .directories_first(true);
/// assert!(opts.matches_extension("Pitfall.A26"));
/// assert!(!opts.matches_extension("readme.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Entry types to keep.
    pub mode: ListMode,
    /// Keep entries whose name starts with `.`.
    pub include_hidden: bool,
    /// Lowercase extensions (without dot) files must carry. Empty keeps all.
    pub extensions: Vec<String>,
    /// Group directories ahead of files.
    pub directories_first: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            mode: ListMode::All,
            include_hidden: false,
            extensions: Vec::new(),
            directories_first: true,
        }
    }
}

impl ListOptions {
    /// Default options: everything but hidden entries, directories first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the listing mode.
    pub fn mode(mut self, mode: ListMode) -> Self {
        self.mode = mode;
        self
    }

    /// Include or exclude hidden entries.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Restrict files to the given extensions (case-insensitive).
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Group directories ahead of files.
    pub fn directories_first(mut self, first: bool) -> Self {
        self.directories_first = first;
        self
    }

    /// Returns `true` if a file called `name` passes the extension filter.
    pub fn matches_extension(&self, name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_kind_compiled_on_hosted_targets() {
        assert_eq!(NodeKind::System.is_compiled_in(), cfg!(any(unix, windows)));
    }

    #[test]
    fn zip_kind_follows_feature() {
        assert_eq!(NodeKind::Zip.is_compiled_in(), cfg!(feature = "zip"));
    }

    #[test]
    fn available_kinds_is_subset_of_all() {
        let kinds = available_kinds();
        assert!(kinds.iter().all(|k| NodeKind::ALL.contains(k)));
        assert!(kinds.iter().all(|k| k.is_compiled_in()));
    }

    #[test]
    fn kind_display() {
        assert_eq!(NodeKind::System.to_string(), "system");
        assert_eq!(NodeKind::Zip.to_string(), "zip");
    }

    #[test]
    fn list_options_defaults() {
        let opts = ListOptions::new();
        assert_eq!(opts.mode, ListMode::All);
        assert!(!opts.include_hidden);
        assert!(opts.extensions.is_empty());
        assert!(opts.directories_first);
    }

    #[test]
    fn extension_filter_normalizes_input() {
        let opts = ListOptions::new().extensions([".BIN", "a26"]);
        assert_eq!(opts.extensions, vec!["bin".to_string(), "a26".to_string()]);
        assert!(opts.matches_extension("combat.bin"));
        assert!(opts.matches_extension("COMBAT.BIN"));
        assert!(!opts.matches_extension("combat"));
        assert!(!opts.matches_extension(".bin"));
    }

    #[test]
    fn empty_extension_filter_keeps_everything() {
        let opts = ListOptions::new();
        assert!(opts.matches_extension("anything"));
        assert!(opts.matches_extension("notes.txt"));
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NodeKind>();
        assert_send_sync::<EntryType>();
        assert_send_sync::<NodeInfo>();
        assert_send_sync::<ListOptions>();
    }
}
