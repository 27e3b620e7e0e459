//! # fsnode
//!
//! One node abstraction over the native filesystem and ZIP archives, for
//! ROM browsers and loaders that should not care where a ROM lives.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fsnode::{create, NodeKind};
//!
//! # fn main() -> Result<(), fsnode::NodeError> {
//! // A directory on disk
//! if let Some(dir) = create("/tmp/games", NodeKind::System)? {
//!     for child in dir.list_dir()? {
//!         println!("{} ({:?} bytes)", child.name(), child.size());
//!     }
//! }
//!
//! // A member of an archive
//! if let Some(rom) = create("/tmp/roms.zip!game1.a26", NodeKind::Zip)? {
//!     let bytes = rom.read()?;
//!     println!("{} bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`create`] | Build a node for a path and a [`NodeKind`] |
//! | [`FsNode`] | The node contract: [`NodeMeta`] + [`NodeDir`] + [`NodeRead`] |
//! | [`NodeKind`] | Which backend a node belongs to |
//! | [`NodeError`] | Error type with path context |
//! | [`NodeExt`] | Filtered listings, text reads, [`NodeInfo`] snapshots |
//!
//! ---
//!
//! ## Backends
//!
//! | Kind | Backend | Present when |
//! |------|---------|--------------|
//! | [`NodeKind::System`] | POSIX or Windows node | target is `unix` or `windows` |
//! | [`NodeKind::Zip`] | ZIP archive node | `zip` feature (on by default) |
//!
//! [`create`] returns `Ok(None)` for a kind that is not compiled in, so
//! "unavailable in this build" can never be confused with "not found"
//! (which is `exists() == false` on a node that was created fine).
//!
//! ### Paths
//!
//! - Native: absolute or relative host paths, `~` for the home directory.
//!   Paths are normalized lexically; symlinks are followed only when
//!   querying type, size or content.
//! - ZIP: `roms.zip` for the archive root, `roms.zip!dir/game.a26` for a
//!   member (`roms.zip/dir/game.a26` is accepted too).
//!
//! ### Ordering
//!
//! [`list_dir`](NodeDir::list_dir) returns children in byte order of
//! their names on every backend, including archives (central-directory
//! order is not used). [`NodeExt::list_with`] offers case-insensitive,
//! directories-first ordering for display.
//!
//! ---
//!
//! ## Thread Safety
//!
//! Operations are synchronous and blocking. Nodes are `Send` but not
//! `Sync`; create one node per thread, or wrap a shared one in a mutex.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `zip` | ZIP archive backend (default) |
//! | `serde` | Serialization for [`NodeKind`], [`EntryType`], [`NodeInfo`]; `read_json` |
//!
//! ---
//!
//! ## Diagnostics
//!
//! The crate emits `tracing` events (archive opens, listings, skipped
//! archive members) and never prints. Install a subscriber to see them.

// Private modules
#[cfg(feature = "zip")]
mod archive;
mod error;
mod ext;
mod factory;
#[cfg(any(unix, windows))]
mod native;
#[cfg_attr(not(feature = "zip"), allow(dead_code))]
mod path;
mod traits;
mod types;

// Public re-exports - error types
pub use error::NodeError;

// Public re-exports - core types
pub use types::{EntryType, ListMode, ListOptions, NodeInfo, NodeKind, available_kinds};

// Public re-exports - node traits
pub use traits::{FsNode, NodeDir, NodeList, NodeMeta, NodeRead};

// Public re-exports - factory
pub use factory::create;

// Public re-exports - extensions
pub use ext::NodeExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::NodeExtJson;
