//! Path identifier handling shared by the backends.
//!
//! Host paths are normalized lexically: `~` expansion, absolutization
//! against the current directory, then `.`/`..` and separator cleanup.
//! Symlinks are never resolved here so that a child built by joining a
//! name onto its parent always maps back to that parent.
//!
//! Archive identifiers come in two spellings, `roms.zip!dir/game.a26`
//! (canonical) and `roms.zip/dir/game.a26`.

use std::path::{Component, Path, PathBuf};

/// Separator between archive path and member path in canonical identifiers.
pub(crate) const MEMBER_SEPARATOR: char = '!';

const ARCHIVE_EXTENSION: &str = ".zip";

pub(crate) fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expand `~`, make absolute and normalize a host path.
pub(crate) fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = expand_home(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };
    normalize(&absolute)
}

fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
            .or_else(|| path.strip_prefix("~\\").filter(|_| cfg!(windows)))
    };
    match (rest, home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Lexical normalization without filesystem access.
///
/// Handles `.`, `..`, duplicate and trailing separators. `..` never climbs
/// above the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Lossy text form of a host path.
pub(crate) fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Host path with the home directory shown as `~`.
pub(crate) fn abbreviate_home(path: &Path) -> String {
    let Some(home) = home_dir() else {
        return display(path);
    };
    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~{}{}", std::path::MAIN_SEPARATOR, rest.display()),
        Err(_) => display(path),
    }
}

/// Split an archive identifier into `(archive, member)`.
///
/// The first case-insensitive `.zip` followed by `!`, `/` or `\` ends the
/// archive part. Without such a marker, the first `!` whose prefix names an
/// existing file splits, so `!` inside directory names is left alone.
/// Otherwise the whole identifier names the archive.
pub(crate) fn split_archive_path(path: &str) -> (&str, &str) {
    let lower = path.to_ascii_lowercase();
    for (start, _) in lower.match_indices(ARCHIVE_EXTENSION) {
        let end = start + ARCHIVE_EXTENSION.len();
        match path[end..].chars().next() {
            None => return (path, ""),
            Some(MEMBER_SEPARATOR | '/' | '\\') => return (&path[..end], &path[end + 1..]),
            Some(_) => {}
        }
    }
    path.match_indices(MEMBER_SEPARATOR)
        .map(|(at, _)| (&path[..at], &path[at + 1..]))
        .find(|(archive, _)| Path::new(archive).is_file())
        .unwrap_or((path, ""))
}

/// Normalize a caller supplied member path: `/`-separated, no empty or
/// `.` segments, `..` pops.
pub(crate) fn normalize_member(member: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in member.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
    segments.join("/")
}

/// Normalize a member name read from an archive.
///
/// Returns `None` for names that would escape the archive root: absolute
/// names, drive-qualified names and names containing `..`.
pub(crate) fn sanitize_entry_name(name: &str) -> Option<String> {
    if name.starts_with(['/', '\\']) {
        return None;
    }
    let mut segments = Vec::new();
    for segment in name.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if segments.is_empty() && s.ends_with(':') => return None,
            s => segments.push(s),
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

/// Parent of a normalized member path; `None` for the archive root.
pub(crate) fn member_parent(member: &str) -> Option<&str> {
    if member.is_empty() {
        return None;
    }
    Some(member.rsplit_once('/').map_or("", |(head, _)| head))
}

/// Final segment of a normalized member path.
pub(crate) fn member_name(member: &str) -> &str {
    member.rsplit('/').next().unwrap_or(member)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn normalize_removes_dots_and_duplicate_separators() {
        assert_eq!(normalize(Path::new("/a//b/./c/")), PathBuf::from("/a/b/c"));
        assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
    }

    #[cfg(unix)]
    #[test]
    fn normalize_never_climbs_above_root() {
        assert_eq!(normalize(Path::new("/../../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_makes_relative_paths_absolute() {
        let resolved = resolve_host_path("some/rel/../dir");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/dir"));
    }

    #[test]
    fn resolve_expands_home() {
        if let Some(home) = home_dir() {
            assert_eq!(resolve_host_path("~"), normalize(&home));
            assert_eq!(resolve_host_path("~/roms"), normalize(&home.join("roms")));
        }
    }

    #[test]
    fn abbreviate_home_round_trip() {
        if let Some(home) = home_dir() {
            assert_eq!(abbreviate_home(&home), "~");
            let under = home.join("roms");
            assert_eq!(
                abbreviate_home(&under),
                format!("~{}roms", std::path::MAIN_SEPARATOR)
            );
        }
    }

    #[test]
    fn split_canonical_form() {
        assert_eq!(split_archive_path("/r/roms.zip!a/b.bin"), ("/r/roms.zip", "a/b.bin"));
        assert_eq!(split_archive_path("/r/roms.zip"), ("/r/roms.zip", ""));
    }

    #[test]
    fn split_slash_form_is_case_insensitive() {
        assert_eq!(split_archive_path("/r/ROMS.ZIP/game.a26"), ("/r/ROMS.ZIP", "game.a26"));
        assert_eq!(split_archive_path("C:\\r\\roms.zip\\game.a26"), ("C:\\r\\roms.zip", "game.a26"));
    }

    #[test]
    fn split_skips_zip_inside_directory_names() {
        assert_eq!(
            split_archive_path("/r/x.zipped/roms.zip!g.bin"),
            ("/r/x.zipped/roms.zip", "g.bin")
        );
    }

    #[test]
    fn split_at_separator_after_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let games = dir.path().join("My!Games");
        std::fs::create_dir(&games).unwrap();
        std::fs::write(games.join("pack.dat"), b"").unwrap();
        let pack = display(&games.join("pack.dat"));

        let with_member = format!("{pack}!g.bin");
        assert_eq!(split_archive_path(&with_member), (pack.as_str(), "g.bin"));
        assert_eq!(split_archive_path(&pack), (pack.as_str(), ""));
    }

    #[test]
    fn split_keeps_bang_when_nothing_exists() {
        assert_eq!(
            split_archive_path("/no/such/My!Games/pack.dat"),
            ("/no/such/My!Games/pack.dat", "")
        );
    }

    #[test]
    fn member_normalization() {
        assert_eq!(normalize_member("/a//b/./c/"), "a/b/c");
        assert_eq!(normalize_member("a\\b"), "a/b");
        assert_eq!(normalize_member("a/../b"), "b");
        assert_eq!(normalize_member(""), "");
    }

    #[test]
    fn sanitize_rejects_escaping_names() {
        assert_eq!(sanitize_entry_name("dir/game.bin"), Some("dir/game.bin".into()));
        assert_eq!(sanitize_entry_name("dir/"), Some("dir".into()));
        assert_eq!(sanitize_entry_name("../evil"), None);
        assert_eq!(sanitize_entry_name("/etc/passwd"), None);
        assert_eq!(sanitize_entry_name("C:/evil"), None);
        assert_eq!(sanitize_entry_name("./"), None);
    }

    #[test]
    fn member_helpers() {
        assert_eq!(member_parent(""), None);
        assert_eq!(member_parent("a"), Some(""));
        assert_eq!(member_parent("a/b/c"), Some("a/b"));
        assert_eq!(member_name("a/b/c"), "c");
        assert_eq!(member_name("c"), "c");
    }
}
