//! Anchor detection and user path normalization.
//!
//! The anchor is the workspace that compiled this crate; `build.rs` captures
//! it as `LABROOT_ANCHOR_DIR`. Public API is exposed through sibling modules.

use std::env;
use std::path::{Component, Path, PathBuf};

use super::error::PathError;

/// Absolute workspace root recorded at build time.
const ANCHOR_DIR: &str = env!("LABROOT_ANCHOR_DIR");

/// Return the absolute, resolved directory the project layout is anchored to.
///
/// Symlinks and `.`/`..` segments are resolved through the filesystem when
/// the directory exists. When it does not (a binary copied to another
/// machine), the lexically normalized path is returned instead, so this
/// never fails.
pub fn resolve_base_directory() -> PathBuf {
    resolve_existing(Path::new(ANCHOR_DIR))
}

/// Canonicalize `path`, falling back to lexical normalization.
pub(super) fn resolve_existing(path: &Path) -> PathBuf {
    path.canonicalize()
        .unwrap_or_else(|_| normalize_lexically(path))
}

/// Remove `.` and `..` segments without touching the filesystem.
pub(super) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))?
    };

    Ok(resolve_existing(&absolute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn base_directory_is_absolute_and_stable() {
        let first = resolve_base_directory();
        let second = resolve_base_directory();
        assert!(first.is_absolute());
        assert_eq!(first, second);
    }

    #[test]
    fn base_directory_contains_the_workspace_manifest() {
        let base = resolve_base_directory();
        assert!(base.join("Cargo.toml").is_file());
        assert!(base.join("crates").join("labroot-core").is_dir());
    }

    #[test]
    fn lexical_normalization_drops_dot_segments() {
        let normalized = normalize_lexically(Path::new("/app/./data/../models"));
        assert_eq!(normalized, PathBuf::from("/app/models"));
    }

    #[test]
    fn lexical_normalization_stops_at_root() {
        let normalized = normalize_lexically(Path::new("/../app"));
        assert_eq!(normalized, PathBuf::from("/app"));
    }

    #[test]
    fn missing_paths_fall_back_to_lexical_form() {
        let resolved = resolve_existing(Path::new("/definitely/not/here/../there"));
        assert_eq!(resolved, PathBuf::from("/definitely/not/there"));
    }

    #[test]
    fn existing_paths_are_canonicalized() {
        let temp = tempdir().unwrap();
        let inner = temp.path().join("inner");
        std::fs::create_dir(&inner).unwrap();

        let dotted = inner.join("..").join("inner");
        assert_eq!(resolve_existing(&dotted), inner.canonicalize().unwrap());
    }

    #[test]
    fn empty_user_path_is_rejected() {
        assert!(matches!(normalize_user_path("   "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn absolute_user_path_is_kept() {
        let resolved = normalize_user_path("/srv/project-that-does-not-exist").unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/project-that-does-not-exist"));
    }

    #[test]
    fn relative_user_path_is_made_absolute() {
        let resolved = normalize_user_path("some/relative/dir").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/dir"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if dirs::home_dir().is_some() {
            let resolved = normalize_user_path("~/labroot-test-dir").unwrap();
            assert!(resolved.is_absolute());
            assert!(resolved.ends_with("labroot-test-dir"));
        }
    }
}
