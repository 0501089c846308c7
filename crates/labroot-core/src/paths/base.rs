//! Base directory selection.
//!
//! The compiled anchor is the default. Adapters may override it with an
//! explicit path or the `LABROOT_BASE_DIR` environment variable.

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::error::PathError;
use super::platform::{normalize_user_path, resolve_base_directory};

/// Environment variable that overrides the anchor directory.
pub const BASE_DIR_ENV: &str = "LABROOT_BASE_DIR";

/// How the base directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDirSource {
    /// The caller passed an explicit path (e.g. `--base-dir`).
    Explicit,
    /// The path came from `LABROOT_BASE_DIR` / `.env`.
    EnvVar,
    /// The workspace this crate was built from.
    Anchor,
}

impl BaseDirSource {
    /// Lowercase name, matching the JSON spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "env_var",
            Self::Anchor => "anchor",
        }
    }
}

impl fmt::Display for BaseDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution result for the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirResolution {
    /// The resolved, absolute base directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: BaseDirSource,
}

/// Resolve the base directory from an explicit override, env var, or anchor.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `LABROOT_BASE_DIR` environment variable (ignored when blank)
/// 3. [`resolve_base_directory`]
pub fn resolve_base_dir_with(explicit: Option<&str>) -> Result<BaseDirResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(BaseDirResolution {
            path: normalize_user_path(path_str)?,
            source: BaseDirSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(BASE_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(BaseDirResolution {
                path: normalize_user_path(&env_path)?,
                source: BaseDirSource::EnvVar,
            });
        }
    }

    Ok(BaseDirResolution {
        path: resolve_base_directory(),
        source: BaseDirSource::Anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn explicit_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(BASE_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_base_dir_with(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved.source, BaseDirSource::Explicit);
        assert!(resolved.path.ends_with("explicit"));
    }

    #[test]
    fn env_value_is_used_without_explicit() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(BASE_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_base_dir_with(None).unwrap();
        assert_eq!(resolved.source, BaseDirSource::EnvVar);
        assert!(resolved.path.ends_with("from-env"));
    }

    #[test]
    fn blank_env_falls_back_to_anchor() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(BASE_DIR_ENV, "  ");

        let resolved = resolve_base_dir_with(None).unwrap();
        assert_eq!(resolved.source, BaseDirSource::Anchor);
        assert_eq!(resolved.path, resolve_base_directory());
    }

    #[test]
    fn unset_env_falls_back_to_anchor() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(BASE_DIR_ENV);

        let resolved = resolve_base_dir_with(None).unwrap();
        assert_eq!(resolved.source, BaseDirSource::Anchor);
    }

    #[test]
    fn display_matches_serialized_name() {
        for source in [BaseDirSource::Explicit, BaseDirSource::EnvVar, BaseDirSource::Anchor] {
            let json = serde_json::to_value(source).unwrap();
            assert_eq!(json, source.to_string());
        }
    }

    #[test]
    fn empty_explicit_is_rejected() {
        let err = resolve_base_dir_with(Some("")).unwrap_err();
        assert!(matches!(err, PathError::EmptyPath));
    }
}
