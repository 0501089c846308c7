//! Project directory layout.
//!
//! Every named location is a constant relative path joined onto the base
//! directory. `ProjectPaths` holds the derived values and is built once by
//! the composition root, then passed by reference to whatever needs it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::ensure::{DirectoryCreationStrategy, ensure_directory, ensure_directory_exists};
use super::error::PathError;

/// The fixed set of named project locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedPath {
    /// Parent of the raw and processed data directories.
    DataDir,
    /// Untouched input data.
    DataRaw,
    /// Data after preprocessing.
    DataProcessed,
    /// Trained model artifacts.
    ModelsDir,
    /// Generated outputs.
    OutputsDir,
}

impl NamedPath {
    /// All named paths in declaration order.
    pub const ALL: [Self; 5] = [
        Self::DataDir,
        Self::DataRaw,
        Self::DataProcessed,
        Self::ModelsDir,
        Self::OutputsDir,
    ];

    /// The paths created by [`ProjectPaths::ensure`].
    ///
    /// `DataDir` is absent: it comes into existence as the parent of
    /// `DataRaw` and `DataProcessed`.
    pub const ENSURED: [Self; 4] = [
        Self::DataRaw,
        Self::DataProcessed,
        Self::ModelsDir,
        Self::OutputsDir,
    ];

    /// Path relative to the base directory.
    pub const fn relative(self) -> &'static str {
        match self {
            Self::DataDir => "data",
            Self::DataRaw => "data/raw",
            Self::DataProcessed => "data/processed",
            Self::ModelsDir => "models",
            Self::OutputsDir => "outputs",
        }
    }

    /// Lowercase key used in `key = value` output.
    pub const fn key(self) -> &'static str {
        match self {
            Self::DataDir => "data_dir",
            Self::DataRaw => "data_raw",
            Self::DataProcessed => "data_processed",
            Self::ModelsDir => "models_dir",
            Self::OutputsDir => "outputs_dir",
        }
    }

    /// Constant-style name consumers refer to (`DATA_RAW`, `MODELS_DIR`, ...).
    pub const fn constant_name(self) -> &'static str {
        match self {
            Self::DataDir => "DATA_DIR",
            Self::DataRaw => "DATA_RAW",
            Self::DataProcessed => "DATA_PROCESSED",
            Self::ModelsDir => "MODELS_DIR",
            Self::OutputsDir => "OUTPUTS_DIR",
        }
    }

    /// Whether [`ProjectPaths::ensure`] creates this path directly.
    pub const fn is_ensured(self) -> bool {
        !matches!(self, Self::DataDir)
    }
}

impl fmt::Display for NamedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Join a constant relative path onto `base`. No filesystem access.
pub fn derive(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

/// What is currently on disk at a named path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathState {
    /// An existing directory.
    Present,
    /// Nothing exists at the path.
    Missing,
    /// Something other than a directory occupies the path.
    NotADirectory,
}

impl PathState {
    fn inspect(path: &Path) -> Self {
        if path.is_dir() {
            Self::Present
        } else if path.exists() {
            Self::NotADirectory
        } else {
            Self::Missing
        }
    }
}

/// State of one named path, as reported by [`ProjectPaths::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStatus {
    pub name: NamedPath,
    pub path: PathBuf,
    pub state: PathState,
}

/// Resolved project directories.
///
/// Every field except `base_dir` is derived from `base_dir` through
/// [`NamedPath::relative`]; the only constructor is [`ProjectPaths::from_base`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    base_dir: PathBuf,
    data_dir: PathBuf,
    data_raw: PathBuf,
    data_processed: PathBuf,
    models_dir: PathBuf,
    outputs_dir: PathBuf,
}

impl ProjectPaths {
    /// Derive every named path from `base`.
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base_dir = base.into();
        Self {
            data_dir: derive(&base_dir, NamedPath::DataDir.relative()),
            data_raw: derive(&base_dir, NamedPath::DataRaw.relative()),
            data_processed: derive(&base_dir, NamedPath::DataProcessed.relative()),
            models_dir: derive(&base_dir, NamedPath::ModelsDir.relative()),
            outputs_dir: derive(&base_dir, NamedPath::OutputsDir.relative()),
            base_dir,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_raw(&self) -> &Path {
        &self.data_raw
    }

    pub fn data_processed(&self) -> &Path {
        &self.data_processed
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn outputs_dir(&self) -> &Path {
        &self.outputs_dir
    }

    /// Look up a named path.
    pub fn get(&self, name: NamedPath) -> &Path {
        match name {
            NamedPath::DataDir => &self.data_dir,
            NamedPath::DataRaw => &self.data_raw,
            NamedPath::DataProcessed => &self.data_processed,
            NamedPath::ModelsDir => &self.models_dir,
            NamedPath::OutputsDir => &self.outputs_dir,
        }
    }

    /// All named paths in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NamedPath, &Path)> {
        NamedPath::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    /// The paths [`ensure`](Self::ensure) creates.
    pub fn ensured(&self) -> impl Iterator<Item = (NamedPath, &Path)> {
        NamedPath::ENSURED
            .into_iter()
            .map(|name| (name, self.get(name)))
    }

    /// Create every ensured directory that is missing.
    ///
    /// Idempotent and safe to race against other processes doing the same.
    /// Stops at the first failure; directories already committed stay on disk.
    pub fn ensure(&self) -> Result<(), PathError> {
        for (_, path) in self.ensured() {
            ensure_directory_exists(path)?;
        }
        info!(base_dir = %self.base_dir.display(), "project directories ready");
        Ok(())
    }

    /// Check every ensured path without creating anything.
    ///
    /// Returns one error per path that is missing (`DirectoryNotFound`) or
    /// occupied by something else (`NotADirectory`); empty when the layout
    /// is complete.
    pub fn verify(&self) -> Vec<PathError> {
        self.ensured()
            .filter_map(|(_, path)| {
                ensure_directory(path, DirectoryCreationStrategy::Disallow).err()
            })
            .collect()
    }

    /// Inspect every named path without modifying anything.
    pub fn status(&self) -> Vec<PathStatus> {
        self.iter()
            .map(|(name, path)| PathStatus {
                name,
                path: path.to_path_buf(),
                state: PathState::inspect(path),
            })
            .collect()
    }
}

impl fmt::Display for ProjectPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base_dir = {}", self.base_dir.display())?;
        for (name, path) in self.iter() {
            write!(f, "\n{name} = {}", path.display())?;
        }
        Ok(())
    }
}
