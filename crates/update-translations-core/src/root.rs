//! Repository root resolution.
//!
//! The build tool always runs from the repository root, never from the
//! caller's working directory. By default the root is found relative to a
//! fixed anchor directory (the CLI crate's manifest directory, which sits at
//! `crates/<name>/`), so it does not depend on where the binary is invoked.

use crate::error::{InvokeError, InvokeResult};
use std::path::{Path, PathBuf};

/// Number of directory levels between the anchor and the repository root.
pub const ANCHOR_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRoot(PathBuf);

impl RepositoryRoot {
    /// Canonicalize `anchor` and take the directory two levels above it.
    pub fn from_anchor(anchor: &Path) -> InvokeResult<Self> {
        let resolved = canonicalize(anchor)?;
        let root = resolved
            .ancestors()
            .nth(ANCHOR_DEPTH)
            .ok_or_else(|| InvokeError::RootOutOfRange {
                anchor: resolved.clone(),
            })?;
        Ok(Self(root.to_path_buf()))
    }

    /// Use `dir` itself as the root.
    pub fn from_path(dir: &Path) -> InvokeResult<Self> {
        canonicalize(dir).map(Self)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RepositoryRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

fn canonicalize(path: &Path) -> InvokeResult<PathBuf> {
    path.canonicalize()
        .map_err(|source| InvokeError::RepositoryRoot {
            anchor: path.to_path_buf(),
            source,
        })
}
