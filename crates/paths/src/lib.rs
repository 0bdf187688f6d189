#![deny(unused_must_use)]

use std::env::JoinPathsError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// The one environment variable this crate assembles values for.
pub const PATH_VAR: &str = "PATH";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The resource path {path:?} has no containing directory")]
    NoContainingDir { path: PathBuf },
    #[error("Unable to determine the working directory: {error}")]
    WorkingDir { error: std::io::Error },
    #[error("Failed to resolve {path:?} against the working directory: {error}")]
    Absolutize { path: PathBuf, error: std::io::Error },
    #[error("Failed to assemble the PATH value: {error}")]
    Join { error: JoinPathsError },
}

/// Resolves the absolute directory containing `resource`.
///
/// The lexical parent is taken first and then made absolute against the
/// working directory, so a bare file name resolves to the working directory
/// itself. An empty path or a filesystem root has no containing directory
/// and is rejected.
pub fn containing_dir(resource: &Path) -> Result<PathBuf, Error> {
    let parent = resource.parent().ok_or_else(|| Error::NoContainingDir {
        path: resource.to_owned(),
    })?;
    if parent.as_os_str().is_empty() {
        return std::env::current_dir().map_err(|error| Error::WorkingDir { error });
    }
    std::path::absolute(parent).map_err(|error| Error::Absolutize {
        path: parent.to_owned(),
        error,
    })
}

/// Builds a `PATH` value with `dir` as the first entry, followed by every
/// entry of `base` in order.
///
/// An unset or empty `base` yields `dir` alone, with no dangling separator.
/// The separator is the host convention via [`std::env::join_paths`], which
/// also rejects a `dir` that contains the separator itself.
pub fn prepend_to_path(dir: PathBuf, base: Option<&OsStr>) -> Result<OsString, Error> {
    let entries = std::iter::once(dir).chain(
        base.filter(|base| !base.is_empty())
            .into_iter()
            .flat_map(std::env::split_paths),
    );
    std::env::join_paths(entries).map_err(|error| Error::Join { error })
}
