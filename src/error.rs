//! Error types for lookup and for resource-set construction.
//!
//! Runtime lookups fail with [`FsError`]; building a [`ResourceSet`] fails
//! with [`BuildError`]. Construction errors never reach runtime callers:
//! a set either builds completely or is rejected before the first lookup.
//!
//! [`ResourceSet`]: crate::ResourceSet

use thiserror::Error;

/// Result alias for filesystem lookups and accessors.
pub type FsResult<T> = Result<T, FsError>;

/// Result alias for resource-set construction.
pub type BuildResult<T> = Result<T, BuildError>;

// =============================================================================
// FsError - Runtime Lookup Failures
// =============================================================================

/// A lookup or accessor failure.
///
/// All variants are deterministic for a given path and compiled-in resource
/// set: there is nothing transient to retry against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// The path does not resolve to any entry.
    ///
    /// Also returned for paths containing `..` segments, which are rejected
    /// outright rather than traversed upward.
    #[error("no such embedded file or directory: `{0}`")]
    NotFound(String),

    /// An intermediate path segment names a file, not a directory.
    #[error("not a directory: `{0}`")]
    NotADirectory(String),

    /// A file-only accessor was called on a directory path.
    #[error("is a directory: `{0}`")]
    IsADirectory(String),

    /// A text accessor was called on a file that is not valid UTF-8.
    #[error("embedded file is not valid UTF-8: `{0}`")]
    InvalidUtf8(String),
}

// =============================================================================
// BuildError - Construction-Time Failures
// =============================================================================

/// A resource-set construction failure.
///
/// These indicate malformed input from the registration step (duplicate or
/// conflicting paths, bad storage), not runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The same file path was registered twice.
    #[error("duplicate embedded path: `{0}`")]
    DuplicatePath(String),

    /// A path is used as both a file and a directory.
    #[error("path registered as both file and directory: `{0}`")]
    PathKindConflict(String),

    /// A registration path is empty after normalization or contains `..`.
    #[error("invalid embedded path: `{0}`")]
    InvalidPath(String),

    /// Stored bytes are missing the trailing zero terminator.
    ///
    /// Storage produced by [`resources!`](crate::resources) always carries
    /// one extra zero byte after the declared length; hand-registered data
    /// must do the same.
    #[error("stored data for `{0}` lacks a trailing zero terminator")]
    MissingTerminator(String),
}
