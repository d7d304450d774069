//! Prelude module for convenient imports.
//!
//! ```ignore
//! use embedfs::prelude::*;
//! ```

// Entry table
pub use crate::set::{ResourceSet, ResourceSetBuilder};

// Virtual filesystem
pub use crate::fs::Filesystem;

// Entry handles and iteration
pub use crate::entry::{Bytes, Dir, Entry, File, ReadDir};

// Errors
pub use crate::error::{BuildError, BuildResult, FsError, FsResult};
