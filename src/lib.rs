//! # embedfs
//!
//! Compile-time resource embedding behind a read-only, path-addressed
//! virtual filesystem.
//!
//! Programs that ship auxiliary data (licenses, templates, images,
//! configuration) can bake those files into the binary and query them at
//! runtime with no install step and no disk access:
//!
//! - **Named sets**: each [`resources!`] invocation produces an independent
//!   set with its own `get_filesystem()` — no global mutable registry.
//! - **Zero-copy**: file bytes live in static storage; views returned by the
//!   accessors are `&'static` and never copied unless you ask.
//! - **Lock-free concurrency**: the entry tree is immutable after
//!   construction, so any number of threads may query it without
//!   coordination.
//!
//! ## Quick Start
//!
//! ```
//! embedfs::resources! {
//!     pub mod assets {
//!         "hello.txt" => b"Hello, world!",
//!     }
//! }
//!
//! let fs = assets::get_filesystem();
//!
//! // Zero-copy view, owned copy, iterable handle
//! assert_eq!(fs.read("hello.txt").unwrap(), b"Hello, world!");
//! assert_eq!(fs.read_to_string("hello.txt").unwrap(), "Hello, world!");
//! for byte in fs.open("hello.txt").unwrap() {
//!     assert_ne!(byte, 0);
//! }
//!
//! // Directory listing
//! for entry in fs.read_dir("").unwrap() {
//!     println!("{}", entry.path());
//! }
//! ```
//!
//! In real use the payload is usually `include_bytes!("...")` rather than a
//! literal, written by hand or emitted by a build script.
//!
//! ## Modules
//!
//! - [`set`]: the entry table ([`ResourceSet`] and its builder)
//! - [`fs`]: the virtual filesystem handle and path resolution
//! - [`entry`]: entry handles and accessor views
//! - [`error`]: the error taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod fs;
mod macros;
mod path;
pub mod set;

pub mod prelude;

// =============================================================================
// Crate-Level Re-exports
// =============================================================================

pub use entry::{Bytes, Dir, Entry, File, ReadDir};
pub use error::{BuildError, BuildResult, FsError, FsResult};
pub use fs::Filesystem;
pub use set::{ResourceSet, ResourceSetBuilder};
