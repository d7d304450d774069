//! The entry table: [`ResourceSet`] and its builder.
//!
//! A `ResourceSet` is the complete immutable tree of embedded entries for one
//! named group of files. It is constructed exactly once, before any lookup,
//! from the flat (path, stored bytes) list produced by the registration step,
//! and lives for the process lifetime.
//!
//! # Tree Construction
//!
//! ```text
//! ResourceSetBuilder (flat registration list)
//! └── build()
//!     ├── normalize each path, verify trailing terminator
//!     ├── create intermediate directories idempotently
//!     ├── attach file leaves (DuplicatePath / PathKindConflict on collision)
//!     └── sort every directory's children by name
//! ```
//!
//! Sorting at `build()` makes the result deterministic: the same file list
//! always produces an isomorphic tree, independent of registration order.
//!
//! # Storage Contract
//!
//! Stored bytes for a file are the file's declared contents plus one trailing
//! zero byte. The declared size is `stored.len() - 1`; only the
//! terminator-dependent accessors ever look at the final byte. Storage
//! produced by [`resources!`](crate::resources) always satisfies this;
//! hand-built sets must uphold it or `build()` fails with
//! [`MissingTerminator`](BuildError::MissingTerminator).

use std::mem;

use rustc_hash::FxHashMap;

use crate::error::{BuildError, BuildResult};
use crate::path;

/// Arena index of the root directory.
pub(crate) const ROOT: usize = 0;

// =============================================================================
// Node - Arena Entry Record
// =============================================================================

/// One entry record in the arena.
pub(crate) struct Node {
    /// Full normalized path, empty for the root.
    pub(crate) path: Box<str>,
    /// Arena index of the parent directory, `None` for the root.
    pub(crate) parent: Option<usize>,
    pub(crate) kind: NodeKind,
}

pub(crate) enum NodeKind {
    File {
        /// Declared bytes plus one trailing zero byte.
        stored: &'static [u8],
    },
    Dir {
        /// Immediate children, sorted by name after `build()`.
        children: Vec<usize>,
    },
}

impl Node {
    /// Final path segment; empty for the root.
    pub(crate) fn name(&self) -> &str {
        match self.path.rfind('/') {
            Some(i) => &self.path[i + 1..],
            None => &self.path,
        }
    }
}

// =============================================================================
// ResourceSet
// =============================================================================

/// The immutable entry table for one named resource set.
///
/// Built via [`ResourceSet::builder`] or, more commonly, by the
/// [`resources!`](crate::resources) macro. Query it through
/// [`filesystem`](ResourceSet::filesystem).
pub struct ResourceSet {
    name: Box<str>,
    nodes: Vec<Node>,
    file_count: usize,
}

impl ResourceSet {
    /// Start building a resource set with the given name.
    pub fn builder(name: impl Into<String>) -> ResourceSetBuilder {
        ResourceSetBuilder {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// The compile-time name of this resource set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of embedded files (directories excluded).
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub(crate) fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }
}

impl std::fmt::Debug for ResourceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceSet")
            .field("name", &self.name)
            .field("entries", &self.nodes.len())
            .field("files", &self.file_count)
            .finish()
    }
}

// =============================================================================
// ResourceSetBuilder
// =============================================================================

/// Builder consuming the flat registration list into a [`ResourceSet`].
///
/// Registration is deferred: all validation happens in [`build`], which
/// reports the first error encountered.
///
/// # Example
///
/// ```
/// use embedfs::ResourceSet;
///
/// let set = ResourceSet::builder("assets")
///     .file("hello.txt", b"Hello, world!\0")
///     .file("sub/b.txt", b"b\0")
///     .build()?;
/// assert_eq!(set.file_count(), 2);
/// # Ok::<(), embedfs::BuildError>(())
/// ```
///
/// [`build`]: ResourceSetBuilder::build
#[must_use]
pub struct ResourceSetBuilder {
    name: String,
    files: Vec<(String, &'static [u8])>,
}

impl ResourceSetBuilder {
    /// Register one file.
    ///
    /// `stored` must be the file's bytes plus one trailing zero byte; the
    /// declared size is `stored.len() - 1`.
    pub fn file(mut self, path: impl Into<String>, stored: &'static [u8]) -> Self {
        self.files.push((path.into(), stored));
        self
    }

    /// Construct the entry tree.
    ///
    /// Directories are inferred from paths, never declared. Errors are
    /// construction-time only; a successfully built set cannot fail
    /// structurally at lookup time.
    pub fn build(self) -> BuildResult<ResourceSet> {
        let mut nodes = vec![Node {
            path: Box::from(""),
            parent: None,
            kind: NodeKind::Dir { children: Vec::new() },
        }];
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        index.insert(String::new(), ROOT);
        let mut file_count = 0;

        for (raw, stored) in self.files {
            let full = path::normalize(&raw).ok_or_else(|| BuildError::InvalidPath(raw.clone()))?;
            if full.is_empty() {
                return Err(BuildError::InvalidPath(raw));
            }
            if stored.last() != Some(&0) {
                return Err(BuildError::MissingTerminator(full));
            }

            let mut parent = ROOT;
            let mut prefix = String::with_capacity(full.len());
            let mut segs = full.split('/').peekable();
            while let Some(seg) = segs.next() {
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(seg);
                let is_leaf = segs.peek().is_none();

                match index.get(prefix.as_str()).copied() {
                    Some(id) if is_leaf => {
                        return Err(match nodes[id].kind {
                            NodeKind::File { .. } => BuildError::DuplicatePath(full),
                            NodeKind::Dir { .. } => BuildError::PathKindConflict(full),
                        });
                    }
                    Some(id) => match nodes[id].kind {
                        NodeKind::Dir { .. } => parent = id,
                        NodeKind::File { .. } => {
                            return Err(BuildError::PathKindConflict(prefix));
                        }
                    },
                    None => {
                        let id = nodes.len();
                        let kind = if is_leaf {
                            file_count += 1;
                            NodeKind::File { stored }
                        } else {
                            NodeKind::Dir { children: Vec::new() }
                        };
                        nodes.push(Node {
                            path: prefix.clone().into_boxed_str(),
                            parent: Some(parent),
                            kind,
                        });
                        if let NodeKind::Dir { children } = &mut nodes[parent].kind {
                            children.push(id);
                        }
                        index.insert(prefix.clone(), id);
                        parent = id;
                    }
                }
            }
        }

        // Sort every directory's children by name for deterministic,
        // order-independent iteration and binary-searchable lookup.
        for i in 0..nodes.len() {
            let NodeKind::Dir { children } = &mut nodes[i].kind else {
                continue;
            };
            let mut sorted = mem::take(children);
            sorted.sort_unstable_by(|&a, &b| nodes[a].name().cmp(nodes[b].name()));
            if let NodeKind::Dir { children } = &mut nodes[i].kind {
                *children = sorted;
            }
        }

        Ok(ResourceSet {
            name: self.name.into_boxed_str(),
            nodes,
            file_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_inferred_directories() {
        let set = ResourceSet::builder("t")
            .file("a/b/c.txt", b"c\0")
            .build()
            .unwrap();
        // root + a + a/b + a/b/c.txt
        assert_eq!(set.nodes.len(), 4);
        assert_eq!(set.file_count(), 1);
        assert!(matches!(set.nodes[1].kind, NodeKind::Dir { .. }));
        assert_eq!(&*set.nodes[1].path, "a");
        assert_eq!(set.nodes[3].name(), "c.txt");
        assert_eq!(set.nodes[3].parent, Some(2));
    }

    #[test]
    fn test_duplicate_path() {
        let err = ResourceSet::builder("t")
            .file("a.txt", b"1\0")
            .file("a.txt", b"2\0")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::DuplicatePath("a.txt".into()));
    }

    #[test]
    fn test_file_registered_over_directory() {
        let err = ResourceSet::builder("t")
            .file("a/b.txt", b"b\0")
            .file("a", b"a\0")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::PathKindConflict("a".into()));
    }

    #[test]
    fn test_directory_registered_over_file() {
        let err = ResourceSet::builder("t")
            .file("a", b"a\0")
            .file("a/b.txt", b"b\0")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::PathKindConflict("a".into()));
    }

    #[test]
    fn test_invalid_paths() {
        let err = ResourceSet::builder("t")
            .file("../escape", b"x\0")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::InvalidPath("../escape".into()));

        let err = ResourceSet::builder("t").file("", b"x\0").build().unwrap_err();
        assert_eq!(err, BuildError::InvalidPath("".into()));
    }

    #[test]
    fn test_missing_terminator() {
        let err = ResourceSet::builder("t")
            .file("a.txt", b"no terminator")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingTerminator("a.txt".into()));
    }

    #[test]
    fn test_registration_paths_are_normalized() {
        let set = ResourceSet::builder("t")
            .file("./a//b.txt", b"b\0")
            .build()
            .unwrap();
        assert_eq!(&*set.nodes[2].path, "a/b.txt");
    }

    #[test]
    fn test_children_sorted_regardless_of_registration_order() {
        let names = |set: &ResourceSet| -> Vec<String> {
            let NodeKind::Dir { children } = &set.nodes[ROOT].kind else {
                panic!("root must be a directory");
            };
            children.iter().map(|&id| set.nodes[id].name().to_string()).collect()
        };

        let forward = ResourceSet::builder("t")
            .file("a.txt", b"a\0")
            .file("sub/b.txt", b"b\0")
            .file("z.txt", b"z\0")
            .build()
            .unwrap();
        let backward = ResourceSet::builder("t")
            .file("z.txt", b"z\0")
            .file("sub/b.txt", b"b\0")
            .file("a.txt", b"a\0")
            .build()
            .unwrap();

        assert_eq!(names(&forward), vec!["a.txt", "sub", "z.txt"]);
        assert_eq!(names(&forward), names(&backward));
    }

    #[test]
    fn test_empty_set_has_root_only() {
        let set = ResourceSet::builder("empty").build().unwrap();
        assert_eq!(set.nodes.len(), 1);
        assert_eq!(set.file_count(), 0);
        assert_eq!(set.name(), "empty");
    }
}
