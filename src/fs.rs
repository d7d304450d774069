//! The runtime-facing virtual filesystem over a [`ResourceSet`].
//!
//! A [`Filesystem`] is a cheap `Copy` handle. Every operation is synchronous,
//! read-only, and lock-free: the underlying tree never mutates after
//! construction, so any number of threads may resolve paths and read bytes
//! concurrently without coordination.
//!
//! Path-keyed accessors all resolve first and surface the same typed error;
//! none silently return empty data.

use crate::entry::{Dir, Entry, File, ReadDir};
use crate::error::{FsError, FsResult};
use crate::path;
use crate::set::{NodeKind, ResourceSet, ROOT};

/// Read-only, path-addressed view of one embedded resource set.
///
/// Obtain one from the module generated by [`resources!`](crate::resources),
/// or from [`ResourceSet::filesystem`] for a hand-built set.
///
/// # Example
///
/// ```
/// embedfs::resources! {
///     mod assets {
///         "hello.txt" => b"Hello, world!",
///     }
/// }
///
/// let fs = assets::get_filesystem();
/// assert_eq!(fs.read("hello.txt")?, b"Hello, world!");
/// assert_eq!(fs.size("hello.txt")?, 13);
/// # Ok::<(), embedfs::FsError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Filesystem<'a> {
    set: &'a ResourceSet,
}

impl ResourceSet {
    /// The virtual filesystem view of this set.
    pub fn filesystem(&self) -> Filesystem<'_> {
        Filesystem { set: self }
    }
}

impl<'a> Filesystem<'a> {
    /// Name of the underlying resource set.
    pub fn name(&self) -> &'a str {
        self.set.name()
    }

    /// The root directory.
    pub fn root(&self) -> Dir<'a> {
        Dir::new(self.set, ROOT)
    }

    /// Resolve a path to an entry.
    ///
    /// The path is normalized before lookup: repeated separators collapse, a
    /// leading `/` or `./` is stripped, and `.` segments are dropped. `""`
    /// and `"."` resolve to the root directory. Paths containing `..` fail
    /// with [`NotFound`](FsError::NotFound) — lookup never traverses above
    /// the set root.
    ///
    /// Matching is byte-wise case-sensitive. Descent fails with
    /// [`NotFound`](FsError::NotFound) at the first unmatched segment, or
    /// [`NotADirectory`](FsError::NotADirectory) if an intermediate segment
    /// names a file. The success path walks references into the static tree
    /// and performs no allocation.
    pub fn resolve(&self, path: &str) -> FsResult<Entry<'a>> {
        let segs = path::segments(path).ok_or_else(|| FsError::NotFound(path.to_string()))?;
        let mut id = ROOT;
        for seg in segs {
            let children = match &self.set.node(id).kind {
                NodeKind::Dir { children } => children,
                NodeKind::File { .. } => {
                    return Err(FsError::NotADirectory(path.to_string()));
                }
            };
            id = children
                .binary_search_by(|&cid| self.set.node(cid).name().cmp(seg))
                .map(|pos| children[pos])
                .map_err(|_| FsError::NotFound(path.to_string()))?;
        }
        Ok(Entry::new(self.set, id))
    }

    /// Resolve a path to a file, the iterable read-only handle.
    ///
    /// Fails with [`IsADirectory`](FsError::IsADirectory) if the path names a
    /// directory.
    pub fn open(&self, path: &str) -> FsResult<File<'a>> {
        self.resolve(path)?
            .as_file()
            .ok_or_else(|| FsError::IsADirectory(path.to_string()))
    }

    /// Zero-copy view of a file's declared bytes.
    ///
    /// The returned slice aliases embedded storage and is valid for the
    /// process lifetime.
    pub fn read(&self, path: &str) -> FsResult<&'static [u8]> {
        Ok(self.open(path)?.as_bytes())
    }

    /// Owned UTF-8 copy of a file's declared bytes.
    ///
    /// Fails with [`InvalidUtf8`](FsError::InvalidUtf8) for binary data; use
    /// [`open`](Filesystem::open) and [`File::to_vec`] for a binary-safe
    /// owned copy.
    pub fn read_to_string(&self, path: &str) -> FsResult<String> {
        Ok(self.open(path)?.as_str()?.to_string())
    }

    /// Declared size of a file in bytes, terminator excluded.
    pub fn size(&self, path: &str) -> FsResult<usize> {
        Ok(self.open(path)?.len())
    }

    /// Raw pointer to a file's first byte.
    ///
    /// Embedded storage guarantees a zero byte at offset
    /// [`size`](Filesystem::size), so the pointer is usable as a
    /// zero-terminated string exactly when the file's own bytes contain no
    /// embedded zero. Prefer [`File::as_c_str`], which checks that.
    pub fn raw_ptr(&self, path: &str) -> FsResult<*const u8> {
        Ok(self.open(path)?.as_ptr())
    }

    /// Raw pointer plus the file's exact declared size.
    pub fn raw_parts(&self, path: &str) -> FsResult<(*const u8, usize)> {
        let file = self.open(path)?;
        Ok((file.as_ptr(), file.len()))
    }

    /// List a directory's immediate children in sorted-by-name order.
    ///
    /// Lazy, finite, restartable; does not recurse. Fails with
    /// [`NotADirectory`](FsError::NotADirectory) if the path names a file.
    pub fn read_dir(&self, path: &str) -> FsResult<ReadDir<'a>> {
        let dir = self
            .resolve(path)?
            .as_dir()
            .ok_or_else(|| FsError::NotADirectory(path.to_string()))?;
        Ok(dir.entries())
    }

    /// Whether the path resolves to any entry.
    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }

    /// Whether the path resolves to a file.
    pub fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|e| e.is_file())
    }

    /// Whether the path resolves to a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|e| e.is_dir())
    }
}

impl std::fmt::Debug for Filesystem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filesystem(`{}`)", self.set.name())
    }
}
