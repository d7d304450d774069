//! Entry handles: [`Entry`], [`File`], [`Dir`], and directory iteration.
//!
//! Handles are cheap `Copy` pairs of a set reference and an arena index.
//! File bytes are `&'static` references into embedded storage, so the
//! zero-copy accessors outlive the handle that produced them.

use std::ffi::CStr;
use std::iter::FusedIterator;
use std::slice;

use crate::error::{FsError, FsResult};
use crate::set::{NodeKind, ResourceSet};

/// Restartable iterator over a file's declared bytes.
pub type Bytes = std::iter::Copied<slice::Iter<'static, u8>>;

// =============================================================================
// Entry
// =============================================================================

/// A resolved node: either a file or a directory.
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    set: &'a ResourceSet,
    id: usize,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(set: &'a ResourceSet, id: usize) -> Self {
        Self { set, id }
    }

    /// Full normalized path, relative to the set root; empty for the root.
    pub fn path(&self) -> &'a str {
        &self.set.node(self.id).path
    }

    /// Final path segment; empty for the root.
    pub fn name(&self) -> &'a str {
        self.set.node(self.id).name()
    }

    /// Parent directory, `None` for the root.
    pub fn parent(&self) -> Option<Dir<'a>> {
        let parent = self.set.node(self.id).parent?;
        Some(Dir { set: self.set, id: parent })
    }

    /// Whether this entry is a file.
    pub fn is_file(&self) -> bool {
        matches!(self.set.node(self.id).kind, NodeKind::File { .. })
    }

    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.set.node(self.id).kind, NodeKind::Dir { .. })
    }

    /// View this entry as a file.
    pub fn as_file(&self) -> Option<File<'a>> {
        match self.set.node(self.id).kind {
            NodeKind::File { stored } => Some(File {
                set: self.set,
                id: self.id,
                stored,
            }),
            NodeKind::Dir { .. } => None,
        }
    }

    /// View this entry as a directory.
    pub fn as_dir(&self) -> Option<Dir<'a>> {
        match self.set.node(self.id).kind {
            NodeKind::Dir { .. } => Some(Dir { set: self.set, id: self.id }),
            NodeKind::File { .. } => None,
        }
    }
}

impl std::fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_dir() { "Dir" } else { "File" };
        write!(f, "Entry({kind} `{}`)", self.path())
    }
}

// =============================================================================
// File
// =============================================================================

/// A file entry with the full accessor surface.
///
/// All borrowing accessors return `&'static` data aliasing the embedded
/// storage: no copy, valid for the process lifetime.
#[derive(Clone, Copy)]
pub struct File<'a> {
    set: &'a ResourceSet,
    id: usize,
    /// Declared bytes plus the trailing terminator.
    stored: &'static [u8],
}

impl<'a> File<'a> {
    fn stored(&self) -> &'static [u8] {
        self.stored
    }

    /// Full normalized path of this file.
    pub fn path(&self) -> &'a str {
        &self.set.node(self.id).path
    }

    /// Final path segment.
    pub fn name(&self) -> &'a str {
        self.set.node(self.id).name()
    }

    /// Parent directory.
    pub fn parent(&self) -> Option<Dir<'a>> {
        Entry::new(self.set, self.id).parent()
    }

    /// Declared size in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.stored().len() - 1
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-copy view of the file's declared bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        let stored = self.stored();
        &stored[..stored.len() - 1]
    }

    /// Zero-copy view including the trailing zero terminator.
    ///
    /// One byte longer than [`len`](File::len); the final byte is always `0`.
    pub fn as_bytes_with_nul(&self) -> &'static [u8] {
        self.stored()
    }

    /// The file as a zero-terminated C string.
    ///
    /// Returns `None` if the file's own bytes contain an embedded zero byte,
    /// in which case the terminator would truncate the data.
    pub fn as_c_str(&self) -> Option<&'static CStr> {
        CStr::from_bytes_with_nul(self.stored()).ok()
    }

    /// Zero-copy UTF-8 view of the file.
    pub fn as_str(&self) -> FsResult<&'static str> {
        std::str::from_utf8(self.as_bytes())
            .map_err(|_| FsError::InvalidUtf8(self.path().to_string()))
    }

    /// Raw pointer to the first byte.
    ///
    /// The embedded storage guarantees a zero byte at offset
    /// [`len`](File::len), so the pointer can be handed to C APIs expecting a
    /// zero-terminated string provided the file contains no embedded zero.
    pub fn as_ptr(&self) -> *const u8 {
        self.stored().as_ptr()
    }

    /// Owned copy of the declared bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Restartable iterator over the declared bytes.
    pub fn bytes(&self) -> Bytes {
        self.as_bytes().iter().copied()
    }
}

impl IntoIterator for File<'_> {
    type Item = u8;
    type IntoIter = Bytes;

    fn into_iter(self) -> Bytes {
        self.bytes()
    }
}

impl IntoIterator for &File<'_> {
    type Item = u8;
    type IntoIter = Bytes;

    fn into_iter(self) -> Bytes {
        self.bytes()
    }
}

impl std::fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "File(`{}`, {} bytes)", self.path(), self.len())
    }
}

// =============================================================================
// Dir
// =============================================================================

/// A directory entry.
#[derive(Clone, Copy)]
pub struct Dir<'a> {
    set: &'a ResourceSet,
    id: usize,
}

impl<'a> Dir<'a> {
    pub(crate) fn new(set: &'a ResourceSet, id: usize) -> Self {
        Self { set, id }
    }

    fn children(&self) -> &'a [usize] {
        match &self.set.node(self.id).kind {
            NodeKind::Dir { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Full normalized path; empty for the root.
    pub fn path(&self) -> &'a str {
        &self.set.node(self.id).path
    }

    /// Final path segment; empty for the root.
    pub fn name(&self) -> &'a str {
        self.set.node(self.id).name()
    }

    /// Parent directory, `None` for the root.
    pub fn parent(&self) -> Option<Dir<'a>> {
        Entry::new(self.set, self.id).parent()
    }

    /// Immediate child with the given name, matched byte-wise.
    pub fn get(&self, name: &str) -> Option<Entry<'a>> {
        let children = self.children();
        let pos = children
            .binary_search_by(|&id| self.set.node(id).name().cmp(name))
            .ok()?;
        Some(Entry::new(self.set, children[pos]))
    }

    /// Iterate over immediate children in sorted-by-name order.
    ///
    /// Lazy, finite, and restartable (the iterator is `Clone`). Does not
    /// recurse into subdirectories.
    pub fn entries(&self) -> ReadDir<'a> {
        ReadDir {
            set: self.set,
            children: self.children().iter(),
        }
    }
}

impl std::fmt::Debug for Dir<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dir(`{}`, {} entries)", self.path(), self.children().len())
    }
}

// =============================================================================
// ReadDir
// =============================================================================

/// Iterator over a directory's immediate children.
#[derive(Clone, Debug)]
pub struct ReadDir<'a> {
    set: &'a ResourceSet,
    children: slice::Iter<'a, usize>,
}

impl<'a> Iterator for ReadDir<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Entry<'a>> {
        let id = *self.children.next()?;
        Some(Entry::new(self.set, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.children.size_hint()
    }
}

impl<'a> DoubleEndedIterator for ReadDir<'a> {
    fn next_back(&mut self) -> Option<Entry<'a>> {
        let id = *self.children.next_back()?;
        Some(Entry::new(self.set, id))
    }
}

impl ExactSizeIterator for ReadDir<'_> {}
impl FusedIterator for ReadDir<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ResourceSet {
        ResourceSet::builder("demo")
            .file("hello.txt", b"Hello, world!\0")
            .file("sub/b.txt", b"b\0")
            .file("nul.bin", b"a\0b\0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_file_accessors_agree_on_size() {
        let set = demo();
        let file = set.filesystem().open("hello.txt").unwrap();
        assert_eq!(file.len(), 13);
        assert_eq!(file.as_bytes().len(), 13);
        assert_eq!(file.as_bytes_with_nul().len(), 14);
        assert_eq!(file.to_vec().len(), 13);
        assert_eq!(file.bytes().count(), 13);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_terminator_and_c_str() {
        let set = demo();
        let file = set.filesystem().open("hello.txt").unwrap();
        assert_eq!(file.as_bytes_with_nul().last(), Some(&0));
        let c = file.as_c_str().unwrap();
        assert_eq!(c.to_bytes(), b"Hello, world!");
        assert_eq!(c.to_bytes().len(), file.len());
    }

    #[test]
    fn test_c_str_rejects_embedded_zero() {
        let set = demo();
        let file = set.filesystem().open("nul.bin").unwrap();
        assert_eq!(file.len(), 3);
        assert!(file.as_c_str().is_none());
    }

    #[test]
    fn test_as_str_utf8() {
        let set = demo();
        let fs = set.filesystem();
        assert_eq!(fs.open("hello.txt").unwrap().as_str().unwrap(), "Hello, world!");
        assert_eq!(
            fs.open("nul.bin").unwrap().as_str().unwrap_err(),
            FsError::InvalidUtf8("nul.bin".into())
        );
    }

    #[test]
    fn test_iteration_is_restartable() {
        let set = demo();
        let file = set.filesystem().open("hello.txt").unwrap();
        let first: Vec<u8> = file.bytes().collect();
        let second: Vec<u8> = file.into_iter().collect();
        assert_eq!(first, b"Hello, world!");
        assert_eq!(first, second);
    }

    #[test]
    fn test_entry_parent_chain() {
        let set = demo();
        let entry = set.filesystem().resolve("sub/b.txt").unwrap();
        assert!(entry.is_file());
        let sub = entry.parent().unwrap();
        assert_eq!(sub.path(), "sub");
        let root = sub.parent().unwrap();
        assert_eq!(root.path(), "");
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_dir_get_is_case_sensitive() {
        let set = demo();
        let root = set.filesystem().root();
        assert!(root.get("hello.txt").is_some());
        assert!(root.get("HELLO.TXT").is_none());
    }

    #[test]
    fn test_read_dir_is_exact_size_and_clonable() {
        let set = demo();
        let entries = set.filesystem().root().entries();
        assert_eq!(entries.len(), 3);
        let names: Vec<&str> = entries.clone().map(|e| e.name()).collect();
        assert_eq!(names, vec!["hello.txt", "nul.bin", "sub"]);
        // The clone above did not consume the original.
        assert_eq!(entries.count(), 3);
    }
}
