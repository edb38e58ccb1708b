//! Filesystem capability used by the place and list operations.

mod fs;
#[cfg(test)]
pub(crate) mod memory;

pub use fs::FsStorage;

use std::io;
use std::path::Path;

use async_trait::async_trait;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single direct child of a listed directory
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The filesystem operations the core needs.
///
/// Every call is awaited in sequence by its caller; implementations do not
/// need to guard against overlapping operations.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns what lives at `path`, or `None` when nothing does.
    async fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    async fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.kind(path).await?.is_some())
    }

    async fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates or truncates `path` and writes `contents` to it.
    async fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    async fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>>;
}
