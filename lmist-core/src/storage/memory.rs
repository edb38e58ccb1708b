use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Entry, EntryKind, Storage};

#[derive(Clone, Debug)]
enum Node {
    File(Vec<u8>),
    Directory,
}

/// Storage operation observed by [`MemoryStorage`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Call {
    Kind(PathBuf),
    ReadAll(PathBuf),
    WriteAll(PathBuf),
    ListEntries(PathBuf),
}

/// In-memory `Storage` that records every call made against it
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
    calls: Mutex<Vec<Call>>,
}

impl MemoryStorage {
    pub(crate) fn new() -> Self {
        let storage = Self::default();
        storage.add_dir("/");
        storage
    }

    pub(crate) fn add_dir(&self, path: impl AsRef<Path>) {
        self.nodes
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), Node::Directory);
    }

    pub(crate) fn add_file(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        self.nodes.lock().unwrap().insert(
            path.as_ref().to_path_buf(),
            Node::File(contents.as_ref().to_vec()),
        );
    }

    pub(crate) fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.lock().unwrap().get(path.as_ref()) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    )
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        self.record(Call::Kind(path.to_path_buf()));
        Ok(self.nodes.lock().unwrap().get(path).map(|node| match node {
            Node::File(_) => EntryKind::File,
            Node::Directory => EntryKind::Directory,
        }))
    }

    async fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.record(Call::ReadAll(path.to_path_buf()));
        self.file(path).ok_or_else(|| not_found(path))
    }

    async fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.record(Call::WriteAll(path.to_path_buf()));
        let mut nodes = self.nodes.lock().unwrap();
        let parent = path.parent().ok_or_else(|| not_found(path))?;
        if !matches!(nodes.get(parent), Some(Node::Directory)) {
            return Err(not_found(parent));
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.to_vec()));
        Ok(())
    }

    async fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        self.record(Call::ListEntries(path.to_path_buf()));
        let nodes = self.nodes.lock().unwrap();
        if !matches!(nodes.get(path), Some(Node::Directory)) {
            return Err(not_found(path));
        }

        Ok(nodes
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_string_lossy().into_owned();
                let kind = match node {
                    Node::File(_) => EntryKind::File,
                    Node::Directory => EntryKind::Directory,
                };
                Some(Entry { name, kind })
            })
            .collect())
    }
}
