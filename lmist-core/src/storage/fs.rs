use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use super::{Entry, EntryKind, Storage};

/// `Storage` backed by the local filesystem through `tokio::fs`
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

#[async_trait]
impl Storage for FsStorage {
    async fn kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match fs::metadata(path).await {
            Ok(metadata) if metadata.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents).await
    }

    async fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let mut read_dir = fs::read_dir(path).await?;

        while let Some(dir_entry) = read_dir.next_entry().await? {
            // follow symlinks so a linked directory lists as a directory;
            // a dangling link is listed as the link itself
            let is_dir = match fs::metadata(dir_entry.path()).await {
                Ok(metadata) => metadata.is_dir(),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    dir_entry.file_type().await?.is_dir()
                }
                Err(err) => return Err(err),
            };

            entries.push(Entry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                kind: if is_dir {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
            });
        }

        Ok(entries)
    }
}
