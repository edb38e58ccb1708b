use std::io;
use std::path::Path;

use tracing::debug;

pub use crate::error::ListError;
use crate::storage::{Entry, EntryKind, Storage};

/// Lists the direct entries of `target`, sorted by name.
pub async fn list<S>(storage: &S, target: &Path) -> Result<Vec<Entry>, ListError>
where
    S: Storage + ?Sized,
{
    let io_error = |source: io::Error| ListError::Io {
        path: target.to_path_buf(),
        source,
    };

    if storage.kind(target).await.map_err(io_error)? != Some(EntryKind::Directory) {
        return Err(ListError::DirectoryNotFound {
            path: target.to_path_buf(),
        });
    }

    let mut entries = storage.list_entries(target).await.map_err(io_error)?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(target = %target.display(), count = entries.len(), "listed directory");

    Ok(entries)
}
