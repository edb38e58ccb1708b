mod resolve;

pub use crate::error::PlaceError;
pub use resolve::{absolute, resolve};

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::storage::{EntryKind, Storage};

/// Sink for human-readable status updates while a placement runs
pub trait Progress {
    fn status(&self, message: &str);
}

impl Progress for () {
    fn status(&self, _message: &str) {}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaceRequest {
    /// Directory relative names are resolved against
    pub working_dir: PathBuf,
    pub output_dir: PathBuf,
    pub filename: String,
}

/// Outcome of a placement that did not fail
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    Placed {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// Something was already at the destination; nothing was written
    AlreadyExists { destination: PathBuf },
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Placed {
                source,
                destination,
                ..
            } => write!(
                f,
                "File \"{}\" has been successfully saved to \"{}\"",
                source.display(),
                destination.display()
            ),
            Placement::AlreadyExists { destination } => write!(
                f,
                "The file \"{}\" already exists, nothing was copied",
                destination.display()
            ),
        }
    }
}

/// Copies `request.filename` into `request.output_dir`.
///
/// The output directory must already exist. An existing destination is left
/// untouched and reported as [`Placement::AlreadyExists`]. A failed write may
/// leave a partially written destination behind.
pub async fn place<S, P>(
    storage: &S,
    progress: &P,
    request: &PlaceRequest,
) -> Result<Placement, PlaceError>
where
    S: Storage + ?Sized,
    P: Progress + ?Sized,
{
    let output_dir = absolute(&request.working_dir, &request.output_dir);
    progress.status(&format!("Checking \"{}\"...", output_dir.display()));
    let output_kind = storage.kind(&output_dir).await.map_err(io_at(&output_dir))?;
    if output_kind != Some(EntryKind::Directory) {
        return Err(PlaceError::DirectoryNotFound { path: output_dir });
    }

    let source = absolute(&request.working_dir, Path::new(&request.filename));
    let source_kind = storage.kind(&source).await.map_err(io_at(&source))?;
    if source_kind != Some(EntryKind::File) {
        return Err(PlaceError::SourceNotFound { path: source });
    }

    let destination = resolve(&request.working_dir, &output_dir, &request.filename);
    if storage.exists(&destination).await.map_err(io_at(&destination))? {
        debug!(destination = %destination.display(), "destination already exists");
        return Ok(Placement::AlreadyExists { destination });
    }

    progress.status(&format!(
        "Saving \"{}\" to \"{}\"...",
        request.filename,
        destination.display()
    ));
    let contents = storage.read_all(&source).await.map_err(io_at(&source))?;
    storage
        .write_all(&destination, &contents)
        .await
        .map_err(io_at(&destination))?;

    let bytes = contents.len() as u64;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "placed file"
    );

    Ok(Placement::Placed {
        source,
        destination,
        bytes,
    })
}

fn io_at(path: &Path) -> impl FnOnce(io::Error) -> PlaceError + '_ {
    move |source| PlaceError::Io {
        path: path.to_path_buf(),
        source,
    }
}
