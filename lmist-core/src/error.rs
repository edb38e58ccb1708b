use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while placing a file into an output directory
#[derive(Debug, Error)]
pub enum PlaceError {
    /// The output directory is missing or is not a directory
    #[error("The output directory \"{}\" does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The named source file is missing or is not a regular file
    #[error("The file \"{}\" was not found", path.display())]
    SourceNotFound { path: PathBuf },

    /// Reading the source or writing the destination failed
    #[error("I/O error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while listing a directory
#[derive(Debug, Error)]
pub enum ListError {
    /// The list target is missing or is not a directory
    #[error("The directory \"{}\" does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Reading the directory failed
    #[error("Failed to read directory \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config file \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the settings schema
    #[error("Failed to parse config file \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
