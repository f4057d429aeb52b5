use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for collector and file operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read source directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file name is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },

    #[error("file name '{name}' needs escaping to be used in a string literal")]
    UnsafeName { name: String },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
