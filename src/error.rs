use std::io;
use std::path::PathBuf;
use thiserror::Error;

///Errors that can occur while loading a dictionary
#[derive(Error,Debug)]
pub enum LoadError {
    #[error("Dictionary not found at specified path: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unable to read dictionary file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    ///Classify an I/O error raised while accessing the given path
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.into()),
            _ => LoadError::Read { path: path.into(), source: err },
        }
    }

    ///The message shown to the user when loading failed
    pub fn diagnostic(&self) -> &'static str {
        match self {
            LoadError::NotFound(_) => "ERROR: Dictionary not found at specified path",
            LoadError::Read { .. } => "ERROR: Unable to read dictionary file",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}
