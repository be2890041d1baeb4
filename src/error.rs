use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordsError {
    /// I/O failure while touching a file, with the operation that failed.
    #[error("error {operation} '{}'", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration rejected before the pipeline started.
    #[error("config error: {0}")]
    Config(String),
}

impl WordsError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        WordsError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
