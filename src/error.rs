use std::path::PathBuf;
use thiserror::Error;

use crate::models::Direction;

pub type Result<T> = std::result::Result<T, RetrofitError>;

#[derive(Error, Debug)]
pub enum RetrofitError {
    // Standard library errors with automatic conversion
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // A read or write failed part way through a batch
    #[error("{direction} failed on {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        direction: Direction,
        #[source]
        source: std::io::Error,
    },
}

impl RetrofitError {
    pub fn file_io(path: impl Into<PathBuf>, direction: Direction, source: std::io::Error) -> Self {
        RetrofitError::FileIo {
            path: path.into(),
            direction,
            source,
        }
    }
}
