use std::path::PathBuf;
use thiserror::Error;

use common::error::Error as GraphStoreError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    FileWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read matrix: {0}")]
    MatrixRead(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphStoreError),
}
