// File: src/error.rs
use std::path::PathBuf;

/// Failures at the edges: reading dictionaries and snapshots.
/// Queries on a built index never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Could not persist snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),

    #[error("Snapshot format version {found}, expected {expected}")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
