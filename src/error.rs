//! Crate-wide error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to spawn simulation thread: {0}")]
    ThreadSpawn(std::io::Error),

    #[error("simulation thread panicked")]
    ThreadPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;
