//! Error kinds surfaced by the highlighter core

use std::path::PathBuf;

/// Errors produced by the highlighter core.
///
/// Classification and highlighting are total; only file access can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A word list could not be read or decoded
    #[error("failed to load word list {}: {source}", path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be loaded or saved
    #[error("cannot access {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
