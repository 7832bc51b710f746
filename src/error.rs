use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no text extracted from {}", path.display())]
    EmptyText { path: PathBuf },

    #[error("processing {} panicked: {message}", path.display())]
    Panicked { path: PathBuf, message: String },

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl SanitizeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = SanitizeError> = std::result::Result<T, E>;
