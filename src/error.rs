use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpdateError>;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download failed: {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {path:?}")]
    PermissionDenied { path: PathBuf },
}

impl UpdateError {
    pub fn http<S: Into<String>>(url: S, source: reqwest::Error) -> Self {
        UpdateError::Http {
            url: url.into(),
            source,
        }
    }
}
