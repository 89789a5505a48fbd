/// Content Service
/// Resolves a file entry's url to its text content

use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Why a file's content could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {0}")]
    InvalidUrl(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} is not text")]
    NotText(String),
    #[error("failed to read {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Somewhere file contents can be fetched from
pub trait ContentSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Serves urls like `/files/notes.txt` from files under a root directory
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, url: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(url.trim_start_matches('/'));
        let mut path = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return Err(FetchError::InvalidUrl(url.to_string())),
            }
        }
        if path == self.root {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }
        Ok(path)
    }
}

impl ContentSource for DirContentSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let path = self.resolve(url)?;
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound(url.to_string()),
            _ => FetchError::Io {
                url: url.to_string(),
                source: e,
            },
        })?;
        String::from_utf8(bytes).map_err(|_| FetchError::NotText(url.to_string()))
    }
}
