//! Transports that produce the raw dataset payload.

use crate::error::LoadError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Produces the raw bytes of `movies.json`.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Reads the dataset from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads the dataset over http(s).
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let request_error = |e: reqwest::Error| LoadError::Request {
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Configured dataset location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    File(PathBuf),
    Url(String),
}

impl DatasetLocation {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lowered = location.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub fn into_source(self) -> Result<Arc<dyn DatasetSource>, LoadError> {
        match self {
            Self::File(path) => Ok(Arc::new(FileSource::new(path))),
            #[cfg(feature = "http")]
            Self::Url(url) => Ok(Arc::new(HttpSource::new(url))),
            #[cfg(not(feature = "http"))]
            Self::Url(url) => Err(LoadError::UnsupportedLocation(url)),
        }
    }
}
