//! Per-image fetch errors.
//!
//! Every variant carries the URL or destination path it failed on so the
//! batch log line is self-contained.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL was rejected before any request went out.
    #[error("failed to create request for URL {url}: {source}")]
    RequestBuild {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Transport failure (DNS, connect, TLS, malformed URL, redirect loop, ...).
    #[error("failed to fetch image from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Final response status was not 200.
    #[error("failed to download image from {url}: Status Code {code}")]
    HttpStatus { url: String, code: u32 },
    #[error("failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing the body failed after the file was created; the partial file stays on disk.
    #[error("failed to save image to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Short kind label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::RequestBuild { .. } => "request_build",
            FetchError::Network { .. } => "network",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::CreateFile { .. } => "create_file",
            FetchError::Save { .. } => "save",
        }
    }
}
