//! Single-image HTTP GET, streamed to disk.
//!
//! Uses one libcurl easy handle for the whole batch so connections can be
//! reused between images. Each fetch is blocking and runs to completion or
//! failure before returning; there is no retry.

mod error;
mod headers;
mod sink;

pub use error::FetchError;
pub use headers::{browser_headers, ACCEPT, ACCEPT_ENCODING};

use crate::config::RequestConfig;
use anyhow::{Context, Result};
use curl::easy::Easy2;
use sink::{FileSink, SinkFailure};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Anything that can turn a URL into a file on disk. The batch driver only
/// depends on this, which keeps it testable without a network.
pub trait ImageSource {
    /// Fetch `url` into `dest`, returning the number of body bytes written.
    fn fetch(&mut self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

/// libcurl-backed fetcher sending browser-like headers.
pub struct ImageFetcher {
    easy: Easy2<FileSink>,
}

impl ImageFetcher {
    /// Build the reusable handle: GET, browser headers, redirects followed,
    /// and only the timeouts the config asks for.
    pub fn new(request: &RequestConfig) -> Result<Self> {
        let mut easy = Easy2::new(FileSink::default());
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(request.max_redirections)?;
        if let Some(secs) = request.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(secs) = request.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }
        easy.http_headers(headers::header_list(&request.user_agent)?)
            .context("set request headers")?;
        Ok(Self { easy })
    }
}

impl ImageSource for ImageFetcher {
    fn fetch(&mut self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        self.easy.url(url).map_err(|source| FetchError::RequestBuild {
            url: url.to_string(),
            source,
        })?;
        self.easy.get_mut().begin(dest);

        let performed = self.easy.perform();
        let outcome = self.easy.get_mut().finish();

        if let Some(failure) = outcome.failure {
            return Err(match failure {
                SinkFailure::Create(source) => FetchError::CreateFile {
                    path: dest.to_path_buf(),
                    source,
                },
                SinkFailure::Save(source) => FetchError::Save {
                    path: dest.to_path_buf(),
                    source,
                },
            });
        }

        if let Err(e) = performed {
            // Body copy was already under way: that is a save failure, not a fetch failure.
            if outcome.file_created {
                return Err(FetchError::Save {
                    path: dest.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::Other, e),
                });
            }
            return Err(FetchError::Network {
                url: url.to_string(),
                source: e,
            });
        }

        let code = self.easy.response_code().map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;
        if code != 200 {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                code,
            });
        }

        // A 200 with an empty body never reached the write callback.
        if !outcome.file_created {
            File::create(dest).map_err(|source| FetchError::CreateFile {
                path: dest.to_path_buf(),
                source,
            })?;
        }

        tracing::debug!(url, dest = %dest.display(), bytes = outcome.bytes_written, "fetch complete");
        Ok(outcome.bytes_written)
    }
}
