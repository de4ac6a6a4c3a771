//! Easy2 handler that streams a 200 response body into the destination file.
//!
//! The file is only created once a 200 response starts delivering body bytes,
//! so error responses never leave an empty image behind.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str;

/// Write-side failure captured inside the curl callback.
#[derive(Debug)]
pub(super) enum SinkFailure {
    Create(io::Error),
    Save(io::Error),
}

/// What a finished transfer left behind.
#[derive(Debug)]
pub(super) struct SinkOutcome {
    pub(super) file_created: bool,
    pub(super) bytes_written: u64,
    pub(super) failure: Option<SinkFailure>,
}

/// Handler state for one transfer. Reset with [`FileSink::begin`] before each fetch.
#[derive(Debug, Default)]
pub struct FileSink {
    dest: PathBuf,
    /// Status of the most recent response line (the last hop after redirects).
    status: Option<u32>,
    file: Option<File>,
    file_created: bool,
    bytes_written: u64,
    failure: Option<SinkFailure>,
}

impl FileSink {
    pub(super) fn begin(&mut self, dest: &Path) {
        *self = FileSink {
            dest: dest.to_path_buf(),
            ..FileSink::default()
        };
    }

    /// Closes the destination file (if any) and hands back the transfer result.
    pub(super) fn finish(&mut self) -> SinkOutcome {
        drop(self.file.take());
        SinkOutcome {
            file_created: self.file_created,
            bytes_written: self.bytes_written,
            failure: self.failure.take(),
        }
    }

    fn store(&mut self, data: &[u8]) -> Result<(), SinkFailure> {
        let file = match self.file.take() {
            Some(f) => f,
            None => {
                let f = File::create(&self.dest).map_err(SinkFailure::Create)?;
                self.file_created = true;
                f
            }
        };
        let file = self.file.insert(file);
        file.write_all(data).map_err(SinkFailure::Save)?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }
}

/// Parse the status code out of an `HTTP/x y reason` line.
fn parse_status_line(line: &str) -> Option<u32> {
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}

impl curl::easy::Handler for FileSink {
    fn header(&mut self, data: &[u8]) -> bool {
        if let Ok(s) = str::from_utf8(data) {
            if let Some(code) = parse_status_line(s.trim_end()) {
                self.status = Some(code);
            }
        }
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, curl::easy::WriteError> {
        if self.status != Some(200) {
            // Non-200 bodies are drained and dropped; the status check reports them.
            return Ok(data.len());
        }
        if self.failure.is_some() {
            return Ok(0);
        }
        match self.store(data) {
            Ok(()) => Ok(data.len()),
            Err(failure) => {
                tracing::debug!(dest = %self.dest.display(), ?failure, "aborting transfer");
                self.failure = Some(failure);
                Ok(0) // abort transfer
            }
        }
    }
}
