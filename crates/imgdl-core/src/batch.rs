//! Sequential batch driver.
//!
//! Ensures the output directory, loads the URL list, then fetches every URL in
//! list order. Directory and list failures are fatal and stop the run before
//! any download; a failed image is reported and the loop moves on.

use crate::config::ImgdlConfig;
use crate::fetch::ImageSource;
use crate::naming::destination_path;
use crate::output_dir::{ensure_dir, OutputDirError};
use crate::url_list::read_urls;
use std::io::{self, Write};
use std::path::PathBuf;

/// Inputs of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub url_file: PathBuf,
    pub output_dir: PathBuf,
    pub fallback_extension: String,
}

impl From<&ImgdlConfig> for BatchPlan {
    fn from(cfg: &ImgdlConfig) -> Self {
        Self {
            url_file: cfg.url_file.clone(),
            output_dir: cfg.output_dir.clone(),
            fallback_extension: cfg.fallback_extension.clone(),
        }
    }
}

/// Where the run currently is. There is exactly one path through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Init,
    DirectoryEnsured,
    UrlsLoaded,
    /// Fetching the URL at this 0-based position.
    Fetching(usize),
    Done,
}

/// Errors that abort the batch before any download.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    EnsureDirectory(#[from] OutputDirError),
    #[error("failed to read {}: {source}", .path.display())]
    ReadUrls {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BatchError {
    /// Console line printed for a fatal failure.
    pub fn console_line(&self) -> String {
        match self {
            BatchError::EnsureDirectory(e) => format!("Error ensuring directory: {}", e),
            BatchError::ReadUrls { .. } => format!("Error reading URLs from file: {}", self),
        }
    }
}

/// One image that could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    /// 1-based position in the URL list.
    pub index: usize,
    pub url: String,
    pub message: String,
}

/// Outcome of a batch that got past setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: Vec<FailedItem>,
}

fn enter(phase: &mut BatchPhase, next: BatchPhase) {
    tracing::debug!(from = ?*phase, to = ?next, "batch phase");
    *phase = next;
}

/// Run the whole batch, writing one console line per image to `console`.
///
/// Returns `Err` only for fatal setup failures; per-image failures are in the
/// report. Console write errors are ignored so a closed stdout cannot stop
/// the downloads.
pub fn run_batch<S, W>(
    plan: &BatchPlan,
    source: &mut S,
    console: &mut W,
) -> Result<BatchReport, BatchError>
where
    S: ImageSource + ?Sized,
    W: Write + ?Sized,
{
    let mut phase = BatchPhase::Init;
    tracing::info!(
        url_file = %plan.url_file.display(),
        output_dir = %plan.output_dir.display(),
        "batch starting"
    );

    ensure_dir(&plan.output_dir)?;
    enter(&mut phase, BatchPhase::DirectoryEnsured);

    let urls = read_urls(&plan.url_file).map_err(|source| BatchError::ReadUrls {
        path: plan.url_file.clone(),
        source,
    })?;
    enter(&mut phase, BatchPhase::UrlsLoaded);
    tracing::info!(count = urls.len(), "loaded URL list");

    let mut report = BatchReport::default();
    for (i, url) in urls.iter().enumerate() {
        enter(&mut phase, BatchPhase::Fetching(i));
        let index = i + 1;
        let dest = destination_path(&plan.output_dir, index, url, &plan.fallback_extension);
        report.attempted += 1;

        match source.fetch(url, &dest) {
            Ok(bytes) => {
                report.succeeded += 1;
                tracing::info!(index, url = %url, dest = %dest.display(), bytes, "downloaded");
                let _ = writeln!(console, "Downloaded image from {} to {}", url, dest.display());
            }
            Err(e) => {
                tracing::warn!(index, url = %url, kind = e.kind(), "download failed: {}", e);
                let _ = writeln!(console, "Error downloading image: {}", e);
                report.failed.push(FailedItem {
                    index,
                    url: url.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    enter(&mut phase, BatchPhase::Done);
    tracing::info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}
