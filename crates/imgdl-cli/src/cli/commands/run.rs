//! `imgdl run` – download every URL from the list file.

use anyhow::{Context, Result};
use imgdl_core::batch::{run_batch, BatchPlan};
use imgdl_core::config::ImgdlConfig;
use imgdl_core::fetch::ImageFetcher;
use std::io;
use std::path::PathBuf;

/// Batch plan from config, with command-line overrides applied.
pub(crate) fn plan_for(
    cfg: &ImgdlConfig,
    url_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> BatchPlan {
    let mut plan = BatchPlan::from(cfg);
    if let Some(p) = url_file {
        plan.url_file = p;
    }
    if let Some(d) = output_dir {
        plan.output_dir = d;
    }
    plan
}

/// Runs the batch. Fatal setup failures are printed and do not change the exit status.
pub fn run_batch_command(
    cfg: &ImgdlConfig,
    url_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let plan = plan_for(cfg, url_file, output_dir);
    let mut fetcher = ImageFetcher::new(&cfg.request).context("initialize HTTP client")?;
    let stdout = io::stdout();
    let mut console = stdout.lock();

    match run_batch(&plan, &mut fetcher, &mut console) {
        Ok(report) => {
            if !report.failed.is_empty() {
                tracing::warn!(
                    "{} of {} image(s) failed to download",
                    report.failed.len(),
                    report.attempted
                );
            }
        }
        Err(err) => {
            tracing::error!("batch aborted: {}", err);
            println!("{}", err.console_line());
        }
    }
    Ok(())
}
