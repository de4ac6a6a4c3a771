//! `imgdl fetch` – download a single URL.

use anyhow::{Context, Result};
use imgdl_core::config::ImgdlConfig;
use imgdl_core::fetch::{ImageFetcher, ImageSource};
use std::path::Path;

/// Fetch one image and print the same line a batch would.
pub fn run_fetch(cfg: &ImgdlConfig, url: &str, dest: &Path) -> Result<()> {
    let mut fetcher = ImageFetcher::new(&cfg.request).context("initialize HTTP client")?;
    match fetcher.fetch(url, dest) {
        Ok(bytes) => {
            tracing::info!(url, dest = %dest.display(), bytes, "downloaded");
            println!("Downloaded image from {} to {}", url, dest.display());
        }
        Err(e) => {
            tracing::warn!(url, kind = e.kind(), "download failed: {}", e);
            println!("Error downloading image: {}", e);
        }
    }
    Ok(())
}
