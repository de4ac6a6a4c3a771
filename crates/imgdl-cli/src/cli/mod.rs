//! CLI for the imgdl batch image downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgdl_core::config;
use std::path::PathBuf;

use commands::{run_batch_command, run_fetch};

/// Top-level CLI for imgdl.
#[derive(Debug, Parser)]
#[command(name = "imgdl")]
#[command(about = "imgdl: download a list of image URLs into a directory", long_about = None)]
pub struct Cli {
    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every URL from the list file, one after another.
    Run {
        /// Text file with one image URL per line (overrides config).
        #[arg(long, value_name = "PATH")]
        url_file: Option<PathBuf>,
        /// Directory to save images into (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Download a single image URL to a file.
    Fetch {
        /// Image URL.
        url: String,
        /// Destination file path.
        dest: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = cli.command.unwrap_or(CliCommand::Run {
            url_file: None,
            output_dir: None,
        });
        match command {
            CliCommand::Run {
                url_file,
                output_dir,
            } => run_batch_command(&cfg, url_file, output_dir)?,
            CliCommand::Fetch { url, dest } => run_fetch(&cfg, &url, &dest)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
