use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Desktop browser User-Agent sent with every image request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP request parameters (optional `[request]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// User-Agent header value.
    pub user_agent: String,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
    /// Connect timeout in seconds (None = transport default).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirections: 10,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

/// Global configuration loaded from `~/.config/imgdl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgdlConfig {
    /// Text file with one image URL per line.
    pub url_file: PathBuf,
    /// Directory the images are written to (created if missing).
    pub output_dir: PathBuf,
    /// Extension (with leading dot) used when the URL path has none.
    pub fallback_extension: String,
    pub request: RequestConfig,
}

impl Default for ImgdlConfig {
    fn default() -> Self {
        Self {
            url_file: PathBuf::from("urls_drawings.txt"),
            output_dir: PathBuf::from("downloaded_images"),
            fallback_extension: ".jpg".to_string(),
            request: RequestConfig::default(),
        }
    }
}

/// Location of `config.toml`. Does not touch the filesystem.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from the XDG config dir (see [`load_or_init_at`]).
///
/// If the config location cannot be determined, built-in defaults are used.
pub fn load_or_init() -> Result<ImgdlConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("no config location ({:#}); using built-in defaults", e);
            Ok(ImgdlConfig::default())
        }
    }
}

/// Load configuration from `path`, creating a default file if none exists.
///
/// Failing to write that default file is not fatal: the defaults are still
/// returned. An existing file that cannot be read or parsed is an error.
pub fn load_or_init_at(path: &Path) -> Result<ImgdlConfig> {
    if !path.exists() {
        let default_cfg = ImgdlConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(e) => tracing::warn!("{:#}; using built-in defaults", e),
        }
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ImgdlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &ImgdlConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
