//! Output directory setup.

use std::fs::DirBuilder;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("failed to create directory {}: {source}", .path.display())]
pub struct OutputDirError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Creates `path` and any missing parents unless something already exists there.
///
/// An existing entry is left alone even if it is a regular file; writes into it
/// fail later, per image.
pub fn ensure_dir(path: &Path) -> Result<(), OutputDirError> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "output directory already present");
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path).map_err(|source| OutputDirError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "created output directory");
    Ok(())
}
