//! Destination filename derivation.
//!
//! Images are saved as `image_<index><ext>` where `<index>` is the 1-based
//! position in the URL list and `<ext>` comes from the URL path.

use std::path::{Path, PathBuf};

/// Extension of the last URL path segment, including the leading dot.
///
/// Only the path is inspected, so query strings and fragments never leak into
/// the filename. Returns `None` for unparseable URLs, an empty or root path, or
/// a last segment without a dot (or ending in one).
///
/// Unlike a plain suffix of the whole URL string, `https://example.com` has no
/// extension here and `https://x/a.png?w=1` yields `.png`.
pub fn extension_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    let dot = segment.rfind('.')?;
    let ext = &segment[dot..];
    if ext.len() < 2 {
        return None;
    }
    Some(ext.to_string())
}

/// Destination path for the image at 1-based `index`.
pub fn destination_path(dir: &Path, index: usize, url: &str, fallback_extension: &str) -> PathBuf {
    let ext = extension_from_url(url).unwrap_or_else(|| fallback_extension.to_string());
    dir.join(format!("image_{}{}", index, ext))
}
