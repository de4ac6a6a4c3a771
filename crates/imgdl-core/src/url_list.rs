//! Reading the URL list file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads every line of `path` in file order.
///
/// Line terminators (`\n` or `\r\n`) are stripped; nothing else is trimmed and
/// blank lines are kept as empty strings. Any open or read error aborts the
/// whole read, so callers never see a partial list.
pub fn read_urls(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}
