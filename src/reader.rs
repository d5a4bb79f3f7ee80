use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{DriverError, Result};

const UTF8_BOM: char = '\u{FEFF}';

/// Read the whole file at `path` as UTF-8 text.
///
/// A leading byte-order mark is dropped. Missing files, directories,
/// permission failures and invalid UTF-8 all map to `DriverError::FileAccess`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let start_time = Instant::now();

    debug!("Starting read of file: {}", path.display());

    let mut text = fs::read_to_string(path).map_err(|source| {
        warn!("Failed to read {}: {}", path.display(), source);
        DriverError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if text.starts_with(UTF8_BOM) {
        text.replace_range(..UTF8_BOM.len_utf8(), "");
    }

    info!(
        "Read {}: {} bytes in {}ms",
        path.display(),
        text.len(),
        start_time.elapsed().as_millis()
    );

    Ok(text)
}
