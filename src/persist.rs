use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::TagCloudError;

/// Writes `content` to `path` through a temp file in the same directory that
/// is renamed over `path` once fully written. On error nothing is left at
/// `path` and the temp file is removed.
pub fn write_atomically(path: &Path, content: &str) -> Result<(), TagCloudError> {
    let failure = |source| TagCloudError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(failure)?;
    tmp.write_all(content.as_bytes()).map_err(failure)?;
    tmp.flush().map_err(failure)?;
    tmp.as_file_mut().sync_all().map_err(failure)?;
    tmp.persist(path).map_err(|e| failure(e.error))?;
    Ok(())
}
