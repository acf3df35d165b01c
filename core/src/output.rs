//! All-or-nothing file writes

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Write `bytes` to `path` through a temporary sibling and rename it into
/// place, so a failed write never leaves a partial file at `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<u64> {
    let tmp = temp_sibling(path);

    let written = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp);
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    let size = fs::metadata(path)?.len();
    debug!(path = %path.display(), size, "wrote file");
    Ok(size)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
