//! Change-gated atomic writer.
//!
//! A write happens only when the rendered content differs byte-for-byte
//! from what is on disk. Comparison is against the target file itself —
//! no normalization of whitespace or line endings, no stored state.
//!
//! Writes go through `<path>.dynconf.tmp` and rename into place, so a
//! crashed run never leaves a half-written config.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, GenError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content matches the existing bytes.
    Unchanged { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

/// Write `content` to `path` if it differs from the existing file content.
///
/// A missing file counts as "no existing content" and is always written.
/// Any other failure reading the existing file propagates — a permission
/// error must not silently turn into an unconditional overwrite.
pub fn write_if_changed(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, GenError> {
    let tmp = PathBuf::from(format!("{}.dynconf.tmp", path.display()));
    write_if_changed_with_tmp(path, content, dry_run, &tmp)
}

fn write_if_changed_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, GenError> {
    if let Some(existing) = read_existing(path)? {
        if existing == content {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

/// `Ok(None)` if the file does not exist; any other read failure propagates.
fn read_existing(path: &Path) -> Result<Option<String>, GenError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}
