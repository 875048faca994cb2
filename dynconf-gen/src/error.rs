//! Error types for dynconf-gen.

use std::path::PathBuf;

use thiserror::Error;

use dynconf_core::SettingsError;
use dynconf_renderer::RenderError;

/// All errors that can arise from a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// An error from the rendering engine or context construction.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from settings loading.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenError {
    GenError::Io {
        path: path.into(),
        source,
    }
}
