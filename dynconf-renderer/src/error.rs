//! Error types for dynconf-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from context construction and template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (bad syntax, unresolvable variables,
    /// context serialization).
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),

    /// Filesystem error while reading a template file.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required environment variable is not set.
    #[error("required environment variable {name} is not set")]
    MissingEnvVar { name: &'static str },

    /// The process UID has no entry in the system user table.
    #[error("no user entry for uid {0}")]
    UnknownUid(u32),

    /// The process GID has no entry in the system group table.
    #[error("no group entry for gid {0}")]
    UnknownGid(u32),
}
