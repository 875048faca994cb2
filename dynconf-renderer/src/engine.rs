//! Tera rendering of user-supplied template files.
//!
//! Templates are arbitrary text files named by the definitions file, so
//! nothing is precompiled or cached: each render is a one-off pass over the
//! file contents with the shared [`RenderContext`].

use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

/// One-off Tera renderer for config templates.
///
/// Autoescaping is disabled: outputs are config files, not HTML.
#[derive(Debug, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        TemplateEngine
    }

    /// Render a template string with the shared context.
    pub fn render_str(&self, input: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Tera::one_off(input, &tera_ctx, false).map_err(RenderError::from)
    }

    /// Read the file at `path` and render its contents with the shared context.
    ///
    /// Fails with `RenderError::Io` (path annotated) if the file cannot be
    /// read, `RenderError::Template` if rendering fails.
    pub fn render_file(&self, path: &Path, ctx: &RenderContext) -> Result<String, RenderError> {
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        self.render_str(&contents, ctx)
    }
}
