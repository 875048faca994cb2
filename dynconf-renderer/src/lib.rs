//! # dynconf-renderer
//!
//! Tera-based rendering of user-supplied config templates with a shared
//! process-identity context.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dynconf_core::Settings;
//! use dynconf_renderer::{RenderContext, TemplateEngine};
//!
//! fn render(settings: Settings) -> Result<String, dynconf_renderer::RenderError> {
//!     let ctx = RenderContext::from_process(settings)?;
//!     let engine = TemplateEngine::new();
//!     engine.render_str("user={{ username }}", &ctx)
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use error::RenderError;
