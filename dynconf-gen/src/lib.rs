//! # dynconf-gen
//!
//! Definitions parsing and the change-gated generation pipeline.
//!
//! Call [`pipeline::generate_from_process`] to run a full generation pass
//! with the live process identity, or [`pipeline::generate`] with an
//! explicit [`dynconf_renderer::RenderContext`].

pub mod defs;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use defs::DefinitionEntry;
pub use error::GenError;
pub use pipeline::{generate, generate_from_process, GenerateReport, GeneratedConfig};
pub use writer::WriteResult;
