//! Generation pipeline — one full pass over the definitions file.
//!
//! 1. Resolve the definitions file path from settings.
//! 2. Render the definitions file itself through the template engine.
//! 3. Parse the rendered text into entries, skipping invalid lines.
//! 4. For each entry: render the template file, write the output if changed.
//!
//! Strictly sequential, single pass. The first unrecovered error aborts the
//! run; earlier entries stay written (no rollback).

use std::path::{Path, PathBuf};

use dynconf_core::Settings;
use dynconf_renderer::{RenderContext, TemplateEngine};

use crate::defs;
use crate::error::{io_err, GenError};
use crate::writer::{write_if_changed, WriteResult};

/// One processed definitions entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig {
    /// Resolved template path.
    pub template: PathBuf,
    /// Write outcome; carries the resolved output path.
    pub write: WriteResult,
}

/// Summary of a full generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Resolved definitions file path.
    pub definitions_path: PathBuf,
    /// One entry per processed definition line, in file order.
    pub configs: Vec<GeneratedConfig>,
}

impl GenerateReport {
    /// True when zero valid definition lines were processed.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Run a generation pass with an explicit context.
///
/// The canonical entrypoint; the settings snapshot inside `ctx` names the
/// definitions file. Zero processed entries is not an error — callers decide
/// how to report it.
pub fn generate(ctx: &RenderContext, dry_run: bool) -> Result<GenerateReport, GenError> {
    let definitions_path = absolutize(&ctx.settings.definitions_path())?;
    // Relative entry paths resolve against the definitions file's directory.
    let base_dir = definitions_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));

    let engine = TemplateEngine::new();

    // The definitions file is itself a template.
    let raw = std::fs::read_to_string(&definitions_path)
        .map_err(|e| io_err(&definitions_path, e))?;
    let rendered = engine.render_str(&raw, ctx)?;
    tracing::debug!("loaded definitions: {}", definitions_path.display());

    let mut configs = Vec::new();
    for entry in defs::parse_definitions(&rendered) {
        let template = entry.template_path(&base_dir);
        let output = entry.output_path(&base_dir);

        let content = engine.render_file(&template, ctx)?;
        let write = write_if_changed(&output, &content, dry_run)?;
        configs.push(GeneratedConfig { template, write });
    }

    Ok(GenerateReport {
        definitions_path,
        configs,
    })
}

/// Run a generation pass with the live process identity and environment.
pub fn generate_from_process(settings: Settings, dry_run: bool) -> Result<GenerateReport, GenError> {
    let ctx = RenderContext::from_process(settings)?;
    generate(&ctx, dry_run)
}

fn absolutize(path: &Path) -> Result<PathBuf, GenError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|e| io_err(path, e))?;
        Ok(cwd.join(path))
    }
}
