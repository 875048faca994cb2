//! Definitions file parsing.
//!
//! A definitions file lists one config per line in `output=template` form.
//! The file itself goes through the template engine before parsing, so the
//! rules here apply to the *rendered* text:
//!
//! - blank lines are skipped
//! - lines starting with `#` are comments
//! - a line with exactly one `=` produces one entry, both sides trimmed
//! - anything else (zero or two-plus `=`) is silently skipped

use std::path::{Path, PathBuf};

/// One `output=template` pair from the definitions file.
///
/// Entries are independent: no deduplication, no cross-entry state, file
/// order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionEntry {
    pub output: PathBuf,
    pub template: PathBuf,
}

impl DefinitionEntry {
    /// Parse a single rendered line. Returns `None` for blanks, comments,
    /// and anything not shaped like `output=template`.
    pub fn parse_line(line: &str) -> Option<DefinitionEntry> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() != 2 {
            return None;
        }
        Some(DefinitionEntry {
            output: PathBuf::from(parts[0].trim()),
            template: PathBuf::from(parts[1].trim()),
        })
    }

    /// Output path with relative paths resolved against `base_dir`
    /// (the definitions file's directory).
    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        resolve(&self.output, base_dir)
    }

    /// Template path with relative paths resolved against `base_dir`.
    pub fn template_path(&self, base_dir: &Path) -> PathBuf {
        resolve(&self.template, base_dir)
    }
}

fn resolve(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Parse every line of a rendered definitions file, skipping invalid lines.
pub fn parse_definitions(rendered: &str) -> Vec<DefinitionEntry> {
    rendered.lines().filter_map(DefinitionEntry::parse_line).collect()
}
