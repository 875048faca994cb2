//! `dynconf generate` — run one full generation pass.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dynconf_core::Settings;
use dynconf_gen::{generate_from_process, GenerateReport, WriteResult};

/// Arguments for `dynconf generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the application settings YAML file.
    #[arg(long, env = "DYNCONF_SETTINGS", default_value = "dynconf.yaml")]
    pub settings: PathBuf,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let settings = Settings::load(&self.settings)
            .with_context(|| format!("failed to load settings from '{}'", self.settings.display()))?;

        let report =
            generate_from_process(settings, self.dry_run).context("generation failed")?;
        print_report(&report);

        if report.is_empty() {
            eprintln!("No dynamic configs defined");
        }
        Ok(())
    }
}

fn print_report(report: &GenerateReport) {
    println!(
        "Loaded definition file: {}",
        report.definitions_path.display()
    );
    for config in &report.configs {
        println!("Loaded template: {}", config.template.display());
        match &config.write {
            WriteResult::Written { path } => println!("    Updated: {}", path.display()),
            WriteResult::Unchanged { path } => println!("    No change: {}", path.display()),
            WriteResult::WouldWrite { path } => println!("    Would update: {}", path.display()),
        }
    }
}
