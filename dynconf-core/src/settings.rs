//! Application settings loaded once at startup.
//!
//! Settings live in a single YAML file. Two keys drive dynconf itself;
//! every other key is kept and exposed to templates under `settings.<key>`,
//! so a template can reference arbitrary application configuration:
//!
//! ```yaml
//! conf_dir: /etc/myapp
//! dynconf_def_file: /etc/myapp/configs.conf   # optional
//! debug: false
//! static_root: /srv/myapp/static
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Default definitions filename under [`Settings::conf_dir`].
pub const DEFAULT_DEF_FILENAME: &str = "dynamic_configs.conf";

/// Application settings snapshot.
///
/// All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base directory for configuration; the default definitions file lives here.
    pub conf_dir: PathBuf,

    /// Full path to the definitions file. Overrides the default when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynconf_def_file: Option<PathBuf>,

    /// Every other settings key, preserved for template access.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Returns `SettingsError::NotFound` if absent,
    /// `SettingsError::Parse` (with path + line context) if malformed YAML.
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Path to the definitions file: `dynconf_def_file` if configured, else
    /// `{conf_dir}/dynamic_configs.conf`.
    ///
    /// No existence check — a missing file surfaces later as a read error.
    pub fn definitions_path(&self) -> PathBuf {
        match &self.dynconf_def_file {
            Some(path) => path.clone(),
            None => self.conf_dir.join(DEFAULT_DEF_FILENAME),
        }
    }
}
