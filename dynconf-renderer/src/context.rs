//! Render context — the fixed set of values every template render receives.

use serde::{Deserialize, Serialize};
use uzers::{get_current_gid, get_current_uid, get_group_by_gid, get_user_by_uid};

use dynconf_core::Settings;

use crate::error::RenderError;

/// Environment variable naming the active virtual environment.
pub const VENV_VAR: &str = "VIRTUAL_ENV";

/// Shared rendering payload.
///
/// Built once per invocation and passed by reference to every render;
/// never mutated afterwards. Templates see `{{ settings.<key> }}`,
/// `{{ venv }}`, `{{ username }}`, `{{ uid }}`, `{{ groupname }}`,
/// `{{ gid }}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderContext {
    /// Application settings snapshot.
    pub settings: Settings,
    /// Virtual-environment path from the process environment.
    pub venv: String,
    /// Name of the user owning the process.
    pub username: String,
    /// Numeric UID of the process.
    pub uid: u32,
    /// Name of the group owning the process.
    pub groupname: String,
    /// Numeric GID of the process.
    pub gid: u32,
}

impl RenderContext {
    /// Build a [`RenderContext`] from explicit values.
    pub fn new(
        settings: Settings,
        venv: impl Into<String>,
        username: impl Into<String>,
        uid: u32,
        groupname: impl Into<String>,
        gid: u32,
    ) -> Self {
        RenderContext {
            settings,
            venv: venv.into(),
            username: username.into(),
            uid,
            groupname: groupname.into(),
            gid,
        }
    }

    /// Build a [`RenderContext`] from the live process: UID/GID resolved to
    /// names via the system identity tables, `VIRTUAL_ENV` from the
    /// environment.
    ///
    /// Fails if the identity tables have no entry for the process UID/GID,
    /// or `VIRTUAL_ENV` is unset.
    pub fn from_process(settings: Settings) -> Result<Self, RenderError> {
        let venv =
            std::env::var(VENV_VAR).map_err(|_| RenderError::MissingEnvVar { name: VENV_VAR })?;

        let uid = get_current_uid();
        let gid = get_current_gid();
        let user = get_user_by_uid(uid).ok_or(RenderError::UnknownUid(uid))?;
        let group = get_group_by_gid(gid).ok_or(RenderError::UnknownGid(gid))?;

        Ok(RenderContext {
            settings,
            venv,
            username: user.name().to_string_lossy().into_owned(),
            uid,
            groupname: group.name().to_string_lossy().into_owned(),
            gid,
        })
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
