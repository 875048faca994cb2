//! Dynconf core library — application settings model, loading, errors.
//!
//! - [`settings`] — [`Settings`] struct and YAML loading
//! - [`error`] — [`SettingsError`]

pub mod error;
pub mod settings;

pub use error::SettingsError;
pub use settings::Settings;
