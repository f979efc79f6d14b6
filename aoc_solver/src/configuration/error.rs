// error definitions for settings

use crate::error::error_chain_fmt;
use std::path::PathBuf;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(thiserror::Error)]
pub enum SettingsError {
    #[error("Could not read settings file '{}'.", .0.display())]
    ReadSettingsError(PathBuf, #[source] std::io::Error),
    #[error("Settings file is not valid TOML.")]
    TomlError(#[from] toml::de::Error),
    #[error("Invalid setting '{0}': {1}")]
    InvalidSetting(String, String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
