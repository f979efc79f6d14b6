// settings of puzzles, loaded from optional TOML file

use super::{CliInput, SettingsError, SettingsResult};

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalaxySettings {
    /// Every empty row and column is replaced by this many empty rows or columns.
    pub expansion_factor: u64,
}

impl Default for GalaxySettings {
    fn default() -> Self {
        Self {
            expansion_factor: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RockSettings {
    /// Number of spin cycles (tilting north, west, south, and east).
    pub spin_cycles: u64,
}

impl Default for RockSettings {
    fn default() -> Self {
        Self {
            spin_cycles: 1_000_000_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub input_dir: Option<PathBuf>,
    pub galaxies: GalaxySettings,
    pub rocks: RockSettings,
}

impl SettingsFile {
    pub fn load<P: AsRef<Path>>(path: P) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|err| SettingsError::ReadSettingsError(path.as_ref().to_path_buf(), err))?;
        content.parse()
    }
}

impl std::str::FromStr for SettingsFile {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let settings: SettingsFile = toml::from_str(s)?;
        if settings.galaxies.expansion_factor == 0 {
            return Err(SettingsError::InvalidSetting(
                "galaxies.expansion_factor".into(),
                "must be at least 1".into(),
            ));
        }
        Ok(settings)
    }
}

/// Settings handed to every puzzle solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSettings {
    pub verbose: bool,
    pub input_dir: PathBuf,
    pub galaxies: GalaxySettings,
    pub rocks: RockSettings,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self::merge(false, None, SettingsFile::default())
    }
}

impl PuzzleSettings {
    /// Command line options win over settings file.
    pub fn merge(verbose: bool, input_dir: Option<PathBuf>, file: SettingsFile) -> Self {
        Self {
            verbose,
            input_dir: input_dir
                .or(file.input_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            galaxies: file.galaxies,
            rocks: file.rocks,
        }
    }

    pub fn from_cli<O: CliInput>(options: &O) -> SettingsResult<Self> {
        let file = match &options.input().config {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        Ok(Self::merge(
            options.verbose(),
            options.input().input_dir.clone(),
            file,
        ))
    }
}
