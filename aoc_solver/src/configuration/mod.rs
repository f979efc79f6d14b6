// configuration options

mod common;
mod error;
mod input;
mod settings;
mod traits;

pub use common::CommonOptions;
pub use error::{SettingsError, SettingsResult};
pub use input::InputOptions;
pub use settings::{GalaxySettings, PuzzleSettings, RockSettings, SettingsFile};
pub use traits::{CliCommon, CliInput};

use clap::Parser;
use std::fmt::{self, Display};

#[derive(Debug, Parser)]
#[command(
    name = "aoc-solver",
    bin_name = "aoc-solver",
    version,
    about,
    term_width = 100,
    long_about = "aoc-solver reads the puzzle input of each requested day from the input \
                  directory ('<input-dir>/day<N>.txt') and prints the answers of both parts. \
                  Without any day all implemented days are solved. Optional settings are read \
                  from a TOML file, e.g.:\n\n\
                  input_dir = \"data\"\n\
                  [galaxies]\n\
                  expansion_factor = 1000000\n\
                  [rocks]\n\
                  spin_cycles = 1000000000\n\n\
                  Command line options win over the settings file."
)]
pub struct AocCli {
    #[command(flatten)]
    common_cli: CommonOptions,

    #[command(flatten)]
    input_cli: InputOptions,
}

impl Display for AocCli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.common_cli)?;
        writeln!(f, "{}", self.input_cli)
    }
}

impl CliCommon for AocCli {
    fn verbose(&self) -> bool {
        self.common_cli.verbose
    }
}

impl CliInput for AocCli {
    fn input(&self) -> &InputOptions {
        &self.input_cli
    }
}

#[cfg(test)]
impl AocCli {
    pub fn with_options(common_cli: CommonOptions, input_cli: InputOptions) -> Self {
        Self {
            common_cli,
            input_cli,
        }
    }
}
