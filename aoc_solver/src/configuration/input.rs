// input options of cli

use clap::Args;
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct InputOptions {
    /// Days of puzzles to solve. Use multiple values to solve multiple days. If no day
    /// is given, all implemented days are solved.
    #[arg(
        value_parser = clap::value_parser!(u8).range(1..=25),
        help = "Days of puzzles to solve (1-25). Solve all implemented days, if omitted."
    )]
    pub days: Vec<u8>,

    /// Directory containing the puzzle inputs. The input of day N is expected in
    /// 'day<N>.txt'. Overwrites 'input_dir' of settings file. Default is 'data'.
    #[arg(short, long, help = "Directory containing the puzzle inputs 'day<N>.txt'.")]
    pub input_dir: Option<PathBuf>,

    /// Path of settings file in TOML format.
    /// file structure:
    /// input_dir = "data"
    /// [galaxies]
    /// expansion_factor = 1000000
    /// [rocks]
    /// spin_cycles = 1000000000
    ///
    /// All keys are optional.
    #[arg(short, long, help = "Path of settings file in TOML format.")]
    pub config: Option<PathBuf>,
}

impl Display for InputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "days: {:?}", self.days)?;
        writeln!(f, "input-dir: {:?}", self.input_dir)?;
        writeln!(f, "config: {:?}", self.config)
    }
}
