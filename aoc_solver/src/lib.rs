// central library

pub mod configuration;
pub mod error;
pub mod periodic;
pub mod pipe_loop;
pub mod puzzles;
pub mod utilities;

use configuration::{AocCli, CliInput, PuzzleSettings};
use error::{AocError, AocResult};
use puzzles::{solver, Answer, IMPLEMENTED_DAYS};
use utilities::read_input;

use std::time::Instant;

pub struct NoOptions;
pub struct NoSettings;

pub struct AocDataBuilder<O, S> {
    options: O,
    settings: S,
}

impl Default for AocDataBuilder<NoOptions, NoSettings> {
    fn default() -> Self {
        Self::new()
    }
}

impl AocDataBuilder<NoOptions, NoSettings> {
    pub fn new() -> Self {
        Self {
            options: NoOptions,
            settings: NoSettings,
        }
    }

    pub fn set_options(self, options: AocCli) -> AocDataBuilder<AocCli, NoSettings> {
        AocDataBuilder {
            options,
            settings: NoSettings,
        }
    }
}

impl AocDataBuilder<AocCli, NoSettings> {
    pub fn load_settings(self) -> AocResult<AocDataBuilder<AocCli, PuzzleSettings>> {
        let settings = PuzzleSettings::from_cli(&self.options)?;
        if settings.verbose {
            println!("{}", self.options);
        }
        Ok(AocDataBuilder {
            options: self.options,
            settings,
        })
    }
}

impl AocDataBuilder<AocCli, PuzzleSettings> {
    pub fn build(self) -> AocData {
        let days = if self.options.input().days.is_empty() {
            IMPLEMENTED_DAYS.to_vec()
        } else {
            self.options.input().days.clone()
        };
        AocData {
            days,
            settings: self.settings,
        }
    }
}

/// Answer of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayReport {
    pub day: u8,
    pub answer: Answer,
}

pub struct AocData {
    days: Vec<u8>,
    settings: PuzzleSettings,
}

impl AocData {
    pub fn days(&self) -> &[u8] {
        &self.days
    }
    pub fn settings(&self) -> &PuzzleSettings {
        &self.settings
    }

    /// Solve puzzle of `day` with given input text.
    pub fn solve_day(&self, day: u8, input: &str) -> AocResult<Answer> {
        let solve = solver(day).ok_or(AocError::UnknownDay(day))?;
        solve(input, &self.settings).map_err(|err| AocError::PuzzleError(day, err))
    }

    /// Read input of every requested day from input directory and solve it.
    /// Stops at first failing day.
    pub fn run(&self) -> AocResult<Vec<DayReport>> {
        let mut reports = Vec::with_capacity(self.days.len());
        for &day in self.days.iter() {
            // check day before looking for input file
            if solver(day).is_none() {
                return Err(AocError::UnknownDay(day));
            }
            let input = read_input(&self.settings.input_dir, day)?;
            let start = Instant::now();
            let answer = self.solve_day(day, &input)?;
            if self.settings.verbose {
                println!(
                    "Solved day {} ({} bytes of input) in {:?}.",
                    day,
                    input.len(),
                    start.elapsed()
                );
            }
            reports.push(DayReport { day, answer });
        }
        Ok(reports)
    }
}
