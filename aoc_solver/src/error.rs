// error and result definitions

use crate::{configuration::SettingsError, puzzles::PuzzleError};

use std::path::PathBuf;

pub type AocResult<T> = Result<T, AocError>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum AocError {
    #[error("Something went wrong while solving puzzle of day {0}.")]
    PuzzleError(u8, #[source] PuzzleError),
    #[error("Something went wrong with loading settings.")]
    SettingsError(#[from] SettingsError),
    #[error("Could not read input file '{}'.", .0.display())]
    InputFileError(PathBuf, #[source] std::io::Error),
    #[error("No solver available for day {0}.")]
    UnknownDay(u8),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for AocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
