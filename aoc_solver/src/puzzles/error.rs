// error definitions for puzzle solvers

use crate::{error::error_chain_fmt, pipe_loop::PipeLoopError};
use grid_map::GridError;

pub type PuzzleResult<T> = Result<T, PuzzleError>;

#[derive(thiserror::Error)]
pub enum PuzzleError {
    #[error("Something went wrong with the grid.")]
    GridError(#[from] GridError),
    #[error("Something went wrong with the pipe loop.")]
    PipeLoopError(#[from] PipeLoopError),
    #[error("Could not parse number.")]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error("Invalid regular expression.")]
    RegexError(#[from] regex::Error),
    #[error("Malformed input line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl PuzzleError {
    pub fn malformed_line(index: usize, content: &str) -> Self {
        Self::MalformedLine {
            line: index + 1,
            content: content.to_string(),
        }
    }
}

impl std::fmt::Debug for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
