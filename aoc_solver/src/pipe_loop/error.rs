// error definitions for pipe maps and loop tracing

use crate::error::error_chain_fmt;
use grid_map::{Coordinate, GridError};

pub type PipeLoopResult<T> = Result<T, PipeLoopError>;

#[derive(thiserror::Error)]
pub enum PipeLoopError {
    #[error("Something went wrong with building the pipe grid.")]
    GridError(#[from] GridError),
    #[error("Pipe map does not contain a start cell 'S'.")]
    MissingStart,
    #[error("Pipe map contains more than one start cell: {0} and {1}.")]
    MultipleStarts(Coordinate, Coordinate),
    #[error("Start cell at {position} connects to {found} neighbors, expected exactly 2.")]
    InvalidStartShape { position: Coordinate, found: usize },
    #[error("Pipe '{symbol}' at {position} does not continue the loop.")]
    InvalidConnector { position: Coordinate, symbol: char },
    #[error("Loop leaves the pipe map at {0}.")]
    LeftGrid(Coordinate),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for PipeLoopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
