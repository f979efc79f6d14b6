// error definitions for grid construction and mutation

use crate::Coordinate;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {row} has {found} cells, expected {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Inserted line has {found} cells, expected {expected}.")]
    InsertLengthMismatch { expected: usize, found: usize },
    #[error("Insert index {index} is out of range 0..={max}.")]
    InsertIndexOutOfRange { index: usize, max: usize },
    #[error("Coordinate {0} is outside of grid.")]
    OutOfRange(Coordinate),
    #[error("Unexpected character '{ch}' at {position}.")]
    InvalidCharacter { ch: char, position: Coordinate },
}
