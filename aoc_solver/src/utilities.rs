// some utilities to use in project

use std::path::{Path, PathBuf};

use crate::error::{AocError, AocResult};

// macro for adding file and line info to messages
#[macro_export]
macro_rules! add_context {
    ($message:expr) => {
        format!("{} ({}:{})", $message, file!(), line!())
    };
}

pub fn input_file_path<P>(input_dir: P, day: u8) -> PathBuf
where
    P: AsRef<Path>,
{
    input_dir.as_ref().join(format!("day{}.txt", day))
}

pub fn read_input<P>(input_dir: P, day: u8) -> AocResult<String>
where
    P: AsRef<Path>,
{
    let path = input_file_path(input_dir, day);
    std::fs::read_to_string(&path).map_err(|err| AocError::InputFileError(path, err))
}

// split text into blocks separated by blank lines
pub fn blocks(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n")
        .flat_map(|block| block.split("\r\n\r\n"))
        .map(|block| block.trim_matches(&['\r', '\n'][..]))
        .filter(|block| !block.is_empty())
}
