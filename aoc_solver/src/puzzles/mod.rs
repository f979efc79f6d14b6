// puzzle solvers: each parses its input text and computes one or two numbers

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day13;
mod day14;
mod day15;
mod day16;
mod day18;
mod error;

pub use error::{PuzzleError, PuzzleResult};

use crate::configuration::PuzzleSettings;
use std::fmt::{self, Display};

/// Answers of both parts of a puzzle. Not every puzzle provides both parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Answer {
    pub part1: Option<i64>,
    pub part2: Option<i64>,
}

impl Answer {
    pub fn new(part1: i64, part2: i64) -> Self {
        Self {
            part1: Some(part1),
            part2: Some(part2),
        }
    }
    pub fn only_part1(part1: i64) -> Self {
        Self {
            part1: Some(part1),
            part2: None,
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [self.part1, self.part2];
        for (part, answer) in parts.iter().enumerate() {
            match answer {
                Some(answer) => writeln!(f, "part {}: {}", part + 1, answer)?,
                None => writeln!(f, "part {}: -", part + 1)?,
            }
        }
        Ok(())
    }
}

pub type Solver = fn(&str, &PuzzleSettings) -> PuzzleResult<Answer>;

pub const IMPLEMENTED_DAYS: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 16, 18];

pub fn solver(day: u8) -> Option<Solver> {
    let solver: Solver = match day {
        1 => day01::solve,
        2 => day02::solve,
        3 => day03::solve,
        4 => day04::solve,
        5 => day05::solve,
        6 => day06::solve,
        7 => day07::solve,
        8 => day08::solve,
        9 => day09::solve,
        10 => day10::solve,
        11 => day11::solve,
        13 => day13::solve,
        14 => day14::solve,
        15 => day15::solve,
        16 => day16::solve,
        18 => day18::solve,
        _ => return None,
    };
    Some(solver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        for day in IMPLEMENTED_DAYS {
            assert!(solver(day).is_some(), "missing solver of day {}", day);
        }
        assert!(solver(12).is_none());
        assert!(solver(25).is_none());
    }

    #[test]
    fn test_display_answer() {
        assert_eq!(Answer::new(1, 2).to_string(), "part 1: 1\npart 2: 2\n");
        assert_eq!(Answer::only_part1(7).to_string(), "part 1: 7\npart 2: -\n");
    }
}
