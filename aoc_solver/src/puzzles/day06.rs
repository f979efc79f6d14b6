// boat races: ways to beat the record distance

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use itertools::Itertools;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Race {
    duration: i64,
    record: i64,
}

impl Race {
    fn ways_to_win(&self) -> i64 {
        (1..self.duration)
            .filter(|hold_time| hold_time * (self.duration - hold_time) > self.record)
            .count() as i64
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let number_regex = Regex::new(r"\d+")?;
    let (times, records) = input
        .lines()
        .map(|line| {
            number_regex
                .find_iter(line)
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
        })
        .collect_tuple()
        .ok_or_else(|| PuzzleError::MalformedInput("expected time and distance line".into()))?;
    if times.len() != records.len() {
        return Err(PuzzleError::MalformedInput(
            "number of times and distances differ".into(),
        ));
    }
    let races = times
        .iter()
        .zip(records.iter())
        .map(|(time, record)| -> PuzzleResult<Race> {
            Ok(Race {
                duration: time.parse()?,
                record: record.parse()?,
            })
        })
        .collect::<PuzzleResult<Vec<Race>>>()?;
    // part 2: spaces between digits are just bad kerning
    let single_race = Race {
        duration: times.concat().parse()?,
        record: records.concat().parse()?,
    };
    Ok(Answer::new(
        races.iter().map(Race::ways_to_win).product(),
        single_race.ways_to_win(),
    ))
}
