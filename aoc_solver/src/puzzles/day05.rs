// seeds mapped through a chain of range maps

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RangeMapping {
    destination: i64,
    source: i64,
    length: i64,
}

#[derive(Debug, Default)]
struct RangeMap {
    mappings: Vec<RangeMapping>,
}

impl RangeMap {
    // values outside of all ranges map to themselves
    fn lookup(&self, value: i64) -> i64 {
        self.mappings
            .iter()
            .find(|m| value >= m.source && value < m.source + m.length)
            .map(|m| m.destination + (value - m.source))
            .unwrap_or(value)
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let number_regex = Regex::new(r"\d+")?;
    let parse_numbers = |line: &str| {
        number_regex
            .find_iter(line)
            .map(|m| m.as_str().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
    };
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());
    let (_, seeds) = lines
        .next()
        .filter(|(_, line)| line.starts_with("seeds:"))
        .ok_or_else(|| PuzzleError::MalformedInput("missing seeds".into()))?;
    let seeds = parse_numbers(seeds)?;

    // maps are applied in the order of the input
    let mut maps: Vec<RangeMap> = Vec::new();
    for (index, line) in lines {
        if line.trim_end().ends_with("map:") {
            maps.push(RangeMap::default());
            continue;
        }
        let numbers = parse_numbers(line)?;
        let (Some(map), &[destination, source, length]) = (maps.last_mut(), numbers.as_slice()) else {
            return Err(PuzzleError::malformed_line(index, line));
        };
        map.mappings.push(RangeMapping {
            destination,
            source,
            length,
        });
    }

    let lowest_location = seeds
        .iter()
        .map(|seed| maps.iter().fold(*seed, |value, map| map.lookup(value)))
        .min()
        .ok_or_else(|| PuzzleError::MalformedInput("no seeds".into()))?;
    Ok(Answer::only_part1(lowest_location))
}
