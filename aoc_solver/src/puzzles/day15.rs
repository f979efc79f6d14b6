// lens library: HASH algorithm and boxes of labeled lenses

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;

pub fn hash(step: &str) -> usize {
    step.bytes()
        .fold(0, |value, byte| (value + byte as usize) * 17 % 256)
}

#[derive(Debug, PartialEq, Eq)]
enum Operation<'a> {
    Remove(&'a str),
    Insert(&'a str, u8),
}

impl<'a> Operation<'a> {
    fn parse(step: &'a str) -> PuzzleResult<Self> {
        if let Some(label) = step.strip_suffix('-') {
            return Ok(Operation::Remove(label));
        }
        match step.split_once('=') {
            Some((label, focal_length)) => Ok(Operation::Insert(label, focal_length.parse()?)),
            None => Err(PuzzleError::MalformedInput(format!(
                "unknown lens operation '{}'",
                step
            ))),
        }
    }
}

fn focusing_power(steps: &[&str]) -> PuzzleResult<usize> {
    let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
    for step in steps {
        match Operation::parse(step)? {
            Operation::Remove(label) => boxes[hash(label)].retain(|(l, _)| *l != label),
            Operation::Insert(label, focal_length) => {
                let lenses = &mut boxes[hash(label)];
                match lenses.iter_mut().find(|(l, _)| *l == label) {
                    Some(lens) => lens.1 = focal_length,
                    None => lenses.push((label, focal_length)),
                }
            }
        }
    }
    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, (_, focal_length))| (b + 1) * (slot + 1) * *focal_length as usize)
        })
        .sum())
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let steps: Vec<&str> = input
        .split(',')
        .map(|step| step.trim())
        .filter(|step| !step.is_empty())
        .collect();
    let part1: usize = steps.iter().map(|step| hash(step)).sum();
    Ok(Answer::new(part1 as i64, focusing_power(&steps)? as i64))
}
