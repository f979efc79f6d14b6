// scratchcards: points and cascading copies

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use regex::Regex;
use std::collections::HashSet;

// Points of a card double with every match after the first one.
fn card_points(matches: usize) -> Option<i64> {
    match matches {
        0 => Some(0),
        m if m < 64 => Some(1_i64 << (m - 1)),
        _ => None,
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let number_regex = Regex::new(r"\d+")?;
    let numbers = |text: &str| -> PuzzleResult<HashSet<u32>> {
        number_regex
            .find_iter(text)
            .map(|m| m.as_str().parse::<u32>().map_err(PuzzleError::from))
            .collect()
    };
    let mut matches = Vec::new();
    let mut score = 0;
    for (index, line) in input.lines().enumerate() {
        let (_, all_numbers) = line
            .split_once(':')
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        let (winning, mine) = all_numbers
            .split_once('|')
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        let card_matches = numbers(winning)?.intersection(&numbers(mine)?).count();
        score += card_points(card_matches)
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        matches.push(card_matches);
    }

    // every card wins one copy of each of the next `matches` cards
    let card_count = matches.len();
    let mut instances = vec![1_i64; card_count];
    for (card, &card_matches) in matches.iter().enumerate() {
        let copies = instances[card];
        for next in (card + 1..=card + card_matches).filter(|&n| n < card_count) {
            instances[next] += copies;
        }
    }
    Ok(Answer::new(score, instances.iter().sum()))
}
