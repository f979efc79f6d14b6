// oasis histories: extrapolate with difference pyramids

use super::{Answer, PuzzleResult};
use crate::configuration::PuzzleSettings;
use itertools::Itertools;

fn differences(history: &[i64]) -> Vec<i64> {
    history.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

fn next_value(history: &[i64]) -> i64 {
    if history.iter().all(|v| *v == 0) {
        return 0;
    }
    history[history.len() - 1] + next_value(&differences(history))
}

fn previous_value(history: &[i64]) -> i64 {
    if history.iter().all(|v| *v == 0) {
        return 0;
    }
    history[0] - previous_value(&differences(history))
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let histories = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|n| n.parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Answer::new(
        histories.iter().map(|h| next_value(h)).sum(),
        histories.iter().map(|h| previous_value(h)).sum(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let input = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";
        let answer = solve(input, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer, Answer::new(114, 2));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(next_value(&[5]), 5);
        assert_eq!(previous_value(&[5]), 5);
        assert_eq!(next_value(&[]), 0);
    }
}
