// calibration values from first and last digit of each line

use super::{Answer, PuzzleResult};
use crate::configuration::PuzzleSettings;

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

// digit starting at the beginning of text; spelled digits may overlap
fn leading_digit(text: &str, with_spelled: bool) -> Option<i64> {
    let first = text.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit as i64);
    }
    if !with_spelled {
        return None;
    }
    SPELLED_DIGITS
        .iter()
        .position(|spelled| text.starts_with(spelled))
        .map(|index| index as i64 + 1)
}

// lines without any digit contribute nothing
fn calibration_value(line: &str, with_spelled: bool) -> i64 {
    let mut digits = line
        .char_indices()
        .filter_map(|(index, _)| leading_digit(&line[index..], with_spelled));
    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0,
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let (part1, part2) = input.lines().fold((0, 0), |(part1, part2), line| {
        (
            part1 + calibration_value(line, false),
            part2 + calibration_value(line, true),
        )
    });
    Ok(Answer::new(part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        let input = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
        let answer = solve(input, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer.part1, Some(142));
    }

    #[test]
    fn test_spelled_digits() {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
                     4nineeightseven2\nzoneight234\n7pqrstsixteen\n";
        let answer = solve(input, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer.part2, Some(281));
        // overlapping spelled digits at the end of line
        assert_eq!(calibration_value("twone", true), 21);
        assert_eq!(calibration_value("twone", false), 0);
    }
}
