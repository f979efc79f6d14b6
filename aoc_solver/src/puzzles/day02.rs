// cube game: which games are possible and minimal cube sets

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use regex::Regex;

// red, green, blue
const BAG: [i64; 3] = [12, 13, 14];

fn color_index(color: &str) -> Option<usize> {
    match color {
        "red" => Some(0),
        "green" => Some(1),
        "blue" => Some(2),
        _ => None,
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let game_regex = Regex::new(r"^Game (\d+): (.*)$")?;
    let color_regex = Regex::new(r"(\d+) (red|green|blue)")?;
    let mut game_id_sum = 0;
    let mut power_sum = 0;
    for (index, line) in input.lines().enumerate() {
        let captures = game_regex
            .captures(line)
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        let id: i64 = captures[1].parse()?;
        let mut min_required = [0_i64; 3];
        let mut possible = true;
        for pick in captures[2].split(';') {
            for cubes in color_regex.captures_iter(pick) {
                let count: i64 = cubes[1].parse()?;
                let color = color_index(&cubes[2])
                    .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
                possible &= count <= BAG[color];
                min_required[color] = min_required[color].max(count);
            }
        }
        if possible {
            game_id_sum += id;
        }
        power_sum += min_required.iter().product::<i64>();
    }
    Ok(Answer::new(game_id_sum, power_sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_example() {
        let answer = solve(EXAMPLE, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer, Answer::new(8, 2286));
    }

    #[test]
    fn test_malformed_game() {
        let err = solve("Gme 1: 3 blue\n", &PuzzleSettings::default()).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedLine { line: 1, .. }));
    }
}
