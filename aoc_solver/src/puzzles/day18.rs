// lavaduct lagoon: volume of a trench loop via shoelace formula and Pick's theorem

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use grid_map::{Coordinate, Direction};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigStep {
    direction: Direction,
    meters: i64,
}

fn direction_from_letter(letter: &str) -> Option<Direction> {
    match letter {
        "U" => Some(Direction::North),
        "R" => Some(Direction::East),
        "D" => Some(Direction::South),
        "L" => Some(Direction::West),
        _ => None,
    }
}

// last hex digit encodes direction: 0 right, 1 down, 2 left, 3 up
fn direction_from_digit(digit: u8) -> Option<Direction> {
    match digit {
        b'0' => Some(Direction::East),
        b'1' => Some(Direction::South),
        b'2' => Some(Direction::West),
        b'3' => Some(Direction::North),
        _ => None,
    }
}

fn parse_plan(input: &str) -> PuzzleResult<(Vec<DigStep>, Vec<DigStep>)> {
    let step_regex = Regex::new(r"^([LRUD]) (\d+) \(#([0-9a-fA-F]{5})([0-9a-fA-F])\)$")?;
    let mut plan = Vec::new();
    let mut color_plan = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let captures = step_regex
            .captures(line.trim())
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        let direction = direction_from_letter(&captures[1])
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        plan.push(DigStep {
            direction,
            meters: captures[2].parse()?,
        });
        let direction = direction_from_digit(captures[4].as_bytes()[0])
            .ok_or_else(|| PuzzleError::malformed_line(index, line))?;
        color_plan.push(DigStep {
            direction,
            meters: i64::from_str_radix(&captures[3], 16)?,
        });
    }
    Ok((plan, color_plan))
}

/// Number of cells of trench and interior. The trench is a loop of cells, which
/// centers are the corners of a polygon. Pick's theorem gives the interior cells
/// from polygon area and boundary cells: i = A - b/2 + 1.
fn lagoon_volume(plan: &[DigStep]) -> i64 {
    let mut position = Coordinate::new(0, 0);
    let mut double_area = 0;
    let mut boundary = 0;
    for step in plan {
        let (dx, dy) = step.direction.offset();
        let next = position.offset(dx * step.meters, dy * step.meters);
        double_area += position.x() * next.y() - next.x() * position.y();
        boundary += step.meters;
        position = next;
    }
    (double_area.abs() + boundary) / 2 + 1
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let (plan, color_plan) = parse_plan(input)?;
    Ok(Answer::new(
        lagoon_volume(&plan),
        lagoon_volume(&color_plan),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn test_example() {
        let answer = solve(EXAMPLE, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer, Answer::new(62, 952408144115));
    }

    #[test]
    fn test_square() {
        let plan: Vec<DigStep> = [Direction::East, Direction::South, Direction::West, Direction::North]
            .into_iter()
            .map(|direction| DigStep {
                direction,
                meters: 2,
            })
            .collect();
        // 3x3 cells, 8 of them trench
        assert_eq!(lagoon_volume(&plan), 9);
    }

    #[test]
    fn test_malformed_step() {
        let err = solve("R 6 (#70c710)\nX 5 (#0dc571)\n", &PuzzleSettings::default()).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedLine { line: 2, .. }));
    }
}
