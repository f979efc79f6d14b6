// point of incidence: mirror lines in patterns of ash and rocks

use super::{Answer, PuzzleResult};
use crate::{configuration::PuzzleSettings, utilities::blocks};
use grid_map::{Addressing, Grid};

// Number of cells differing between two lines.
fn differences(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).filter(|(a, b)| a != b).count()
}

/// Number of lines before a mirror line, which is hit by exactly `smudges`
/// differing cells over all mirrored line pairs.
fn reflection(lines: &[Vec<char>], smudges: usize) -> Option<usize> {
    (1..lines.len()).find(|&mirror| {
        lines[..mirror]
            .iter()
            .rev()
            .zip(&lines[mirror..])
            .map(|(a, b)| differences(a, b))
            .sum::<usize>()
            == smudges
    })
}

fn summarize(grid: &Grid<char>, smudges: usize) -> i64 {
    let rows: Vec<Vec<char>> = grid.rows().map(|row| row.to_vec()).collect();
    if let Some(above) = reflection(&rows, smudges) {
        return 100 * above as i64;
    }
    reflection(&grid.cols(), smudges).unwrap_or_default() as i64
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let patterns = blocks(input)
        .map(|block| Grid::from_lines(block, Addressing::Bounded, '.'))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Answer::new(
        patterns.iter().map(|p| summarize(p, 0)).sum(),
        patterns.iter().map(|p| summarize(p, 1)).sum(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn test_example() {
        let answer = solve(EXAMPLE, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer, Answer::new(405, 400));
    }

    #[test]
    fn test_vertical_and_horizontal_mirrors() {
        let mut patterns = blocks(EXAMPLE);
        let first = Grid::from_lines(patterns.next().unwrap(), Addressing::Bounded, '.').unwrap();
        let second = Grid::from_lines(patterns.next().unwrap(), Addressing::Bounded, '.').unwrap();
        assert_eq!(summarize(&first, 0), 5);
        assert_eq!(summarize(&second, 0), 400);
        assert_eq!(summarize(&first, 1), 300);
        assert_eq!(summarize(&second, 1), 100);
    }
}
