// cosmic expansion: distances between galaxies in an expanding universe

use super::{Answer, PuzzleResult};
use crate::configuration::PuzzleSettings;
use grid_map::{Addressing, Coordinate, Grid};
use itertools::Itertools;

const GALAXY: char = '#';
const SPACE: char = '.';

fn empty_rows(grid: &Grid<char>) -> Vec<usize> {
    grid.rows()
        .enumerate()
        .filter(|(_, row)| !row.contains(&GALAXY))
        .map(|(y, _)| y)
        .collect()
}

fn empty_cols(grid: &Grid<char>) -> Vec<usize> {
    grid.cols()
        .iter()
        .enumerate()
        .filter(|(_, col)| !col.contains(&GALAXY))
        .map(|(x, _)| x)
        .collect()
}

fn galaxies(grid: &Grid<char>) -> Vec<Coordinate> {
    grid.iter()
        .filter(|(_, ch)| **ch == GALAXY)
        .map(|(position, _)| position)
        .collect()
}

fn sum_of_distances(galaxies: &[Coordinate]) -> i64 {
    galaxies
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.taxicab_distance(*b) as i64)
        .sum()
}

/// Double every empty row and column by inserting a copy into the grid.
/// Inserting from the back keeps the indices of remaining insertions valid.
pub fn expand_grid(grid: &mut Grid<char>) -> PuzzleResult<()> {
    for y in empty_rows(grid).into_iter().rev() {
        grid.insert_row(y, vec![SPACE; grid.col_count()])?;
    }
    for x in empty_cols(grid).into_iter().rev() {
        grid.insert_col(x, vec![SPACE; grid.row_count()])?;
    }
    Ok(())
}

/// Galaxy positions after replacing every empty row and column with `factor` of them.
pub fn expanded_galaxies(grid: &Grid<char>, factor: u64) -> Vec<Coordinate> {
    let rows = empty_rows(grid);
    let cols = empty_cols(grid);
    let extra = factor.saturating_sub(1) as i64;
    galaxies(grid)
        .into_iter()
        .map(|galaxy| {
            let shift_x = cols.iter().filter(|x| (**x as i64) < galaxy.x()).count() as i64;
            let shift_y = rows.iter().filter(|y| (**y as i64) < galaxy.y()).count() as i64;
            Coordinate::new(galaxy.x() + shift_x * extra, galaxy.y() + shift_y * extra)
        })
        .collect()
}

pub fn solve(input: &str, settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let grid = Grid::from_lines(input, Addressing::Bounded, SPACE)?;
    let mut expanded = grid.clone();
    expand_grid(&mut expanded)?;
    if settings.verbose {
        println!(
            "Universe expanded from {}x{} to {}x{}.",
            grid.col_count(),
            grid.row_count(),
            expanded.col_count(),
            expanded.row_count()
        );
    }
    let part1 = sum_of_distances(&galaxies(&expanded));
    let part2 = sum_of_distances(&expanded_galaxies(
        &grid,
        settings.galaxies.expansion_factor,
    ));
    Ok(Answer::new(part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    #[test]
    fn test_doubling_grid() {
        let mut grid = Grid::from_lines(EXAMPLE, Addressing::Bounded, SPACE).unwrap();
        expand_grid(&mut grid).unwrap();
        assert_eq!(grid.row_count(), 12);
        assert_eq!(grid.col_count(), 13);
        assert_eq!(sum_of_distances(&galaxies(&grid)), 374);
    }

    #[test]
    fn test_expansion_factors() {
        let grid = Grid::from_lines(EXAMPLE, Addressing::Bounded, SPACE).unwrap();
        assert_eq!(sum_of_distances(&expanded_galaxies(&grid, 2)), 374);
        assert_eq!(sum_of_distances(&expanded_galaxies(&grid, 10)), 1030);
        assert_eq!(sum_of_distances(&expanded_galaxies(&grid, 100)), 8410);
    }

    #[test]
    fn test_solve_with_settings() {
        let mut settings = PuzzleSettings::default();
        settings.galaxies.expansion_factor = 10;
        let answer = solve(EXAMPLE, &settings).unwrap();
        assert_eq!(answer, Answer::new(374, 1030));
    }
}
