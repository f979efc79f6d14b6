// parabolic reflector dish: tilting rounded rocks a billion times

use super::{Answer, PuzzleResult};
use crate::{configuration::PuzzleSettings, periodic::state_at};
use grid_map::{Addressing, Coordinate, Grid};

const ROUND: char = 'O';
const CUBE: char = '#';
const EMPTY: char = '.';

/// Roll all rounded rocks north until they hit a cube rock, another rock, or the edge.
pub fn tilt_north(grid: &mut Grid<char>) {
    for x in 0..grid.col_count() as i64 {
        let mut free = 0;
        for y in 0..grid.row_count() as i64 {
            let position = Coordinate::new(x, y);
            match grid.cell_at(position).copied() {
                Some(CUBE) => free = y + 1,
                Some(ROUND) => {
                    if free < y {
                        if let Some(cell) = grid.cell_at_mut(position) {
                            *cell = EMPTY;
                        }
                        if let Some(cell) = grid.cell_at_mut(Coordinate::new(x, free)) {
                            *cell = ROUND;
                        }
                    }
                    free += 1;
                }
                _ => (),
            }
        }
    }
}

/// Tilt north, west, south and east. Rotating clockwise after each tilt brings
/// the next direction to the north and the grid back into place after four tilts.
pub fn spin_cycle(grid: &mut Grid<char>) {
    for _ in 0..4 {
        tilt_north(grid);
        grid.rotate_clockwise();
    }
}

pub fn north_load(grid: &Grid<char>) -> i64 {
    let row_count = grid.row_count() as i64;
    grid.iter()
        .filter(|(_, ch)| **ch == ROUND)
        .map(|(position, _)| row_count - position.y())
        .sum()
}

pub fn solve(input: &str, settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let grid = Grid::from_lines(input, Addressing::Bounded, EMPTY)?;

    let mut tilted = grid.clone();
    tilt_north(&mut tilted);

    let mut transition = |grid: &Grid<char>| {
        let mut next = grid.clone();
        spin_cycle(&mut next);
        next
    };
    let (spun, cycle) = state_at(grid, &mut transition, settings.rocks.spin_cycles);
    if settings.verbose {
        match cycle {
            Some(cycle) => println!(
                "Rocks repeat after {} spin cycles with period {}.",
                cycle.start, cycle.length
            ),
            None => println!("No repeated rock positions before target."),
        }
    }
    Ok(Answer::new(north_load(&tilted), north_load(&spun)))
}
