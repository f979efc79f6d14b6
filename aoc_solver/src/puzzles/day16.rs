// the floor will be lava: beams of light bouncing through mirrors and splitters

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use fixedbitset::FixedBitSet;
use grid_map::{Addressing, Coordinate, Direction, Grid, GridError};

fn parse_contraption(input: &str) -> PuzzleResult<Grid<char>> {
    let grid = Grid::parse(input, Addressing::Bounded, '.', |position, ch| match ch {
        '.' | '/' | '\\' | '|' | '-' => Ok(ch),
        _ => Err(GridError::InvalidCharacter { ch, position }),
    })?;
    Ok(grid)
}

// Headings of a beam leaving a tile, which it entered with given heading.
fn deflect(tile: char, heading: Direction) -> (Direction, Option<Direction>) {
    match (tile, heading) {
        ('/', Direction::East) => (Direction::North, None),
        ('/', Direction::North) => (Direction::East, None),
        ('/', Direction::West) => (Direction::South, None),
        ('/', Direction::South) => (Direction::West, None),
        ('\\', Direction::East) => (Direction::South, None),
        ('\\', Direction::South) => (Direction::East, None),
        ('\\', Direction::West) => (Direction::North, None),
        ('\\', Direction::North) => (Direction::West, None),
        ('|', h) if !h.is_vertical() => (Direction::North, Some(Direction::South)),
        ('-', h) if h.is_vertical() => (Direction::East, Some(Direction::West)),
        (_, h) => (h, None),
    }
}

/// Number of tiles energized by a beam entering `start` with `heading`.
pub fn energized(grid: &Grid<char>, start: Coordinate, heading: Direction) -> usize {
    let mut visited = FixedBitSet::with_capacity(grid.len() * 4);
    let mut energized = FixedBitSet::with_capacity(grid.len());
    let mut beams = vec![(start, heading)];
    while let Some((position, heading)) = beams.pop() {
        let Some(index) = grid.index(position) else {
            continue;
        };
        // loops of beams end here
        if visited.put(index * 4 + heading.index()) {
            continue;
        }
        energized.insert(index);
        let tile = grid.contents_at(position);
        let (next, split) = deflect(tile, heading);
        beams.push((position.step(next), next));
        if let Some(split) = split {
            beams.push((position.step(split), split));
        }
    }
    energized.count_ones(..)
}

// All beams entering from the edges of the grid.
fn edge_beams(grid: &Grid<char>) -> Vec<(Coordinate, Direction)> {
    let max_x = grid.col_count() as i64 - 1;
    let max_y = grid.row_count() as i64 - 1;
    let horizontal = (0..=max_y).flat_map(|y| {
        [
            (Coordinate::new(0, y), Direction::East),
            (Coordinate::new(max_x, y), Direction::West),
        ]
    });
    let vertical = (0..=max_x).flat_map(|x| {
        [
            (Coordinate::new(x, 0), Direction::South),
            (Coordinate::new(x, max_y), Direction::North),
        ]
    });
    horizontal.chain(vertical).collect()
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let grid = parse_contraption(input)?;
    if grid.is_empty() {
        return Err(PuzzleError::MalformedInput("empty contraption".into()));
    }
    let part1 = energized(&grid, Coordinate::new(0, 0), Direction::East);
    let part2 = edge_beams(&grid)
        .into_iter()
        .map(|(start, heading)| energized(&grid, start, heading))
        .max()
        .unwrap_or_default();
    Ok(Answer::new(part1 as i64, part2 as i64))
}
