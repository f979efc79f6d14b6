// pipe maps: grids of connector symbols with one disguised start cell

mod containment;
mod error;
mod tracer;

pub use containment::{is_crossing, Containment};
pub use error::{PipeLoopError, PipeLoopResult};
pub use tracer::PipeLoop;

use grid_map::{Addressing, Coordinate, Direction, Directions, Grid, GridError};
use std::str::FromStr;

pub const START_SYMBOL: char = 'S';

pub fn connector_from_symbol(symbol: char) -> Option<Directions> {
    match symbol {
        '|' => Some(Directions::VERTICAL),
        '-' => Some(Directions::HORIZONTAL),
        'L' => Some(Directions::NORTH_EAST),
        'J' => Some(Directions::NORTH_WEST),
        '7' => Some(Directions::SOUTH_WEST),
        'F' => Some(Directions::SOUTH_EAST),
        '.' | START_SYMBOL => Some(Directions::EMPTY),
        _ => None,
    }
}

pub fn connector_symbol(connector: Directions) -> char {
    match connector {
        Directions::VERTICAL => '|',
        Directions::HORIZONTAL => '-',
        Directions::NORTH_EAST => 'L',
        Directions::NORTH_WEST => 'J',
        Directions::SOUTH_WEST => '7',
        Directions::SOUTH_EAST => 'F',
        Directions::EMPTY => '.',
        // dead ends and junctions never come from parsing
        _ => '?',
    }
}

/// Grid of connectors. The start cell already carries its inferred shape.
#[derive(Debug, Clone)]
pub struct PipeMap {
    grid: Grid<Directions>,
    start: Coordinate,
}

impl FromStr for PipeMap {
    type Err = PipeLoopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut starts: Vec<Coordinate> = Vec::new();
        let mut grid = Grid::parse(s, Addressing::Bounded, Directions::EMPTY, |position, ch| {
            if ch == START_SYMBOL {
                starts.push(position);
            }
            connector_from_symbol(ch).ok_or(GridError::InvalidCharacter { ch, position })
        })?;
        let start = match starts.as_slice() {
            [] => return Err(PipeLoopError::MissingStart),
            [start] => *start,
            [first, second, ..] => return Err(PipeLoopError::MultipleStarts(*first, *second)),
        };
        let shape = infer_start_shape(&grid, start)?;
        grid.set(start, shape)?;
        Ok(Self { grid, start })
    }
}

// A direction belongs to the start shape, if the neighbor in this direction
// connects back to the start cell.
fn infer_start_shape(grid: &Grid<Directions>, start: Coordinate) -> PipeLoopResult<Directions> {
    let shape: Directions = grid
        .neighbors(start, false)
        .into_iter()
        .filter_map(|neighbor| {
            let direction = neighbor.orientation.as_direction()?;
            neighbor
                .cell
                .filter(|connector| connector.contains(direction.opposite()))
                .map(|_| direction)
        })
        .collect();
    if shape.len() != 2 {
        return Err(PipeLoopError::InvalidStartShape {
            position: start,
            found: shape.len(),
        });
    }
    Ok(shape)
}

impl PipeMap {
    pub fn start(&self) -> Coordinate {
        self.start
    }
    pub fn start_shape(&self) -> Directions {
        self.connector_at(self.start)
    }
    pub fn grid(&self) -> &Grid<Directions> {
        &self.grid
    }
    pub fn connector_at(&self, position: Coordinate) -> Directions {
        self.grid.contents_at(position)
    }
    pub fn connects(&self, position: Coordinate, direction: Direction) -> bool {
        self.connector_at(position).contains(direction)
    }
}

#[cfg(test)]
mod tests;
