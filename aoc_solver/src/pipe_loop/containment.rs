// classify cells as enclosed by a traced loop

use super::{PipeLoop, PipeMap};
use grid_map::{Coordinate, Direction, Directions};

/// A horizontal ray crosses the loop at every loop cell whose connector points
/// north ('|', 'L' and 'J'). Cells pointing south only ('7', 'F') or not at
/// all ('-') merely touch the ray.
pub fn is_crossing(connector: Directions) -> bool {
    connector.contains(Direction::North)
}

pub struct Containment<'a> {
    map: &'a PipeMap,
    pipe_loop: &'a PipeLoop,
}

impl<'a> Containment<'a> {
    pub fn new(map: &'a PipeMap, pipe_loop: &'a PipeLoop) -> Self {
        Self { map, pipe_loop }
    }

    pub fn is_enclosed(&self, position: Coordinate) -> bool {
        !self.pipe_loop.contains(position)
            && self.map.grid().is_inside(position)
            && self.is_boundary_enclosed(position)
            && self.crossings_to_west(position) % 2 == 1
    }

    pub fn enclosed_cells(&self) -> Vec<Coordinate> {
        self.map
            .grid()
            .iter()
            .map(|(position, _)| position)
            .filter(|position| self.is_enclosed(*position))
            .collect()
    }

    pub fn count_enclosed(&self) -> usize {
        self.enclosed_cells().len()
    }

    // Pre filter: loop cells in all four directions. Necessary, but not sufficient.
    fn is_boundary_enclosed(&self, position: Coordinate) -> bool {
        Direction::ALL
            .into_iter()
            .all(|direction| self.hits_loop(position, direction))
    }

    fn hits_loop(&self, position: Coordinate, direction: Direction) -> bool {
        let grid = self.map.grid();
        std::iter::successors(Some(position.step(direction)), |p| Some(p.step(direction)))
            .take_while(|p| grid.is_inside(*p))
            .any(|p| self.pipe_loop.contains(p))
    }

    fn crossings_to_west(&self, position: Coordinate) -> usize {
        (0..position.x())
            .map(|x| Coordinate::new(x, position.y()))
            .filter(|p| self.pipe_loop.contains(*p) && is_crossing(self.map.connector_at(*p)))
            .count()
    }
}
