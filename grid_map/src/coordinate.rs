// coordinate of a grid cell

use crate::compass::{Compass, Direction};
use std::fmt::{self, Display};

/// Cell coordinate: x is the column, y is the row. Coordinates are not bounds
/// checked; resolving them against a grid is up to the grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    // Ord derives row-major order, because y comes first
    y: i64,
    x: i64,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    pub fn x(&self) -> i64 {
        self.x
    }
    pub fn y(&self) -> i64 {
        self.y
    }
    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
    pub fn neighbor(&self, orientation: Compass) -> Self {
        let (dx, dy) = orientation.offset();
        self.offset(dx, dy)
    }
    pub fn step(&self, direction: Direction) -> Self {
        self.neighbor(direction.into())
    }
    pub fn taxicab_distance(&self, other: Coordinate) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_distance() {
        let origin = Coordinate::new(2, 3);
        assert_eq!(origin.step(Direction::North), Coordinate::new(2, 2));
        assert_eq!(origin.step(Direction::West), Coordinate::new(1, 3));
        assert_eq!(origin.neighbor(Compass::SE), Coordinate::new(3, 4));
        assert_eq!(origin.taxicab_distance(Coordinate::new(-1, 7)), 7);
        assert_eq!(Coordinate::from((4, 5)).to_string(), "(4, 5)");
    }

    #[test]
    fn test_row_major_order() {
        let mut points = vec![
            Coordinate::new(1, 1),
            Coordinate::new(0, 2),
            Coordinate::new(2, 0),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Coordinate::new(2, 0),
                Coordinate::new(1, 1),
                Coordinate::new(0, 2)
            ]
        );
    }
}
