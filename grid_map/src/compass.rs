// compass orientations of neighbors and cardinal direction sets

use std::fmt::{self, Display};

/// All eight orientations around a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// Clockwise, starting at north.
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    // y grows downwards (row index), x grows to the right (column index)
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Compass::N => (0, -1),
            Compass::NE => (1, -1),
            Compass::E => (1, 0),
            Compass::SE => (1, 1),
            Compass::S => (0, 1),
            Compass::SW => (-1, 1),
            Compass::W => (-1, 0),
            Compass::NW => (-1, -1),
        }
    }
    pub fn is_cardinal(&self) -> bool {
        matches!(self, Compass::N | Compass::E | Compass::S | Compass::W)
    }
    pub fn as_direction(&self) -> Option<Direction> {
        match self {
            Compass::N => Some(Direction::North),
            Compass::E => Some(Direction::East),
            Compass::S => Some(Direction::South),
            Compass::W => Some(Direction::West),
            _ => None,
        }
    }
}

/// One of the four primary directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
    pub fn offset(&self) -> (i64, i64) {
        Compass::from(*self).offset()
    }
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
    // index into a per-direction table, e.g. a visited bitset
    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
    fn bit(&self) -> u8 {
        1 << self.index()
    }
}

impl From<Direction> for Compass {
    fn from(value: Direction) -> Self {
        match value {
            Direction::North => Compass::N,
            Direction::East => Compass::E,
            Direction::South => Compass::S,
            Direction::West => Compass::W,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Set of primary directions, stored as a bitmask. Composite shapes like
/// north + east are plain values of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const EMPTY: Directions = Directions(0);
    pub const NORTH: Directions = Directions(1);
    pub const EAST: Directions = Directions(2);
    pub const SOUTH: Directions = Directions(4);
    pub const WEST: Directions = Directions(8);
    pub const VERTICAL: Directions = Directions(1 | 4);
    pub const HORIZONTAL: Directions = Directions(2 | 8);
    pub const NORTH_EAST: Directions = Directions(1 | 2);
    pub const NORTH_WEST: Directions = Directions(1 | 8);
    pub const SOUTH_EAST: Directions = Directions(4 | 2);
    pub const SOUTH_WEST: Directions = Directions(4 | 8);

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }
    pub fn with(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }
    pub fn without(mut self, direction: Direction) -> Self {
        self.remove(direction);
        self
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
    pub fn first(self) -> Option<Direction> {
        self.iter().next()
    }
}

impl From<Direction> for Directions {
    fn from(value: Direction) -> Self {
        Directions(value.bit())
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Directions::EMPTY, |set, direction| set.with(direction))
    }
}

impl std::ops::BitOr for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Self) -> Self::Output {
        Directions(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_compass_order_and_directions() {
        // clockwise from north: x and y of consecutive offsets change by at most one
        for (a, b) in Compass::ALL.iter().zip(Compass::ALL.iter().cycle().skip(1)) {
            let ((ax, ay), (bx, by)) = (a.offset(), b.offset());
            assert!((ax - bx).abs() <= 1 && (ay - by).abs() <= 1);
        }
        assert_eq!(Compass::ALL[0], Compass::N);
        assert_eq!(Compass::ALL.iter().filter(|c| c.is_cardinal()).count(), 4);
        for direction in Direction::ALL {
            assert_eq!(Compass::from(direction).as_direction(), Some(direction));
        }
        assert_eq!(Compass::NW.as_direction(), None);
    }

    #[test]
    fn test_direction_set() {
        let bend = Directions::from(Direction::South) | Directions::from(Direction::East);
        assert_eq!(bend, Directions::SOUTH_EAST);
        assert_eq!(bend.len(), 2);
        assert!(bend.contains(Direction::East));
        assert!(!bend.contains(Direction::North));
        assert_eq!(bend.without(Direction::East), Directions::SOUTH);
        assert_eq!(
            bend.iter().collect::<Vec<_>>(),
            vec![Direction::East, Direction::South]
        );
        let collected: Directions = [Direction::North, Direction::South].into_iter().collect();
        assert_eq!(collected, Directions::VERTICAL);
        assert!(Directions::EMPTY.is_empty());
        assert_eq!(Directions::EMPTY.first(), None);
    }
}
