// generic two dimensional grid with bounded or wrapping addressing

pub mod compass;
pub mod coordinate;
mod error;

pub use compass::{Compass, Direction, Directions};
pub use coordinate::Coordinate;
pub use error::{GridError, GridResult};

use std::fmt::{self, Display};

/// How coordinates outside of `[0, cols) x [0, rows)` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Addressing {
    /// The grid is padded in all directions by infinitely many default cells.
    Bounded,
    /// Leaving the grid on one side re-enters it on the opposite side (torus).
    Wrapping,
}

/// A neighbor of a cell. `position` is the wrapped coordinate for wrapping
/// grids and the raw offset coordinate otherwise; `cell` is `None` outside
/// of a bounded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<'a, V> {
    pub orientation: Compass,
    pub position: Coordinate,
    pub cell: Option<&'a V>,
}

// Cells are stored row-major in one vector. Positions of cells are always derived
// from their storage index, therefore every structural change (insert_row,
// insert_col, rotate_clockwise) rebooks all positions at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<V> {
    items: Vec<V>,
    row_count: usize,
    col_count: usize,
    addressing: Addressing,
    default_value: V,
}

impl<V> Grid<V> {
    /// Build grid from rows. Every row must have the length of the first row.
    pub fn from_rows(rows: Vec<Vec<V>>, addressing: Addressing, default_value: V) -> GridResult<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(|r| r.len()).unwrap_or_default();
        let mut items = Vec::with_capacity(row_count * col_count);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: col_count,
                    found: row.len(),
                });
            }
            items.extend(row);
        }
        Ok(Self {
            items,
            row_count,
            col_count,
            addressing,
            default_value,
        })
    }

    /// Parse text with one row per line and one character per cell.
    pub fn parse<F>(
        text: &str,
        addressing: Addressing,
        default_value: V,
        mut cell_fn: F,
    ) -> GridResult<Self>
    where
        F: FnMut(Coordinate, char) -> GridResult<V>,
    {
        let rows = text
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| cell_fn(Coordinate::new(x as i64, y as i64), ch))
                    .collect::<GridResult<Vec<V>>>()
            })
            .collect::<GridResult<Vec<Vec<V>>>>()?;
        Self::from_rows(rows, addressing, default_value)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
    pub fn col_count(&self) -> usize {
        self.col_count
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn addressing(&self) -> Addressing {
        self.addressing
    }
    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    /// Resolve coordinate to a coordinate inside of grid, if possible.
    ///
    /// Wrapping grids normalize with a true modulo, so offsets of any
    /// magnitude resolve in one step.
    pub fn resolve(&self, position: Coordinate) -> Option<Coordinate> {
        if self.is_empty() {
            return None;
        }
        if self.is_inside(position) {
            return Some(position);
        }
        match self.addressing {
            Addressing::Bounded => None,
            Addressing::Wrapping => Some(Coordinate::new(
                wrap_coordinate(position.x(), self.col_count),
                wrap_coordinate(position.y(), self.row_count),
            )),
        }
    }
    pub fn is_inside(&self, position: Coordinate) -> bool {
        position.x() >= 0
            && position.y() >= 0
            && (position.x() as usize) < self.col_count
            && (position.y() as usize) < self.row_count
    }

    /// Storage index of a (resolved) coordinate.
    pub fn index(&self, position: Coordinate) -> Option<usize> {
        self.resolve(position)
            .map(|p| p.y() as usize * self.col_count + p.x() as usize)
    }
    pub fn coordinate(&self, index: usize) -> Coordinate {
        Coordinate::new(
            (index % self.col_count.max(1)) as i64,
            (index / self.col_count.max(1)) as i64,
        )
    }

    pub fn cell_at(&self, position: Coordinate) -> Option<&V> {
        self.index(position).map(|i| &self.items[i])
    }
    pub fn cell_at_mut(&mut self, position: Coordinate) -> Option<&mut V> {
        self.index(position).map(|i| &mut self.items[i])
    }
    pub fn set(&mut self, position: Coordinate, value: V) -> GridResult<()> {
        let cell = self
            .cell_at_mut(position)
            .ok_or(GridError::OutOfRange(position))?;
        *cell = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &V)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, v)| (self.coordinate(i), v))
    }
    pub fn rows(&self) -> impl Iterator<Item = &[V]> {
        self.items.chunks(self.col_count.max(1))
    }
    /// Enumerate all 8 (or the 4 orthogonal) neighbors clockwise, starting at north.
    pub fn neighbors(&self, position: Coordinate, include_diagonals: bool) -> Vec<Neighbor<'_, V>> {
        let neighbors: Vec<Neighbor<'_, V>> = Compass::ALL
            .into_iter()
            .filter(|o| include_diagonals || o.is_cardinal())
            .map(|orientation| {
                let raw = position.neighbor(orientation);
                Neighbor {
                    orientation,
                    position: self.resolve(raw).unwrap_or(raw),
                    cell: self.cell_at(raw),
                }
            })
            .collect();
        debug_assert_eq!(neighbors.len(), if include_diagonals { 8 } else { 4 });
        neighbors
    }

    pub fn insert_row(&mut self, before_row: usize, values: Vec<V>) -> GridResult<()> {
        if before_row > self.row_count {
            return Err(GridError::InsertIndexOutOfRange {
                index: before_row,
                max: self.row_count,
            });
        }
        if values.len() != self.col_count {
            return Err(GridError::InsertLengthMismatch {
                expected: self.col_count,
                found: values.len(),
            });
        }
        let at = before_row * self.col_count;
        self.items.splice(at..at, values);
        self.row_count += 1;
        Ok(())
    }

    pub fn insert_col(&mut self, before_col: usize, values: Vec<V>) -> GridResult<()> {
        if before_col > self.col_count {
            return Err(GridError::InsertIndexOutOfRange {
                index: before_col,
                max: self.col_count,
            });
        }
        if values.len() != self.row_count {
            return Err(GridError::InsertLengthMismatch {
                expected: self.row_count,
                found: values.len(),
            });
        }
        let old_col_count = self.col_count;
        let mut old_items = std::mem::take(&mut self.items).into_iter();
        let mut items = Vec::with_capacity(self.row_count * (old_col_count + 1));
        for value in values {
            items.extend(old_items.by_ref().take(before_col));
            items.push(value);
            items.extend(old_items.by_ref().take(old_col_count - before_col));
        }
        self.items = items;
        self.col_count += 1;
        Ok(())
    }

    /// Turn grid a quarter turn clockwise: the west column becomes the north row.
    pub fn rotate_clockwise(&mut self) {
        let (row_count, col_count) = (self.row_count, self.col_count);
        let mut old_items: Vec<Option<V>> = std::mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect();
        let mut items = Vec::with_capacity(old_items.len());
        for x in 0..col_count {
            for y in (0..row_count).rev() {
                // every old cell is moved exactly once
                if let Some(value) = old_items[y * col_count + x].take() {
                    items.push(value);
                }
            }
        }
        self.items = items;
        self.row_count = col_count;
        self.col_count = row_count;
    }
}

impl<V: Clone> Grid<V> {
    /// Cell value or default value of grid, if position is outside of bounded grid.
    pub fn contents_at(&self, position: Coordinate) -> V {
        self.cell_at(position)
            .unwrap_or(&self.default_value)
            .clone()
    }

    /// Values of row `y`. Rows outside of a bounded grid consist of default values.
    pub fn row(&self, y: i64) -> Vec<V> {
        match self.resolve(Coordinate::new(0, y)) {
            Some(p) => {
                let start = p.y() as usize * self.col_count;
                self.items[start..start + self.col_count].to_vec()
            }
            None => vec![self.default_value.clone(); self.col_count],
        }
    }

    /// Values of column `x`. Columns outside of a bounded grid consist of default values.
    pub fn col(&self, x: i64) -> Vec<V> {
        match self.resolve(Coordinate::new(x, 0)) {
            Some(p) => self
                .items
                .iter()
                .skip(p.x() as usize)
                .step_by(self.col_count)
                .cloned()
                .collect(),
            None => vec![self.default_value.clone(); self.row_count],
        }
    }

    pub fn cols(&self) -> Vec<Vec<V>> {
        (0..self.col_count as i64).map(|x| self.col(x)).collect()
    }

    pub fn neighbor_contents(&self, position: Coordinate, include_diagonals: bool) -> Vec<V> {
        self.neighbors(position, include_diagonals)
            .into_iter()
            .map(|n| n.cell.unwrap_or(&self.default_value).clone())
            .collect()
    }
}

impl Grid<char> {
    pub fn from_lines(text: &str, addressing: Addressing, default_value: char) -> GridResult<Self> {
        Self::parse(text, addressing, default_value, |_, ch| Ok(ch))
    }
}

impl<V: Display> Display for Grid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Normalize coordinate into `0..max`.
pub fn wrap_coordinate(c: i64, max: usize) -> i64 {
    c.rem_euclid(max as i64)
}
