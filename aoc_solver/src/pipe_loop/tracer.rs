// walking the loop of a pipe map

use super::{connector_symbol, PipeLoopError, PipeLoopResult, PipeMap};
use crate::add_context;

use anyhow::anyhow;
use fixedbitset::FixedBitSet;
use grid_map::Coordinate;

/// Cells of a traced loop. Membership only, the walking order is not kept.
#[derive(Debug, Clone)]
pub struct PipeLoop {
    start: Coordinate,
    steps: usize,
    members: FixedBitSet,
    row_count: usize,
    col_count: usize,
}

impl PipeLoop {
    pub fn start(&self) -> Coordinate {
        self.start
    }
    pub fn steps(&self) -> usize {
        self.steps
    }
    /// Along a simple cycle the farthest cell is exactly halfway around.
    pub fn furthest_distance(&self) -> usize {
        self.steps / 2
    }
    pub fn len(&self) -> usize {
        self.members.count_ones(..)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn contains(&self, position: Coordinate) -> bool {
        position.x() >= 0
            && position.y() >= 0
            && (position.x() as usize) < self.col_count
            && (position.y() as usize) < self.row_count
            && self
                .members
                .contains(position.y() as usize * self.col_count + position.x() as usize)
    }
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.members.ones().map(|index| {
            Coordinate::new(
                (index % self.col_count) as i64,
                (index / self.col_count) as i64,
            )
        })
    }
}

impl PipeMap {
    /// Walk the loop from start cell until returning to start cell.
    pub fn trace(&self) -> PipeLoopResult<PipeLoop> {
        let grid = self.grid();
        let mut members = FixedBitSet::with_capacity(grid.len());
        let mut position = self.start();
        // any of both start directions will do
        let mut heading = self.start_shape().first().ok_or_else(|| {
            anyhow!(
                "{}",
                add_context!("Expected start cell with inferred connector shape.")
            )
        })?;
        let mut steps = 0;
        loop {
            position = position.step(heading);
            steps += 1;
            let index = grid
                .index(position)
                .ok_or(PipeLoopError::LeftGrid(position))?;
            members.insert(index);
            if position == self.start() {
                break;
            }
            let arrival = heading.opposite();
            let connector = self.connector_at(position);
            if connector.len() != 2 || !connector.contains(arrival) {
                return Err(PipeLoopError::InvalidConnector {
                    position,
                    symbol: connector_symbol(connector),
                });
            }
            heading = connector
                .without(arrival)
                .first()
                .ok_or(PipeLoopError::InvalidConnector {
                    position,
                    symbol: connector_symbol(connector),
                })?;
        }
        Ok(PipeLoop {
            start: self.start(),
            steps,
            members,
            row_count: grid.row_count(),
            col_count: grid.col_count(),
        })
    }
}
