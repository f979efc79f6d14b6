// engine schematic: part numbers and gear ratios

use super::{Answer, PuzzleResult};
use crate::configuration::PuzzleSettings;
use grid_map::{Addressing, Coordinate, Grid};
use std::collections::{BTreeSet, HashMap};

const EMPTY: char = '.';
const GEAR: char = '*';

fn is_symbol(ch: char) -> bool {
    ch != EMPTY && !ch.is_ascii_digit()
}

/// Side table of numbers: every digit cell maps to the id of its number.
struct NumberGroups {
    group_of: HashMap<Coordinate, usize>,
    values: Vec<i64>,
}

impl NumberGroups {
    fn new(grid: &Grid<char>) -> Self {
        let mut group_of = HashMap::new();
        let mut values: Vec<i64> = Vec::new();
        let mut in_number = false;
        for (position, ch) in grid.iter() {
            // numbers never continue into next row
            if position.x() == 0 {
                in_number = false;
            }
            match ch.to_digit(10) {
                Some(digit) => {
                    if !in_number {
                        values.push(0);
                        in_number = true;
                    }
                    let id = values.len() - 1;
                    values[id] = values[id] * 10 + digit as i64;
                    group_of.insert(position, id);
                }
                None => in_number = false,
            }
        }
        Self { group_of, values }
    }

    fn adjacent_groups(&self, grid: &Grid<char>, position: Coordinate) -> BTreeSet<usize> {
        grid.neighbors(position, true)
            .into_iter()
            .filter_map(|n| self.group_of.get(&n.position).copied())
            .collect()
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let grid = Grid::from_lines(input, Addressing::Bounded, EMPTY)?;
    let groups = NumberGroups::new(&grid);

    let part_numbers: BTreeSet<usize> = groups
        .group_of
        .iter()
        .filter(|(position, _)| {
            grid.neighbor_contents(**position, true)
                .into_iter()
                .any(is_symbol)
        })
        .map(|(_, id)| *id)
        .collect();
    let part_number_sum = part_numbers.iter().map(|id| groups.values[*id]).sum();

    let gear_ratio_sum = grid
        .iter()
        .filter(|(_, ch)| **ch == GEAR)
        .map(|(position, _)| groups.adjacent_groups(&grid, position))
        .filter(|adjacent| adjacent.len() == 2)
        .map(|adjacent| adjacent.iter().map(|id| groups.values[*id]).product::<i64>())
        .sum();

    Ok(Answer::new(part_number_sum, gear_ratio_sum))
}
