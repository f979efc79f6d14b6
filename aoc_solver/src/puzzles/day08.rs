// desert network: follow left/right instructions through a directed graph

use super::{Answer, PuzzleError, PuzzleResult};
use crate::configuration::PuzzleSettings;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl TryFrom<char> for Side {
    type Error = PuzzleError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Side::Left),
            'R' => Ok(Side::Right),
            _ => Err(PuzzleError::MalformedInput(format!(
                "unknown instruction '{}'",
                value
            ))),
        }
    }
}

struct Network {
    instructions: Vec<Side>,
    graph: DiGraph<String, Side>,
    nodes: HashMap<String, NodeIndex>,
}

impl Network {
    fn parse(input: &str) -> PuzzleResult<Self> {
        let node_regex = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$")?;
        let mut lines = input.lines();
        let instructions = lines
            .next()
            .ok_or_else(|| PuzzleError::MalformedInput("missing instructions".into()))?
            .trim()
            .chars()
            .map(Side::try_from)
            .collect::<PuzzleResult<Vec<Side>>>()?;
        if instructions.is_empty() {
            return Err(PuzzleError::MalformedInput("empty instructions".into()));
        }
        let mut network = Self {
            instructions,
            graph: DiGraph::new(),
            nodes: HashMap::new(),
        };
        for (index, line) in lines.enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let captures = node_regex
                .captures(line.trim())
                .ok_or_else(|| PuzzleError::malformed_line(index + 1, line))?;
            let node = network.node(&captures[1]);
            let left = network.node(&captures[2]);
            let right = network.node(&captures[3]);
            network.graph.add_edge(node, left, Side::Left);
            network.graph.add_edge(node, right, Side::Right);
        }
        Ok(network)
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(index) = self.nodes.get(name) {
            return *index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), index);
        index
    }

    fn follow(&self, node: NodeIndex, side: Side) -> PuzzleResult<NodeIndex> {
        self.graph
            .edges(node)
            .find(|edge| *edge.weight() == side)
            .map(|edge| edge.target())
            .ok_or_else(|| {
                PuzzleError::MalformedInput(format!("node '{}' has no exits", self.graph[node]))
            })
    }

    // number of steps from start to first node accepted by is_target
    fn count_steps<F>(&self, start: NodeIndex, is_target: F) -> PuzzleResult<i64>
    where
        F: Fn(&str) -> bool,
    {
        // (node, instruction) states repeat after this many steps
        let max_steps = self.instructions.len() * self.graph.node_count();
        let mut node = start;
        for (step, side) in self.instructions.iter().cycle().take(max_steps).enumerate() {
            node = self.follow(node, *side)?;
            if is_target(&self.graph[node]) {
                return Ok(step as i64 + 1);
            }
        }
        Err(PuzzleError::MalformedInput(format!(
            "no target reachable from '{}'",
            self.graph[start]
        )))
    }
}

pub fn solve(input: &str, _settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let network = Network::parse(input)?;
    let part1 = match network.nodes.get("AAA") {
        Some(start) => Some(network.count_steps(*start, |name| name == "ZZZ")?),
        None => None,
    };
    // all ghosts arrive at the same time at the least common multiple of their cycles
    let mut part2 = None;
    for start in network
        .graph
        .node_indices()
        .filter(|n| network.graph[*n].ends_with('A'))
    {
        let steps = network.count_steps(start, |name| name.ends_with('Z'))?;
        part2 = Some(part2.map_or(steps, |lcm| num::integer::lcm(lcm, steps)));
    }
    Ok(Answer { part1, part2 })
}
