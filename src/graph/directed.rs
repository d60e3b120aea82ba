use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph using adjacency lists plus an edge-weight lookup
///
/// Nodes are `1..=N`. Parallel edges stay in the adjacency list as listed,
/// while the weight lookup keeps the last weight added for each ordered pair.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing neighbours, slot `i` holds node `i + 1`
    adjacency: Vec<Vec<usize>>,

    /// Edge weights keyed by (from, to)
    weights: HashMap<(usize, usize), W>,

    /// Number of adjacency entries
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        Self::with_nodes(0)
    }

    /// Creates a graph with nodes `1..=nodes` and no edges
    pub fn with_nodes(nodes: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); nodes],
            weights: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from a prepared adjacency structure and weight lookup
    ///
    /// Only node ranges are checked. A listed edge without a weight is kept
    /// as is and surfaces as [`Error::EdgeNotFound`] when a strategy reaches
    /// it.
    pub fn from_parts(
        adjacency: Vec<Vec<usize>>,
        weights: HashMap<(usize, usize), W>,
    ) -> Result<Self> {
        let nodes = adjacency.len();
        let in_range = |node: usize| node >= 1 && node <= nodes;

        for (from, targets) in adjacency.iter().enumerate() {
            if let Some(&to) = targets.iter().find(|&&to| !in_range(to)) {
                log::debug!("adjacency of node {} references {}", from + 1, to);
                return Err(Error::InvalidVertex(to));
            }
        }
        if let Some(&(from, to)) = weights.keys().find(|(f, t)| !in_range(*f) || !in_range(*t)) {
            return Err(Error::InvalidVertex(if in_range(from) { to } else { from }));
        }

        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(DirectedGraph {
            adjacency,
            weights,
            edge_count,
        })
    }

    /// Adds a directed edge, overwriting the recorded weight of an existing pair
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_node(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_node(to) {
            return Err(Error::InvalidVertex(to));
        }

        self.adjacency[from - 1].push(to);
        self.weights.insert((from, to), weight);
        self.edge_count += 1;
        Ok(())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        if self.has_node(node) {
            &self.adjacency[node - 1]
        } else {
            &[]
        }
    }

    fn weight(&self, from: usize, to: usize) -> Result<W> {
        self.weights
            .get(&(from, to))
            .copied()
            .ok_or(Error::EdgeNotFound { from, to })
    }
}
