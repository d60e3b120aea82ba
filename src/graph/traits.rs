use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Edge weight accepted by the shortest path strategies.
///
/// Weights are non-negative integers; bucket indexing in Dial's algorithm
/// relies on exact modular arithmetic, so floating point is not supported.
pub trait Weight: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

/// Trait representing a read-only weighted directed graph over nodes `1..=N`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the adjacency structure
    fn edge_count(&self) -> usize;

    /// Returns the adjacency list of a node, in insertion order.
    /// Nodes outside `1..=N` have no neighbours.
    fn neighbors(&self, node: usize) -> &[usize];

    /// Gets the weight of an edge listed in the adjacency structure
    ///
    /// Fails with [`crate::Error::EdgeNotFound`] when the pair has no
    /// recorded weight.
    fn weight(&self, from: usize, to: usize) -> Result<W>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node >= 1 && node <= self.node_count()
    }

    /// Returns an iterator over the outgoing edges of a node with their weights
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Result<(usize, W)>> + '_> {
        Box::new(
            self.neighbors(node)
                .iter()
                .map(move |&to| self.weight(node, to).map(|w| (to, w))),
        )
    }

    /// Largest weight over all edges, `None` when the graph has no edges
    fn max_edge_weight(&self) -> Result<Option<W>> {
        let mut max: Option<W> = None;
        for node in 1..=self.node_count() {
            for edge in self.outgoing_edges(node) {
                let (_, weight) = edge?;
                max = Some(max.map_or(weight, |m| m.max(weight)));
            }
        }
        Ok(max)
    }
}
