use std::time::{Duration, Instant};

use crate::algorithm::LabelStore;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Trait for single-source shortest path strategies
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all other nodes
    ///
    /// Fails with [`Error::InvalidSource`] when `source` is not in
    /// `1..=graph.node_count()` and with [`Error::EdgeNotFound`] when an
    /// adjacency entry has no weight. No labels are returned on failure.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<LabelStore<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Same as [`compute_shortest_paths`](Self::compute_shortest_paths), also
    /// returning the wall time of the run
    fn compute_timed(&self, graph: &G, source: usize) -> Result<(LabelStore<W>, Duration)> {
        let start = Instant::now();
        let labels = self.compute_shortest_paths(graph, source)?;
        let elapsed = start.elapsed();
        log::trace!("{} from {} took {:?}", self.name(), source, elapsed);
        Ok((labels, elapsed))
    }

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &LabelStore<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}

/// Rejects sources outside `1..=N`
pub(crate) fn check_source<W, G>(graph: &G, source: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    if graph.has_node(source) {
        Ok(())
    } else {
        Err(Error::InvalidSource {
            node: source,
            node_count: graph.node_count(),
        })
    }
}

/// `distance + weight`, failing instead of wrapping
pub(crate) fn extend<W: Weight>(distance: W, weight: W, from: usize, to: usize) -> Result<W> {
    distance
        .checked_add(&weight)
        .ok_or(Error::DistanceOverflow { from, to })
}
