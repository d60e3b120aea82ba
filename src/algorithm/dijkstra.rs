use crate::algorithm::traits::{check_source, extend};
use crate::algorithm::{LabelStore, ShortestPathAlgorithm};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<LabelStore<W>> {
        check_source(graph, source)?;

        let mut labels = LabelStore::new(graph.node_count(), source);

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // A shorter path to u was found after this entry was pushed
            if labels.distance(u) != Some(dist_u) {
                continue;
            }

            for edge in graph.outgoing_edges(u) {
                let (v, weight) = edge?;
                let candidate = extend(dist_u, weight, u, v)?;

                if labels.relax(u, v, candidate) {
                    queue.push(v, candidate);
                }
            }
        }

        Ok(labels)
    }
}
