use std::collections::BTreeMap;

use crate::algorithm::traits::{check_source, extend};
use crate::algorithm::{LabelStore, ShortestPathAlgorithm};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Dijkstra with linear-scan minimum extraction, O(V²)
///
/// Baseline for the heap and bucket strategies. Ties between equal
/// tentative distances go to the lowest node ID.
#[derive(Debug, Default)]
pub struct ArrayScan;

impl ArrayScan {
    /// Creates a new array-scan algorithm instance
    pub fn new() -> Self {
        ArrayScan
    }
}

/// Unsettled node with the smallest finite tentative distance
fn closest_unsettled<W: Weight>(unsettled: &BTreeMap<usize, Option<W>>) -> Option<(usize, W)> {
    let mut best: Option<(usize, W)> = None;
    for (&node, &tentative) in unsettled {
        if let Some(distance) = tentative {
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((node, distance));
            }
        }
    }
    best
}

impl<W, G> ShortestPathAlgorithm<W, G> for ArrayScan
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "ArrayScan"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<LabelStore<W>> {
        check_source(graph, source)?;

        let mut labels = LabelStore::new(graph.node_count(), source);
        let mut unsettled: BTreeMap<usize, Option<W>> = (1..=graph.node_count())
            .map(|node| (node, labels.distance(node)))
            .collect();

        while let Some((u, dist_u)) = closest_unsettled(&unsettled) {
            unsettled.remove(&u);

            for edge in graph.outgoing_edges(u) {
                let (v, weight) = edge?;
                let candidate = extend(dist_u, weight, u, v)?;

                if labels.relax(u, v, candidate) {
                    if let Some(tentative) = unsettled.get_mut(&v) {
                        *tentative = Some(candidate);
                    }
                }
            }
        }

        // Whatever is left has no finite distance and settles as unreached
        log::trace!("{} nodes settled as unreached", unsettled.len());

        Ok(labels)
    }
}
