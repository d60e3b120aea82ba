use crate::algorithm::traits::{check_source, extend};
use crate::algorithm::{LabelStore, ShortestPathAlgorithm};
use crate::data_structures::BucketQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dial's algorithm: label-correcting search over `max_edge_weight + 1`
/// circular buckets
///
/// Each non-empty bucket is drained as a whole batch. Nodes can be relaxed
/// more than once and may sit in several buckets at a time; a stale
/// membership only re-relaxes a node with its current label.
#[derive(Debug, Default)]
pub struct Dial;

impl Dial {
    /// Creates a new Dial algorithm instance
    pub fn new() -> Self {
        Dial
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dial
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dial"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<LabelStore<W>> {
        check_source(graph, source)?;

        let mut labels = LabelStore::new(graph.node_count(), source);

        let Some(max_weight) = graph.max_edge_weight()? else {
            log::debug!("no edges, only source {} is reachable", source);
            return Ok(labels);
        };
        let allocation_error = || Error::BucketAllocation {
            max_weight: max_weight.to_string(),
        };
        let bucket_count = max_weight
            .to_usize()
            .and_then(|max| max.checked_add(1))
            .ok_or_else(allocation_error)?;
        // None when max_weight + 1 overflows W, then every distance is
        // already below the bucket count
        let modulus = max_weight.checked_add(&W::one());
        log::debug!(
            "{} nodes, {} edges, {} buckets",
            graph.node_count(),
            graph.edge_count(),
            bucket_count
        );

        let mut buckets = BucketQueue::try_new(bucket_count).map_err(|err| {
            log::debug!("bucket allocation failed: {}", err);
            allocation_error()
        })?;
        buckets.insert(source, 0);

        while let Some(batch) = buckets.next_batch() {
            for node in batch {
                // Every queued node has been labelled
                let Some(node_distance) = labels.distance(node) else {
                    continue;
                };

                for edge in graph.outgoing_edges(node) {
                    let (neighbor, weight) = edge?;
                    let candidate = extend(node_distance, weight, node, neighbor)?;

                    if labels.relax(node, neighbor, candidate) {
                        let remainder = modulus.map_or(candidate, |m| candidate % m);
                        let slot = remainder.to_usize().ok_or(Error::DistanceOverflow {
                            from: node,
                            to: neighbor,
                        })?;
                        buckets.insert(neighbor, slot);
                    }
                }
            }
        }

        Ok(labels)
    }
}
