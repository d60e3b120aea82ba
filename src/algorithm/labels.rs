use crate::graph::Weight;

/// Distance reported for nodes the source cannot reach
pub const UNREACHED_DISTANCE: i64 = -1;

/// Predecessor reported for nodes the source cannot reach.
/// Node IDs start at 1, so 0 never names a real node.
pub const NO_PREDECESSOR: usize = 0;

/// Distance and predecessor labels of every node for one source
///
/// Created by a strategy at the start of a run, mutated only by relaxation
/// and handed back read-only once the run finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStore<W>
where
    W: Weight,
{
    /// Source node ID
    source: usize,

    /// Best known distance, slot `i` holds node `i + 1`
    distances: Vec<Option<W>>,

    /// Predecessor in the shortest path tree, slot `i` holds node `i + 1`
    predecessors: Vec<Option<usize>>,
}

/// One line of a result report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRow<W> {
    pub node: usize,
    /// [`NO_PREDECESSOR`] when unreached
    pub predecessor: usize,
    /// `None` when unreached
    pub distance: Option<W>,
}

impl<W> LabelStore<W>
where
    W: Weight,
{
    /// Labels for `node_count` nodes with only `source` reached.
    /// `source` must be in `1..=node_count`.
    pub(crate) fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![None; node_count];
        let mut predecessors = vec![None; node_count];
        distances[source - 1] = Some(W::zero());
        predecessors[source - 1] = Some(source);
        LabelStore {
            source,
            distances,
            predecessors,
        }
    }

    /// Lowers the label of `to` to `candidate` through `from` if it improves
    /// on the current one. Returns whether the label changed.
    pub(crate) fn relax(&mut self, from: usize, to: usize, candidate: W) -> bool {
        let slot = to - 1;
        let improves = match self.distances[slot] {
            None => true,
            Some(current) => candidate < current,
        };
        if improves {
            self.distances[slot] = Some(candidate);
            self.predecessors[slot] = Some(from);
        }
        improves
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance to `node`, `None` if unreached or not a node
    pub fn distance(&self, node: usize) -> Option<W> {
        node.checked_sub(1)
            .and_then(|slot| self.distances.get(slot))
            .copied()
            .flatten()
    }

    /// Predecessor of `node` on its shortest path. The source is its own
    /// predecessor; unreached nodes have none.
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        node.checked_sub(1)
            .and_then(|slot| self.predecessors.get(slot))
            .copied()
            .flatten()
    }

    pub fn is_reached(&self, node: usize) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes with a finite distance, source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Report rows in ascending node order with unreached sentinels applied
    pub fn rows(&self) -> impl Iterator<Item = LabelRow<W>> + '_ {
        self.distances
            .iter()
            .zip(&self.predecessors)
            .enumerate()
            .map(|(slot, (&distance, &predecessor))| LabelRow {
                node: slot + 1,
                predecessor: match distance {
                    Some(_) => predecessor.unwrap_or(NO_PREDECESSOR),
                    None => NO_PREDECESSOR,
                },
                distance,
            })
    }

    /// Node sequence from the source to `target`, `None` when unreached
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            // A predecessor chain longer than the node count means the
            // labels are corrupt
            if path.len() > self.node_count() {
                log::warn!("predecessor cycle reconstructing path to {}", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_reaches_only_source() {
        let labels: LabelStore<u64> = LabelStore::new(3, 2);
        assert_eq!(labels.distance(2), Some(0));
        assert_eq!(labels.predecessor(2), Some(2));
        assert_eq!(labels.distance(1), None);
        assert_eq!(labels.distance(0), None);
        assert_eq!(labels.distance(4), None);
        assert_eq!(labels.reached_count(), 1);
    }

    #[test]
    fn relax_only_accepts_strict_improvements() {
        let mut labels: LabelStore<u64> = LabelStore::new(3, 1);
        assert!(labels.relax(1, 3, 5));
        assert!(!labels.relax(2, 3, 5));
        assert_eq!(labels.predecessor(3), Some(1));
        assert!(labels.relax(2, 3, 4));
        assert_eq!(labels.predecessor(3), Some(2));
    }

    #[test]
    fn rows_apply_sentinels() {
        let mut labels: LabelStore<u64> = LabelStore::new(3, 1);
        labels.relax(1, 2, 6);
        let rows: Vec<_> = labels.rows().collect();
        assert_eq!(
            rows,
            vec![
                LabelRow { node: 1, predecessor: 1, distance: Some(0) },
                LabelRow { node: 2, predecessor: 1, distance: Some(6) },
                LabelRow { node: 3, predecessor: NO_PREDECESSOR, distance: None },
            ]
        );
    }

    #[test]
    fn path_follows_predecessors() {
        let mut labels: LabelStore<u64> = LabelStore::new(4, 1);
        labels.relax(1, 3, 1);
        labels.relax(3, 2, 2);
        assert_eq!(labels.path_to(2), Some(vec![1, 3, 2]));
        assert_eq!(labels.path_to(1), Some(vec![1]));
        assert_eq!(labels.path_to(4), None);
    }
}
