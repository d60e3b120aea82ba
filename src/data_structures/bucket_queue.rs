use std::collections::TryReserveError;
use std::mem;

/// Circular array of buckets used by Dial's algorithm
///
/// Bucket `i` holds the nodes whose tentative distance is congruent to `i`
/// modulo the bucket count. A node may sit in several buckets at once; the
/// queue never deduplicates, the caller re-checks labels when it drains.
#[derive(Debug, Clone)]
pub struct BucketQueue {
    buckets: Vec<Vec<usize>>,

    /// Scan position, always `< buckets.len()`
    cursor: usize,

    /// Entries across all buckets
    pending: usize,
}

impl BucketQueue {
    /// Creates a queue with `bucket_count` buckets (at least one)
    ///
    /// Fails instead of aborting when the bucket array cannot be allocated.
    pub fn try_new(bucket_count: usize) -> Result<Self, TryReserveError> {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, Vec::new);
        Ok(BucketQueue {
            buckets,
            cursor: 0,
            pending: 0,
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.pending == 0
    }

    /// Number of entries, stale memberships included
    pub fn len(&self) -> usize {
        self.pending
    }

    /// Files `node` under the bucket for `distance`
    pub fn insert(&mut self, node: usize, distance: usize) {
        let slot = distance % self.buckets.len();
        self.buckets[slot].push(node);
        self.pending += 1;
    }

    /// Takes the whole content of the next non-empty bucket at or after the
    /// cursor, leaving that bucket empty.
    ///
    /// The cursor stays on the drained bucket, so entries inserted there while
    /// the batch is processed are picked up by the next call before the scan
    /// moves on. Returns `None` once every bucket is empty.
    pub fn next_batch(&mut self) -> Option<Vec<usize>> {
        if self.pending == 0 {
            return None;
        }
        while self.buckets[self.cursor].is_empty() {
            self.cursor = (self.cursor + 1) % self.buckets.len();
        }
        let batch = mem::take(&mut self.buckets[self.cursor]);
        self.pending -= batch.len();
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_buckets_in_circular_order() {
        let mut queue = BucketQueue::try_new(3).unwrap();
        queue.insert(7, 4); // bucket 1
        queue.insert(8, 2); // bucket 2
        queue.insert(9, 1); // bucket 1

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.next_batch(), Some(vec![7, 9]));
        assert_eq!(queue.cursor(), 1);

        // Wraps around behind the cursor
        queue.insert(5, 3);
        assert_eq!(queue.next_batch(), Some(vec![8]));
        assert_eq!(queue.next_batch(), Some(vec![5]));
        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.next_batch(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn revisits_current_bucket_before_advancing() {
        let mut queue = BucketQueue::try_new(4).unwrap();
        queue.insert(1, 0);
        assert_eq!(queue.next_batch(), Some(vec![1]));

        // Zero-weight relaxation lands in the bucket just drained
        queue.insert(2, 0);
        queue.insert(3, 1);
        assert_eq!(queue.next_batch(), Some(vec![2]));
        assert_eq!(queue.next_batch(), Some(vec![3]));
    }

    #[test]
    fn single_bucket_keeps_draining_itself() {
        let mut queue = BucketQueue::try_new(0).unwrap();
        assert_eq!(queue.bucket_count(), 1);
        queue.insert(4, 10);
        assert_eq!(queue.next_batch(), Some(vec![4]));
        queue.insert(5, 11);
        assert_eq!(queue.next_batch(), Some(vec![5]));
        assert_eq!(queue.next_batch(), None);
    }

    #[test]
    fn oversized_bucket_array_is_an_error() {
        assert!(BucketQueue::try_new(usize::MAX).is_err());
    }
}
