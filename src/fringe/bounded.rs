//! Sorted fringe with an optional size cap.

use super::Fringe;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// A priority fringe kept sorted by ascending key.
///
/// The key of each item is computed once, on insertion, by the key
/// function given at construction. Items with equal keys keep their
/// insertion order. When a limit is set, every insertion that grows the
/// queue past it drops the worst-keyed items, so the queue always holds
/// the `limit` best items among those inserted and not yet popped or
/// evicted.
///
/// Keys are compared with [`f64::total_cmp`].
///
/// # Examples
///
/// ```
/// use u_search::fringe::{BoundedPriorityQueue, Fringe};
///
/// let mut queue = BoundedPriorityQueue::bounded(3, |x: &i32| f64::from(*x));
/// queue.extend([10, 1, 7, 3, 9, 2]);
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(queue.pop(), Some(1));
/// ```
pub struct BoundedPriorityQueue<T, K> {
    entries: VecDeque<(f64, T)>,
    limit: Option<usize>,
    key: K,
}

impl<T, K> BoundedPriorityQueue<T, K>
where
    K: Fn(&T) -> f64,
{
    /// Creates a queue. A limit of `None` or `Some(0)` means unbounded.
    pub fn new(limit: Option<usize>, key: K) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.filter(|&l| l > 0),
            key,
        }
    }

    /// Creates a queue with no size cap.
    pub fn unbounded(key: K) -> Self {
        Self::new(None, key)
    }

    /// Creates a queue retaining at most `limit` items (0 = unbounded).
    pub fn bounded(limit: usize, key: K) -> Self {
        Self::new(Some(limit), key)
    }

    /// The size cap, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The `index`-th best item.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|(_, item)| item)
    }

    /// Key of the best item.
    pub fn peek_key(&self) -> Option<f64> {
        self.entries.front().map(|&(k, _)| k)
    }

    /// Items in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(_, item)| item)
    }

    /// Consumes the queue, returning its items best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.entries.into_iter().map(|(_, item)| item).collect()
    }
}

impl<T, K> Fringe<T> for BoundedPriorityQueue<T, K>
where
    K: Fn(&T) -> f64,
{
    fn push(&mut self, item: T) {
        let key = (self.key)(&item);
        // After every equal key, so ties stay in insertion order.
        let pos = self
            .entries
            .partition_point(|(k, _)| k.total_cmp(&key) != Ordering::Greater);
        if let Some(limit) = self.limit {
            if pos >= limit {
                return;
            }
        }
        self.entries.insert(pos, (key, item));
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
    }

    fn pop(&mut self) -> Option<T> {
        self.entries.pop_front().map(|(_, item)| item)
    }

    fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: std::fmt::Debug, K> std::fmt::Debug for BoundedPriorityQueue<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedPriorityQueue")
            .field("limit", &self.limit)
            .field("entries", &self.entries)
            .finish()
    }
}
