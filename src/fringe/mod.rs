//! Fringe (frontier) containers.
//!
//! Every strategy that keeps a frontier drives it through the [`Fringe`]
//! trait. The container chosen at construction fixes the exploration
//! order:
//!
//! - [`FifoFringe`]: first in, first out (breadth-first)
//! - [`LifoFringe`]: last in, first out (depth-first)
//! - [`BoundedPriorityQueue`]: smallest key first, optionally capped to the
//!   `k` best keys (uniform-cost, greedy, A*, beam search)

mod bounded;
mod queue;

pub use bounded::BoundedPriorityQueue;
pub use queue::{FifoFringe, LifoFringe};

/// A collection of pending items with a fixed pop policy.
pub trait Fringe<T> {
    /// Inserts one item.
    fn push(&mut self, item: T);

    /// Removes and returns the next item, `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// The item [`pop`](Fringe::pop) would return, without removing it.
    fn peek(&self) -> Option<&T>;

    /// Number of items held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts every item of `items` in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }
}
