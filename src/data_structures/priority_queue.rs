use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `BinaryHeap` that allows duplicate entries per item
///
/// There is no decrease-key: callers push a fresh entry whenever a priority
/// improves. Superseded entries are dropped by `pop_fresh`, which keeps a
/// count of how many it discarded. Equal priorities pop in item order.
#[derive(Debug, Clone)]
pub struct LazyPriorityQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,

    /// Entries dropped by `pop_fresh` so far
    discarded: usize,
}

impl<V, P> LazyPriorityQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        LazyPriorityQueue {
            heap: BinaryHeap::new(),
            discarded: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an entry; earlier entries for the same item are kept
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Removes entries in priority order until one passes `is_fresh`.
    ///
    /// Rejected entries are dropped and counted in `discarded`.
    pub fn pop_fresh<F>(&mut self, mut is_fresh: F) -> Option<(V, P)>
    where
        F: FnMut(&V) -> bool,
    {
        while let Some((item, priority)) = self.pop() {
            if is_fresh(&item) {
                return Some((item, priority));
            }
            self.discarded += 1;
        }
        None
    }

    /// Number of stale entries dropped by `pop_fresh`
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

impl<V, P> Default for LazyPriorityQueue<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut queue = LazyPriorityQueue::new();
        queue.push("b", 4);
        queue.push("a", 9);
        queue.push("c", 1);

        assert_eq!(queue.pop(), Some(("c", 1)));
        assert_eq!(queue.pop(), Some(("b", 4)));
        assert_eq!(queue.pop(), Some(("a", 9)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut queue = LazyPriorityQueue::new();
        queue.push("a", 10);
        queue.push("a", 3);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.pop(), Some(("a", 3)));
        assert_eq!(queue.pop(), Some(("a", 10)));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_priorities_pop_in_item_order() {
        let mut queue = LazyPriorityQueue::new();
        queue.push("c", 2);
        queue.push("a", 2);
        queue.push("b", 2);

        assert_eq!(queue.pop(), Some(("a", 2)));
        assert_eq!(queue.pop(), Some(("b", 2)));
        assert_eq!(queue.pop(), Some(("c", 2)));
    }

    #[test]
    fn pop_fresh_counts_dropped_entries() {
        let mut queue = LazyPriorityQueue::new();
        queue.push("a", 7);
        queue.push("b", 5);
        queue.push("a", 1);
        queue.push("b", 2);

        let mut done = Vec::new();
        while let Some((item, _)) = queue.pop_fresh(|item| !done.contains(item)) {
            done.push(item);
        }

        assert_eq!(done, vec!["a", "b"]);
        assert_eq!(queue.discarded(), 2);
        assert!(queue.is_empty());
    }
}
