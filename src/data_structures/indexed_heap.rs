use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

/// Node of the heap: a key and its current priority
#[derive(Debug, Clone)]
struct HeapNode<K, P> {
    key: K,
    priority: P,
}

/// Array-backed binary min-heap with an index from key to array position
///
/// The position index makes `contains`, `priority` and `decrease_key` cheap:
/// - Insert, extract-min and decrease-key run in O(log n)
/// - Membership and current-priority lookups run in O(1)
///
/// Each key appears at most once. After every public call the position index
/// is exactly the inverse of the array and every parent's priority is no
/// greater than its children's.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap-ordered nodes, 0-indexed with children at 2i+1 and 2i+2
    nodes: Vec<HeapNode<K, P>>,

    /// Position of each key in `nodes`
    positions: HashMap<K, usize>,
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the key is currently in the heap
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the current priority of a key, or `None` if it is not queued
    pub fn priority(&self, key: &K) -> Option<P> {
        self.positions.get(key).map(|&index| self.nodes[index].priority)
    }

    /// Inserts a key that is not yet in the heap.
    ///
    /// Keys must be unique; inserting a key that is already present is
    /// handled as `decrease_key` so the position index never goes stale.
    pub fn insert(&mut self, key: K, priority: P) {
        if self.contains(&key) {
            warn!("insert of already queued key {:?}, treating as decrease_key", key);
            self.decrease_key(key, priority);
            return;
        }

        let index = self.nodes.len();
        self.positions.insert(key.clone(), index);
        self.nodes.push(HeapNode { key, priority });
        self.sift_up(index);
    }

    /// Removes and returns the key with the smallest priority.
    ///
    /// Equal priorities come out in no particular order; callers that need a
    /// total order fold a tie-breaker into `P`. Returns `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<K> {
        self.pop().map(|(key, _)| key)
    }

    /// Removes and returns the key with the smallest priority together with that priority
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.nodes.is_empty() {
            return None;
        }

        // Move last element to root and remove the old root
        let min = self.nodes.swap_remove(0);
        self.positions.remove(&min.key);

        if let Some(root) = self.nodes.first() {
            self.positions.insert(root.key.clone(), 0);
            self.sift_down(0);
        }

        Some((min.key, min.priority))
    }

    /// Lowers the priority of a key, inserting it if absent.
    ///
    /// A priority that is not strictly smaller than the current one is
    /// ignored; keys are never increased. Returns true if the heap changed.
    pub fn decrease_key(&mut self, key: K, priority: P) -> bool {
        let Some(&index) = self.positions.get(&key) else {
            self.insert(key, priority);
            return true;
        };

        if priority >= self.nodes[index].priority {
            return false;
        }

        self.nodes[index].priority = priority;
        self.sift_up(index);
        true
    }

    /// Sift element at `index` up to maintain heap order
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index].priority >= self.nodes[parent].priority {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    /// Sift element at `index` down to maintain heap order
    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.nodes[left].priority < self.nodes[smallest].priority {
                smallest = left;
            }
            if right < len && self.nodes[right].priority < self.nodes[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two nodes and updates both of their positions
    fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
        self.positions.insert(self.nodes[i].key.clone(), i);
        self.positions.insert(self.nodes[j].key.clone(), j);
    }
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_invariants<K, P>(heap: &IndexedMinHeap<K, P>)
    where
        K: Eq + Hash + Clone + Debug,
        P: Ord + Copy + Debug,
    {
        assert_eq!(heap.nodes.len(), heap.positions.len());
        for (index, node) in heap.nodes.iter().enumerate() {
            assert_eq!(heap.positions.get(&node.key), Some(&index), "stale position for {:?}", node.key);
            if index > 0 {
                let parent = (index - 1) / 2;
                assert!(heap.nodes[parent].priority <= node.priority, "heap order violated at {}", index);
            }
        }
    }

    #[test]
    fn empty_heap() {
        let mut heap: IndexedMinHeap<&str, u32> = IndexedMinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.extract_min(), None);
        assert_eq!(heap.priority(&"a"), None);
    }

    #[test]
    fn extract_in_priority_order() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("c", 3);
        heap.insert("a", 1);
        heap.insert("b", 2);
        assert_invariants(&heap);

        assert_eq!(heap.extract_min(), Some("a"));
        assert!(!heap.contains(&"a"));
        assert_eq!(heap.extract_min(), Some("b"));
        assert_eq!(heap.extract_min(), Some("c"));
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn decrease_key_moves_entry_up() {
        let mut heap = IndexedMinHeap::new();
        for (key, priority) in [("a", 5), ("b", 6), ("c", 7), ("d", 8)] {
            heap.insert(key, priority);
        }

        assert!(heap.decrease_key("d", 1));
        assert_invariants(&heap);
        assert_eq!(heap.priority(&"d"), Some(1));
        assert_eq!(heap.pop(), Some(("d", 1)));
    }

    #[test]
    fn decrease_key_ignores_larger_or_equal_priority() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("a", 5);
        assert!(!heap.decrease_key("a", 5));
        assert!(!heap.decrease_key("a", 9));
        assert_eq!(heap.priority(&"a"), Some(5));
    }

    #[test]
    fn decrease_key_inserts_missing_key() {
        let mut heap = IndexedMinHeap::new();
        assert!(heap.decrease_key("x", 4));
        assert!(heap.contains(&"x"));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn random_operations_keep_index_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = IndexedMinHeap::new();
        let mut reference: HashMap<u32, u32> = HashMap::new();

        for _ in 0..2_000 {
            match rng.gen_range(0..3) {
                0 => {
                    let key = rng.gen_range(0..200);
                    let priority = rng.gen_range(0..1_000);
                    heap.decrease_key(key, priority);
                    let entry = reference.entry(key).or_insert(priority);
                    *entry = (*entry).min(priority);
                }
                1 => {
                    let key = rng.gen_range(0..200);
                    if !heap.contains(&key) {
                        let priority = rng.gen_range(0..1_000);
                        heap.insert(key, priority);
                        reference.insert(key, priority);
                    }
                }
                _ => {
                    let expected = reference.values().min().copied();
                    match heap.pop() {
                        Some((key, priority)) => {
                            assert_eq!(Some(priority), expected);
                            assert_eq!(reference.remove(&key), Some(priority));
                            assert!(!heap.contains(&key));
                        }
                        None => assert!(reference.is_empty()),
                    }
                }
            }
            assert_invariants(&heap);
            assert_eq!(heap.len(), reference.len());
        }
    }
}
