//! In-order iterators over a [`RedBlackMap`](super::RedBlackMap).

use super::arena::{Arena, NodeId};

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over key-value pairs of a [`RedBlackMap`](super::RedBlackMap),
/// in key order.
///
/// Walks the tree lazily with an explicit stack of at most one tree height.
pub struct RedBlackMapIterator<'a, K, V> {
    arena: &'a Arena<K, V>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, V> RedBlackMapIterator<'a, K, V> {
    pub(super) fn new(arena: &'a Arena<K, V>, root: NodeId, length: usize) -> Self {
        let mut iterator = Self {
            arena,
            stack: Vec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: NodeId) {
        while node != NodeId::EMPTY {
            self.stack.push(node);
            node = self.arena.left(node);
        }
    }
}

impl<'a, K, V> Iterator for RedBlackMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(self.arena.right(node));
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.arena.entry(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for RedBlackMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> Clone for RedBlackMapIterator<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Mutable Values Iterator
// =============================================================================

/// An iterator over mutable references to the values of a
/// [`RedBlackMap`](super::RedBlackMap), in key order.
pub struct RedBlackMapValuesMut<'a, K, V> {
    values: std::vec::IntoIter<&'a mut V>,
    marker: std::marker::PhantomData<&'a K>,
}

impl<'a, K, V> RedBlackMapValuesMut<'a, K, V> {
    pub(super) fn new(arena: &'a mut Arena<K, V>, root: NodeId) -> Self {
        let ids = arena.in_order(root);
        Self {
            values: arena.values_mut_at(&ids).into_iter(),
            marker: std::marker::PhantomData,
        }
    }
}

impl<'a, K, V> Iterator for RedBlackMapValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<K, V> ExactSizeIterator for RedBlackMapValuesMut<'_, K, V> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over key-value pairs of a
/// [`RedBlackMap`](super::RedBlackMap), in key order.
pub struct RedBlackMapIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> RedBlackMapIntoIterator<K, V> {
    pub(super) fn new(arena: Arena<K, V>, root: NodeId, length: usize) -> Self {
        let ids = arena.in_order(root);
        debug_assert_eq!(ids.len(), length);
        Self {
            entries: arena.into_entries_at(&ids).into_iter(),
        }
    }
}

impl<K, V> Iterator for RedBlackMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for RedBlackMapIntoIterator<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for RedBlackMapIntoIterator<K, V> {}

#[cfg(test)]
mod tests {
    use crate::RedBlackMap;
    use rstest::rstest;

    fn sample() -> RedBlackMap<i32, String> {
        [5, 2, 8, 1, 9, 3, 7, 4, 6]
            .into_iter()
            .map(|key| (key, key.to_string()))
            .collect()
    }

    #[rstest]
    fn test_iter_sorted() {
        let map = sample();
        let keys: Vec<i32> = map.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_iter_exact_size() {
        let map = sample();
        let mut iterator = map.iter();
        assert_eq!(iterator.len(), 9);
        iterator.next();
        iterator.next();
        assert_eq!(iterator.len(), 7);
        assert_eq!(iterator.count(), 7);
    }

    #[rstest]
    fn test_iter_empty() {
        let map: RedBlackMap<i32, i32> = RedBlackMap::new();
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.iter().len(), 0);
    }

    #[rstest]
    fn test_for_loop_over_reference() {
        let map = sample();
        let mut total = 0;
        for (key, value) in &map {
            assert_eq!(&key.to_string(), value);
            total += key;
        }
        assert_eq!(total, 45);
    }

    #[rstest]
    fn test_values_mut_in_key_order() {
        let mut map = sample();
        for (index, value) in map.values_mut().enumerate() {
            value.push_str(&format!("#{index}"));
        }
        assert_eq!(map.get(&1), Some(&"1#0".to_string()));
        assert_eq!(map.get(&9), Some(&"9#8".to_string()));
    }

    #[rstest]
    fn test_into_iter_sorted_and_reversible() {
        let forward: Vec<i32> = sample().into_iter().map(|(key, _)| key).collect();
        assert_eq!(forward, (1..=9).collect::<Vec<_>>());

        let backward: Vec<i32> = sample().into_iter().rev().map(|(key, _)| key).collect();
        assert_eq!(backward, (1..=9).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn test_into_iter_after_removals() {
        let mut map = sample();
        map.remove(&5);
        map.remove(&1);
        let entries: Vec<(i32, String)> = map.into_iter().collect();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], (2, "2".to_string()));
    }
}
