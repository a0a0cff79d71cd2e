//! Deletion engine.
//!
//! Removing a Black leaf leaves the double-black empty leaf in its place.
//! Every ancestor on the way back up passes through
//! [`bubble`](super::arena::Arena::bubble), which either absorbs the deficit
//! locally or pushes it one level higher. Whatever reaches the root is
//! dropped by painting the root Black.

use std::cmp::Ordering;

use super::arena::NodeId;
use super::color::Color;
use super::map::RedBlackMap;
use crate::order::StrictOrder;

impl<K, V, O> RedBlackMap<K, V, O> {
    /// Installs the result of a top-level removal as the new root.
    fn set_root_after_removal(&mut self, root: NodeId) {
        if root == NodeId::DOUBLE_BLACK_EMPTY {
            tracing::trace!("deficit reached the root of an emptied tree");
            self.root = NodeId::EMPTY;
        } else {
            self.root = root;
            if root != NodeId::EMPTY {
                self.arena.paint(root, Color::Black);
            }
        }
    }

    /// Removes the node at `node` from the tree, returning the subtree that
    /// replaces it and the entry it held.
    fn remove_node(&mut self, node: NodeId) -> (NodeId, (K, V)) {
        let color = self.arena.color(node);
        let (left, right) = (self.arena.left(node), self.arena.right(node));

        match color {
            Color::Red if left == NodeId::EMPTY && right == NodeId::EMPTY => {
                (NodeId::EMPTY, self.arena.release(node))
            }
            Color::Black if left == NodeId::EMPTY && right == NodeId::EMPTY => {
                (NodeId::DOUBLE_BLACK_EMPTY, self.arena.release(node))
            }
            Color::Black if left == NodeId::EMPTY && self.arena.color(right) == Color::Red => {
                self.arena.paint(right, Color::Black);
                (right, self.arena.release(node))
            }
            Color::Black if right == NodeId::EMPTY && self.arena.color(left) == Color::Red => {
                self.arena.paint(left, Color::Black);
                (left, self.arena.release(node))
            }
            _ => {
                let (left, predecessor) = self.remove_max(left);
                let removed = self.arena.replace_entry(node, predecessor);
                self.arena.set_left(node, left);
                (self.arena.bubble(node), removed)
            }
        }
    }

    /// Removes the rightmost node of the subtree rooted at `node`.
    fn remove_max(&mut self, node: NodeId) -> (NodeId, (K, V)) {
        assert!(
            !node.is_sentinel(),
            "cannot remove the maximum of an empty subtree"
        );
        let right = self.arena.right(node);
        if right == NodeId::EMPTY {
            return self.remove_node(node);
        }
        let (right, removed) = self.remove_max(right);
        self.arena.set_right(node, right);
        (self.arena.bubble(node), removed)
    }

    /// Removes the leftmost node of the subtree rooted at `node`.
    fn remove_min(&mut self, node: NodeId) -> (NodeId, (K, V)) {
        assert!(
            !node.is_sentinel(),
            "cannot remove the minimum of an empty subtree"
        );
        let left = self.arena.left(node);
        if left == NodeId::EMPTY {
            return self.remove_node(node);
        }
        let (left, removed) = self.remove_min(left);
        self.arena.set_left(node, left);
        (self.arena.bubble(node), removed)
    }
}

impl<K, V, O: StrictOrder<K>> RedBlackMap<K, V, O> {
    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing an absent key leaves the map untouched.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.get(&1), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert("key".to_string(), 42);
    /// assert_eq!(map.remove_entry(&"key".to_string()), Some(("key".to_string(), 42)));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let (root, removed) = self.remove_from(self.root, key);
        self.set_root_after_removal(root);
        if removed.is_some() {
            self.length -= 1;
        }

        #[cfg(feature = "strict-invariants")]
        self.assert_invariants();

        removed
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map: RedBlackMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
    /// assert_eq!(map.pop_first(), Some((1, "one")));
    /// assert_eq!(map.pop_first(), Some((2, "two")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        if self.root == NodeId::EMPTY {
            return None;
        }
        let (root, removed) = self.remove_min(self.root);
        self.set_root_after_removal(root);
        self.length -= 1;

        #[cfg(feature = "strict-invariants")]
        self.assert_invariants();

        Some(removed)
    }

    /// Removes and returns the entry with the maximum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map: RedBlackMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
    /// assert_eq!(map.pop_last(), Some((2, "two")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        if self.root == NodeId::EMPTY {
            return None;
        }
        let (root, removed) = self.remove_max(self.root);
        self.set_root_after_removal(root);
        self.length -= 1;

        #[cfg(feature = "strict-invariants")]
        self.assert_invariants();

        Some(removed)
    }

    /// Recursive helper for remove.
    fn remove_from(&mut self, node: NodeId, key: &K) -> (NodeId, Option<(K, V)>) {
        if node == NodeId::EMPTY {
            return (NodeId::EMPTY, None);
        }

        match self.order.compare(key, self.arena.key(node)) {
            Ordering::Less => {
                let (left, removed) = self.remove_from(self.arena.left(node), key);
                self.arena.set_left(node, left);
                (self.arena.bubble(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = self.remove_from(self.arena.right(node), key);
                self.arena.set_right(node, right);
                (self.arena.bubble(node), removed)
            }
            Ordering::Equal => {
                let (replacement, removed) = self.remove_node(node);
                (replacement, Some(removed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, RedBlackMap};
    use rstest::rstest;

    fn shape(map: &RedBlackMap<i32, i32>) -> Vec<(usize, i32, Color)> {
        map.preorder()
            .into_iter()
            .map(|entry| (entry.depth, *entry.key, entry.color))
            .collect()
    }

    fn map_of(keys: &[i32]) -> RedBlackMap<i32, i32> {
        let mut map = RedBlackMap::new();
        for &key in keys {
            map.insert(key, key * 10);
        }
        map
    }

    #[rstest]
    fn test_remove_red_leaf() {
        // 2B(1R, 3R)
        let mut map = map_of(&[2, 1, 3]);

        assert_eq!(map.remove(&3), Some(30));
        assert_eq!(shape(&map), vec![(0, 2, Color::Black), (1, 1, Color::Red)]);
    }

    #[rstest]
    fn test_remove_black_node_promotes_red_child() {
        // 3B(2B(1R, _), 4B)
        let mut map = map_of(&[2, 1, 3, 4]);

        assert_eq!(map.remove(&2), Some(20));
        assert_eq!(
            shape(&map),
            vec![(0, 3, Color::Black), (1, 1, Color::Black), (1, 4, Color::Black)]
        );
    }

    #[rstest]
    fn test_remove_black_leaf_rotates_sibling() {
        // 3B(2B(1R, _), 4B)
        let mut map = map_of(&[2, 1, 3, 4]);

        assert_eq!(map.remove(&4), Some(40));
        assert_eq!(
            shape(&map),
            vec![(0, 2, Color::Black), (1, 1, Color::Black), (1, 3, Color::Black)]
        );
    }

    #[rstest]
    fn test_deficit_is_dropped_at_root() {
        let mut map = map_of(&[2, 1, 3, 4]);
        map.remove(&4);

        assert_eq!(map.remove(&1), Some(10));
        assert_eq!(shape(&map), vec![(0, 2, Color::Black), (1, 3, Color::Red)]);
        assert!(map.check_invariants().is_ok());
    }

    #[rstest]
    fn test_remove_only_entry_empties_map() {
        let mut map = map_of(&[7]);

        assert_eq!(map.remove(&7), Some(70));
        assert!(map.is_empty());
        assert!(map.preorder().is_empty());
        assert!(map.check_invariants().is_ok());

        map.insert(8, 80);
        assert_eq!(map.get(&8), Some(&80));
    }

    #[rstest]
    fn test_remove_root_moves_predecessor_into_its_node() {
        // Ascending inserts of 1..=7 end in the perfect tree rooted at 4.
        let mut map = map_of(&[1, 2, 3, 4, 5, 6, 7]);
        let root = map.root;
        assert_eq!(map.arena.key(root), &4);

        assert_eq!(map.remove(&4), Some(40));
        assert_eq!(map.root, root);
        assert_eq!(map.arena.entry(root), (&3, &30));
        assert_eq!(
            shape(&map),
            vec![
                (0, 3, Color::Black),
                (1, 2, Color::Black),
                (2, 1, Color::Red),
                (1, 6, Color::Red),
                (2, 5, Color::Black),
                (2, 7, Color::Black),
            ]
        );
        assert!(map.check_invariants().is_ok());
    }

    #[rstest]
    fn test_remove_absent_key_is_noop() {
        let mut map = map_of(&[1, 2, 3]);
        let before = shape(&map);

        assert_eq!(map.remove(&99), None);
        assert_eq!(shape(&map), before);
        assert_eq!(map.len(), 3);
    }

    #[rstest]
    fn test_remove_from_empty_map() {
        let mut map: RedBlackMap<i32, i32> = RedBlackMap::new();
        assert_eq!(map.remove(&1), None);
        assert_eq!(map.pop_first(), None);
        assert_eq!(map.pop_last(), None);
    }

    #[rstest]
    fn test_removed_slots_are_reused() {
        let mut map = map_of(&(0..64).collect::<Vec<_>>());
        for key in 0..32 {
            map.remove(&key);
        }
        for key in 100..132 {
            map.insert(key, key);
        }
        assert_eq!(map.arena.occupied(), 64);
    }

    #[rstest]
    fn test_pop_first_and_last_drain_in_order() {
        let mut map = map_of(&[5, 3, 8, 1, 4, 7, 9, 2, 6]);
        let mut fronts = Vec::new();
        let mut backs = Vec::new();
        while let Some((key, _)) = map.pop_first() {
            fronts.push(key);
            assert!(map.check_invariants().is_ok());
            if let Some((key, _)) = map.pop_last() {
                backs.push(key);
                assert!(map.check_invariants().is_ok());
            }
        }
        assert_eq!(fronts, vec![1, 2, 3, 4, 5]);
        assert_eq!(backs, vec![9, 8, 7, 6]);
    }

    #[rstest]
    fn test_interleaved_removals_keep_invariants() {
        let mut map = map_of(&(0..200).collect::<Vec<_>>());
        for key in (0..200).step_by(3) {
            assert_eq!(map.remove(&key), Some(key * 10));
            assert!(map.check_invariants().is_ok(), "after removing {key}");
        }
        for key in 0..200 {
            assert_eq!(map.contains_key(&key), key % 3 != 0);
        }
    }
}
