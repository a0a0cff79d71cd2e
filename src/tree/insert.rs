//! Insertion engine.

use std::cmp::Ordering;

use super::arena::NodeId;
use super::color::Color;
use super::map::RedBlackMap;
use crate::order::StrictOrder;

impl<K, V, O: StrictOrder<K>> RedBlackMap<K, V, O> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map already holds an equal key, its value is overwritten in
    /// place (the stored key is kept and the tree shape does not change) and
    /// the previous value is returned.
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
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, previous) = self.insert_into(self.root, key, value);
        self.root = root;
        self.arena.paint(root, Color::Black);
        if previous.is_none() {
            self.length += 1;
        }

        #[cfg(feature = "strict-invariants")]
        self.assert_invariants();

        previous
    }

    /// Recursive helper for insert.
    /// Returns the new subtree root and the overwritten value, if any.
    fn insert_into(&mut self, node: NodeId, key: K, value: V) -> (NodeId, Option<V>) {
        if node == NodeId::EMPTY {
            return (self.arena.allocate(key, value), None);
        }

        match self.order.compare(&key, self.arena.key(node)) {
            Ordering::Less => {
                let (left, previous) = self.insert_into(self.arena.left(node), key, value);
                self.arena.set_left(node, left);
                (self.arena.balance(node), previous)
            }
            Ordering::Greater => {
                let (right, previous) = self.insert_into(self.arena.right(node), key, value);
                self.arena.set_right(node, right);
                (self.arena.balance(node), previous)
            }
            Ordering::Equal => {
                let previous = std::mem::replace(self.arena.value_mut(node), value);
                (node, Some(previous))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, RedBlackMap};
    use rstest::rstest;

    #[rstest]
    fn test_first_insert_creates_black_root() {
        let mut map = RedBlackMap::new();
        map.insert(1, "one");

        let shape = map.preorder();
        assert_eq!(shape.len(), 1);
        assert_eq!(shape[0].color, Color::Black);
        assert_eq!(shape[0].depth, 0);
    }

    #[rstest]
    fn test_ascending_inserts_rotate_to_balanced_root() {
        let mut map = RedBlackMap::new();
        for key in 1..=3 {
            map.insert(key, ());
        }

        let shape: Vec<(usize, i32, Color)> = map
            .preorder()
            .into_iter()
            .map(|entry| (entry.depth, *entry.key, entry.color))
            .collect();
        assert_eq!(
            shape,
            vec![(0, 2, Color::Black), (1, 1, Color::Black), (1, 3, Color::Black)]
        );
    }

    #[rstest]
    fn test_insert_counts_only_new_keys() {
        let mut map = RedBlackMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"a"), Some(&3));
    }

    #[rstest]
    fn test_overwrite_keeps_original_key() {
        let mut map =
            RedBlackMap::with_order(|left: &(i32, char), right: &(i32, char)| left.0 < right.0);
        map.insert((1, 'a'), "first");
        map.insert((1, 'b'), "second");

        assert_eq!(map.get_key_value(&(1, 'z')), Some((&(1, 'a'), &"second")));
    }

    #[rstest]
    fn test_insert_keeps_invariants_for_descending_keys() {
        let mut map = RedBlackMap::new();
        for key in (0..256).rev() {
            map.insert(key, key * 2);
            assert!(map.check_invariants().is_ok());
        }
        assert_eq!(map.len(), 256);
    }
}
