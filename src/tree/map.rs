//! Ordered map based on a Red-Black Tree.
//!
//! This module provides [`RedBlackMap`], a mutable ordered map whose
//! deletion uses the double-black / negative-black formulation of
//! Okasaki and Might instead of the classical case analysis.
//!
//! # Overview
//!
//! - O(log N) get
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) first / last
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use redblack::RedBlackMap;
//!
//! let mut map = RedBlackMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! // Entries are always visited in key order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! map.remove(&2);
//! assert_eq!(map.get(&2), None);
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants between operations:
//! 1. The root is black
//! 2. Red nodes have only black children
//! 3. Every path from the root to a leaf has the same number of black nodes
//! 4. No node is double-black or negative-black
//!
//! These invariants ensure the tree height is at most `2 * log2(N + 1)`.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

use super::arena::{Arena, NodeId};
use super::iter::{RedBlackMapIntoIterator, RedBlackMapIterator, RedBlackMapValuesMut};
use crate::order::{NaturalOrder, StrictOrder};

// =============================================================================
// RedBlackMap Definition
// =============================================================================

/// A mutable ordered map based on a Red-Black Tree.
///
/// Keys are ordered by the [`StrictOrder`] `O` supplied at construction:
/// [`NaturalOrder`] by default, or any `Fn(&K, &K) -> bool` "less than"
/// closure through [`with_order`](Self::with_order).
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `first`/`last` | O(log N)          |
/// | `len`          | O(1)              |
/// | `is_empty`     | O(1)              |
///
/// # Examples
///
/// ```rust
/// use redblack::RedBlackMap;
///
/// let mut by_length = RedBlackMap::with_order(|a: &String, b: &String| a.len() < b.len());
/// by_length.insert("ccc".to_string(), 3);
/// by_length.insert("a".to_string(), 1);
/// by_length.insert("bb".to_string(), 2);
///
/// let keys: Vec<&str> = by_length.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec!["a", "bb", "ccc"]);
/// ```
#[derive(Clone)]
pub struct RedBlackMap<K, V, O = NaturalOrder> {
    /// Node storage, sentinels included
    pub(super) arena: Arena<K, V>,
    /// Root node, [`NodeId::EMPTY`] when the map is empty
    pub(super) root: NodeId,
    /// Number of entries
    pub(super) length: usize,
    /// Order over keys, fixed for the map's lifetime
    pub(super) order: O,
}

impl<K, V> RedBlackMap<K, V> {
    /// Creates a new empty map ordered by `K`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, String> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<K, V, O> RedBlackMap<K, V, O> {
    /// Creates a new empty map ordered by `order`.
    ///
    /// `order` must be a strict total order that stays consistent for the
    /// lifetime of the map; see [`StrictOrder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_order(|a: &i32, b: &i32| a > b);
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.first_key_value(), Some((&2, &"two")));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_order(order: O) -> Self {
        Self {
            arena: Arena::new(),
            root: NodeId::EMPTY,
            length: 0,
            order,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "one");
    /// assert!(!map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the order the map was built with.
    #[inline]
    pub const fn order(&self) -> &O {
        &self.order
    }

    /// Removes every entry, keeping the order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, "one");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NodeId::EMPTY;
        self.length = 0;
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, &str> = [(3, "three"), (1, "one")].into_iter().collect();
    /// assert_eq!(map.first_key_value(), Some((&1, &"one")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.extreme(Arena::left)
    }

    /// Returns the entry with the maximum key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, &str> = [(3, "three"), (1, "one")].into_iter().collect();
    /// assert_eq!(map.last_key_value(), Some((&3, &"three")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.extreme(Arena::right)
    }

    /// Follows `step` from the root until the next step is the empty leaf.
    fn extreme(&self, step: fn(&Arena<K, V>, NodeId) -> NodeId) -> Option<(&K, &V)> {
        if self.root == NodeId::EMPTY {
            return None;
        }
        let mut node = self.root;
        while step(&self.arena, node) != NodeId::EMPTY {
            node = step(&self.arena, node);
        }
        Some(self.arena.entry(node))
    }

    /// Returns an iterator over entries in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, &str> =
    ///     [(3, "three"), (1, "one"), (2, "two")].into_iter().collect();
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    #[must_use]
    pub fn iter(&self) -> RedBlackMapIterator<'_, K, V> {
        RedBlackMapIterator::new(&self.arena, self.root, self.length)
    }

    /// Returns an iterator over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 60);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values, in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map: RedBlackMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
    /// for value in map.values_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&2), Some(&21));
    /// ```
    pub fn values_mut(&mut self) -> RedBlackMapValuesMut<'_, K, V> {
        RedBlackMapValuesMut::new(&mut self.arena, self.root)
    }
}

impl<K, V, O: StrictOrder<K>> RedBlackMap<K, V, O> {
    /// Finds the node holding a key equal to `key`.
    fn find(&self, key: &K) -> Option<NodeId> {
        let mut node = self.root;
        while node != NodeId::EMPTY {
            match self.order.compare(key, self.arena.key(node)) {
                Ordering::Less => node = self.arena.left(node),
                Ordering::Greater => node = self.arena.right(node),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
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
    /// map.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get(&"hello".to_string()), Some(&42));
    /// assert_eq!(map.get(&"world".to_string()), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| self.arena.entry(node).1)
    }

    /// Returns the stored key and value equal to `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|node| self.arena.entry(node))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value *= 2;
    /// }
    /// assert_eq!(map.get(&1), Some(&20));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find(key).map(|node| self.arena.value_mut(node))
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert("key", 42);
    ///
    /// assert!(map.contains_key(&"key"));
    /// assert!(!map.contains_key(&"other"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for RedBlackMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, O: StrictOrder<K> + Default> FromIterator<(K, V)> for RedBlackMap<K, V, O> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_order(O::default());
        map.extend(iter);
        map
    }
}

impl<K, V, O: StrictOrder<K>> Extend<(K, V)> for RedBlackMap<K, V, O> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, O> IntoIterator for RedBlackMap<K, V, O> {
    type Item = (K, V);
    type IntoIter = RedBlackMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackMapIntoIterator::new(self.arena, self.root, self.length)
    }
}

impl<'a, K, V, O> IntoIterator for &'a RedBlackMap<K, V, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = RedBlackMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, O: StrictOrder<K>> Index<&K> for RedBlackMap<K, V, O> {
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found in RedBlackMap")
    }
}

/// Two maps are equal when they hold equal entries in the same order.
/// Tree shapes may differ.
impl<K: PartialEq, V: PartialEq, O> PartialEq for RedBlackMap<K, V, O> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, O> Eq for RedBlackMap<K, V, O> {}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for RedBlackMap<K, V, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

static_assertions::assert_impl_all!(RedBlackMap<i32, String>: Send, Sync, Clone, Default);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let map: RedBlackMap<i32, String> = RedBlackMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.root, NodeId::EMPTY);
    }

    #[rstest]
    fn test_get_on_empty_map() {
        let map: RedBlackMap<i32, String> = RedBlackMap::default();
        assert_eq!(map.get(&1), None);
        assert_eq!(map.first_key_value(), None);
        assert_eq!(map.last_key_value(), None);
    }

    #[rstest]
    fn test_first_and_last() {
        let map: RedBlackMap<i32, i32> = (0..50).map(|key| (key, -key)).collect();
        assert_eq!(map.first_key_value(), Some((&0, &0)));
        assert_eq!(map.last_key_value(), Some((&49, &-49)));
    }

    #[rstest]
    fn test_custom_order_reverses_iteration() {
        let mut map = RedBlackMap::with_order(|a: &i32, b: &i32| a > b);
        map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);

        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 2, 1]);
        assert_eq!(map.get(&2), Some(&'b'));
        assert!(map.check_invariants().is_ok());
    }

    #[rstest]
    fn test_index_returns_value() {
        let map: RedBlackMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map[&"b"], 2);
    }

    #[rstest]
    #[should_panic(expected = "key not found")]
    fn test_index_panics_on_missing_key() {
        let map: RedBlackMap<&str, i32> = RedBlackMap::new();
        let _value = map[&"missing"];
    }

    #[rstest]
    fn test_eq_ignores_shape() {
        let ascending: RedBlackMap<i32, i32> = (0..20).map(|key| (key, key)).collect();
        let descending: RedBlackMap<i32, i32> = (0..20).rev().map(|key| (key, key)).collect();
        assert_eq!(ascending, descending);
    }

    #[rstest]
    fn test_debug_formats_as_map() {
        let map: RedBlackMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
        assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut original: RedBlackMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
        let copy = original.clone();
        original.remove(&5);

        assert_eq!(copy.get(&5), Some(&5));
        assert_eq!(original.get(&5), None);
        assert!(copy.check_invariants().is_ok());
    }

    #[rstest]
    fn test_clear_then_reuse() {
        let mut map: RedBlackMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
        map.clear();
        assert!(map.is_empty());
        map.insert(1, 1);
        assert_eq!(map.len(), 1);
        assert!(map.check_invariants().is_ok());
    }
}
