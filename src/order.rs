//! Strict orders over keys.
//!
//! A [`RedBlackMap`](crate::RedBlackMap) never calls `Ord` directly: every
//! comparison goes through the [`StrictOrder`] it was built with. The default
//! is [`NaturalOrder`], and any `Fn(&K, &K) -> bool` closure can be used as a
//! custom "less than" predicate.
//!
//! # Examples
//!
//! ```rust
//! use redblack::{NaturalOrder, StrictOrder};
//!
//! assert!(NaturalOrder.less(&1, &2));
//!
//! let descending = |left: &i32, right: &i32| left > right;
//! assert!(descending.less(&2, &1));
//! ```

use std::cmp::Ordering;

/// A strict "less than" relation over `K`.
///
/// Implementations must be irreflexive, transitive and antisymmetric, and
/// must not change their answer for the lifetime of the map using them.
/// Two keys are considered equal when neither is less than the other.
pub trait StrictOrder<K: ?Sized> {
    /// Returns `true` if `left` sorts strictly before `right`.
    fn less(&self, left: &K, right: &K) -> bool;

    /// Derives a three-way comparison from two calls to [`less`](Self::less).
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The order given by the key's own `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> StrictOrder<K> for NaturalOrder {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left < right
    }

    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

impl<K: ?Sized, F> StrictOrder<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 1, Ordering::Greater)]
    #[case(7, 7, Ordering::Equal)]
    fn test_natural_order_compare(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&left, &right), expected);
    }

    #[rstest]
    fn test_natural_order_is_irreflexive() {
        assert!(!NaturalOrder.less(&"key", &"key"));
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 1, Ordering::Less)]
    #[case(3, 3, Ordering::Equal)]
    fn test_closure_order_compare(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        let descending = |a: &i32, b: &i32| a > b;
        assert_eq!(descending.compare(&left, &right), expected);
    }

    #[rstest]
    fn test_closure_order_on_projection() {
        let by_length = |a: &String, b: &String| a.len() < b.len();
        assert!(by_length.less(&"ab".to_string(), &"abc".to_string()));
        assert_eq!(
            by_length.compare(&"xy".to_string(), &"ab".to_string()),
            Ordering::Equal
        );
    }
}
