//! # redblack
//!
//! An ordered key-value map backed by a red-black tree whose deletion uses
//! the double-black / negative-black formulation.
//!
//! ## Overview
//!
//! - **[`RedBlackMap`]**: insert, lookup and delete in O(log N), ordered by a
//!   caller-supplied strict weak order
//! - **[`StrictOrder`]**: the ordering seam. [`NaturalOrder`] uses [`Ord`]
//!   and any `Fn(&K, &K) -> bool` closure works as a "less than" predicate
//! - **Self-audit**: [`RedBlackMap::check_invariants`] reports the first
//!   broken red-black rule as an [`InvariantViolation`]
//!
//! ## Feature Flags
//!
//! - `strict-invariants`: run [`RedBlackMap::assert_invariants`] after every
//!   insertion and removal
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut map = RedBlackMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//! map.insert(3, "three");
//!
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.remove(&2), Some("two"));
//! assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &"one"), (&3, &"three")]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::InvariantViolation;
    pub use crate::order::{NaturalOrder, StrictOrder};
    pub use crate::tree::{AuditReport, Color, RedBlackMap};
}

pub mod error;
pub mod order;
pub mod tree;

pub use error::InvariantViolation;
pub use order::{NaturalOrder, StrictOrder};
pub use tree::{
    AuditReport, Color, PreorderEntry, RedBlackMap, RedBlackMapIntoIterator, RedBlackMapIterator,
    RedBlackMapValuesMut,
};
