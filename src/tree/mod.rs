//! Red-black tree map.
//!
//! - [`RedBlackMap`]: ordered map with in-place insertion and deletion
//! - [`Color`]: node colors, including the two transient deletion colors
//! - [`AuditReport`] and [`PreorderEntry`]: results of the diagnostic walks
//!
//! # Deletion
//!
//! Deletion follows the double-black scheme: removing a Black leaf leaves a
//! temporarily "doubly black" marker that is pushed toward the root and
//! absorbed by rotations. `NegativeBlack` appears only while the marker is
//! being absorbed. Neither transient color survives a public operation.
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::RedBlackMap;
//!
//! let mut map = RedBlackMap::new();
//! for key in [10, 5, 15, 3] {
//!     map.insert(key, key.to_string());
//! }
//! map.remove(&5);
//!
//! assert!(map.check_invariants().is_ok());
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 10, 15]);
//! ```

mod arena;
mod audit;
mod balance;
mod color;
mod delete;
mod insert;
mod iter;
mod map;

pub use audit::{AuditReport, PreorderEntry};
pub use color::Color;
pub use iter::{RedBlackMapIntoIterator, RedBlackMapIterator, RedBlackMapValuesMut};
pub use map::RedBlackMap;
