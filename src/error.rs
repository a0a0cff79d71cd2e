//! Error types reported by the invariant checker.

use thiserror::Error;

use crate::tree::Color;

/// A broken red-black invariant, as reported by
/// [`RedBlackMap::check_invariants`](crate::RedBlackMap::check_invariants).
///
/// Each variant names one audited rule and carries enough position
/// information to locate the offending node. Depths count from the root,
/// which is at depth 0. Positions count in-order entries from 0.
///
/// # Examples
///
/// ```rust
/// use redblack::{Color, InvariantViolation};
///
/// let violation = InvariantViolation::RootNotBlack { color: Color::Red };
/// assert_eq!(violation.to_string(), "root is Red, expected Black");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is not Black.
    #[error("root is {color:?}, expected Black")]
    RootNotBlack {
        /// The color found at the root.
        color: Color,
    },

    /// A Red node has a child that is not Black.
    #[error("Red node has a {color:?} child at depth {depth}")]
    NonBlackChildOfRed {
        /// Depth of the offending child.
        depth: usize,
        /// Color of the offending child.
        color: Color,
    },

    /// Two sibling subtrees carry a different number of Black nodes.
    #[error("black height mismatch: left subtree has {expected}, right subtree has {found}")]
    BlackHeightMismatch {
        /// Black height of the left subtree.
        expected: usize,
        /// Black height of the right subtree.
        found: usize,
    },

    /// A DoubleBlack or NegativeBlack node survived a public operation.
    #[error("transient color {color:?} at depth {depth}")]
    TransientColor {
        /// The transient color found.
        color: Color,
        /// Depth of the node carrying it.
        depth: usize,
    },

    /// An in-order walk found a key that is not strictly greater than its
    /// predecessor.
    #[error("key at in-order position {position} is not greater than its predecessor")]
    KeysOutOfOrder {
        /// In-order position of the offending key.
        position: usize,
    },

    /// The recorded length disagrees with the number of reachable nodes.
    #[error("length mismatch: recorded {recorded}, counted {counted}")]
    LengthMismatch {
        /// The length the map believes it has.
        recorded: usize,
        /// The number of nodes reachable from the root.
        counted: usize,
    },

    /// One of the two sentinel leaves was recolored, re-linked or filled.
    #[error("sentinel leaf was modified")]
    CorruptSentinel,
}
