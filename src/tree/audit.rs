//! Self-audit and diagnostic traversal.
//!
//! [`check_invariants`](RedBlackMap::check_invariants) walks the whole tree
//! once and stops at the first broken rule. The walk visits nodes in key
//! order, so ordering is checked against the previously visited key with
//! the map's own [`StrictOrder`].

use std::fmt::{self, Write as _};

use super::arena::NodeId;
use super::color::Color;
use super::map::RedBlackMap;
use crate::error::InvariantViolation;
use crate::order::StrictOrder;

// =============================================================================
// Audit Report
// =============================================================================

/// Summary of a tree that passed every invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AuditReport {
    /// Number of Black nodes on every root-to-leaf path, not counting the
    /// empty leaf.
    pub black_height: usize,
    /// Number of nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Number of nodes reachable from the root.
    pub node_count: usize,
}

/// Running state of one audit walk.
struct Audit<'a, K, O> {
    order: &'a O,
    previous: Option<&'a K>,
    node_count: usize,
    height: usize,
}

impl<K, V, O: StrictOrder<K>> RedBlackMap<K, V, O> {
    /// Checks every red-black invariant and returns the first violation.
    ///
    /// The rules checked are: the sentinel leaves are untouched, the root is
    /// Black, no Red node has a non-Black child, every path carries the same
    /// number of Black nodes, no DoubleBlack or NegativeBlack node remains,
    /// keys are strictly increasing in order, and the recorded length matches
    /// the number of nodes.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, ()> = (1..=3).map(|key| (key, ())).collect();
    /// let report = map.check_invariants().unwrap();
    /// assert_eq!(report.node_count, 3);
    /// assert_eq!(report.height, 2);
    /// ```
    pub fn check_invariants(&self) -> Result<AuditReport, InvariantViolation> {
        if !self.arena.sentinels_intact() {
            return Err(InvariantViolation::CorruptSentinel);
        }

        let root_color = self.arena.color(self.root);
        if self.root != NodeId::DOUBLE_BLACK_EMPTY && root_color != Color::Black {
            return Err(InvariantViolation::RootNotBlack { color: root_color });
        }

        let mut audit = Audit {
            order: &self.order,
            previous: None,
            node_count: 0,
            height: 0,
        };
        let black_height = self.audit_subtree(self.root, 0, &mut audit)?;

        if audit.node_count != self.length {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.length,
                counted: audit.node_count,
            });
        }

        Ok(AuditReport {
            black_height,
            height: audit.height,
            node_count: audit.node_count,
        })
    }

    /// Panics if [`check_invariants`](Self::check_invariants) finds a
    /// violation.
    ///
    /// # Panics
    ///
    /// Panics with the violation's message after logging it at `error`
    /// level.
    pub fn assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            tracing::error!(%violation, length = self.length, "red-black invariant violated");
            panic!("red-black invariant violated: {violation}");
        }
    }

    /// Returns the black height of the subtree at `node`.
    fn audit_subtree<'a>(
        &'a self,
        node: NodeId,
        depth: usize,
        audit: &mut Audit<'a, K, O>,
    ) -> Result<usize, InvariantViolation> {
        if node == NodeId::EMPTY {
            return Ok(0);
        }

        let color = self.arena.color(node);
        if color.is_transient() {
            return Err(InvariantViolation::TransientColor { color, depth });
        }

        let (left, right) = (self.arena.left(node), self.arena.right(node));
        if color == Color::Red {
            for child in [left, right] {
                let child_color = self.arena.color(child);
                if child_color != Color::Black {
                    return Err(InvariantViolation::NonBlackChildOfRed {
                        depth: depth + 1,
                        color: child_color,
                    });
                }
            }
        }

        let left_height = self.audit_subtree(left, depth + 1, audit)?;

        let key = self.arena.key(node);
        if let Some(previous) = audit.previous
            && !audit.order.less(previous, key)
        {
            return Err(InvariantViolation::KeysOutOfOrder {
                position: audit.node_count,
            });
        }
        audit.previous = Some(key);
        audit.node_count += 1;
        audit.height = audit.height.max(depth + 1);

        let right_height = self.audit_subtree(right, depth + 1, audit)?;

        if left_height != right_height {
            return Err(InvariantViolation::BlackHeightMismatch {
                expected: left_height,
                found: right_height,
            });
        }

        Ok(left_height + usize::from(color == Color::Black))
    }
}

// =============================================================================
// Preorder Diagnostics
// =============================================================================

/// One node of a [`RedBlackMap::preorder`] walk.
#[derive(Debug, PartialEq, Eq)]
pub struct PreorderEntry<'a, K, V> {
    /// Distance from the root, which is at depth 0.
    pub depth: usize,
    /// The node's key.
    pub key: &'a K,
    /// The node's value.
    pub value: &'a V,
    /// The node's color.
    pub color: Color,
}

impl<K, V, O> RedBlackMap<K, V, O> {
    /// Returns every node in preorder (node, left subtree, right subtree)
    /// together with its depth and color.
    ///
    /// Two maps holding the same entries can have different shapes; this is
    /// the view that tells them apart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{Color, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    ///
    /// let shape: Vec<_> = map
    ///     .preorder()
    ///     .into_iter()
    ///     .map(|entry| (entry.depth, *entry.key, entry.color))
    ///     .collect();
    /// assert_eq!(shape, vec![(0, 2, Color::Black), (1, 1, Color::Red)]);
    /// ```
    pub fn preorder(&self) -> Vec<PreorderEntry<'_, K, V>> {
        let mut entries = Vec::with_capacity(self.length);
        let mut stack = vec![(self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            if node == NodeId::EMPTY {
                continue;
            }
            let (key, value) = self.arena.entry(node);
            entries.push(PreorderEntry {
                depth,
                key,
                value,
                color: self.arena.color(node),
            });
            stack.push((self.arena.right(node), depth + 1));
            stack.push((self.arena.left(node), depth + 1));
        }
        entries
    }

    /// Renders [`preorder`](Self::preorder) one node per line, indented with
    /// one `:` per depth level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackMap;
    ///
    /// let map: RedBlackMap<i32, &str> = [(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    /// assert_eq!(
    ///     map.preorder_dump(),
    ///     " 2 => \"b\" Black\n: 1 => \"a\" Red\n: 3 => \"c\" Red\n"
    /// );
    /// ```
    pub fn preorder_dump(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        let mut dump = String::new();
        for entry in self.preorder() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                dump,
                "{} {:?} => {:?} {:?}",
                ":".repeat(entry.depth),
                entry.key,
                entry.value,
                entry.color
            );
        }
        tracing::trace!(nodes = self.length, "rendered preorder dump");
        dump
    }
}
