//! Rebalancing shared by insertion and deletion.
//!
//! Insertion only ever produces the red-red shapes below a Black node.
//! Deletion additionally produces DoubleBlack nodes (a black-height deficit
//! pushed up by [`Arena::bubble`]) and, one level below them,
//! NegativeBlack nodes. Both kinds of shape are resolved by the same
//! three-node rotation:
//!
//! ```text
//!        z            z          x          x
//!       / \          / \        / \        / \
//!      y   d        x   d      a   z      a   y
//!     / \          / \            / \        / \      =>       y
//!    x   c        a   y          y   d      b   z             / \
//!   / \              / \        / \            / \           x   z
//!  a   b            b   c      b   c          c   d         / \ / \
//!                                                          a  b c  d
//! ```

use super::arena::{Arena, NodeId};
use super::color::Color;

/// Three nodes in key order and the four subtrees hanging below them.
struct Rotation {
    x: NodeId,
    y: NodeId,
    z: NodeId,
    subtrees: [NodeId; 4],
}

impl<K, V> Arena<K, V> {
    /// Looks for a Red child with a Red child of its own below `node`.
    ///
    /// Shapes are tried in the order left-left, left-right, right-left,
    /// right-right.
    fn red_red_rotation(&self, node: NodeId) -> Option<Rotation> {
        let left = self.left(node);
        if self.color(left) == Color::Red {
            let outer = self.left(left);
            if self.color(outer) == Color::Red {
                return Some(Rotation {
                    x: outer,
                    y: left,
                    z: node,
                    subtrees: [
                        self.left(outer),
                        self.right(outer),
                        self.right(left),
                        self.right(node),
                    ],
                });
            }
            let inner = self.right(left);
            if self.color(inner) == Color::Red {
                return Some(Rotation {
                    x: left,
                    y: inner,
                    z: node,
                    subtrees: [
                        self.left(left),
                        self.left(inner),
                        self.right(inner),
                        self.right(node),
                    ],
                });
            }
        }

        let right = self.right(node);
        if self.color(right) == Color::Red {
            let inner = self.left(right);
            if self.color(inner) == Color::Red {
                return Some(Rotation {
                    x: node,
                    y: inner,
                    z: right,
                    subtrees: [
                        self.left(node),
                        self.left(inner),
                        self.right(inner),
                        self.right(right),
                    ],
                });
            }
            let outer = self.right(right);
            if self.color(outer) == Color::Red {
                return Some(Rotation {
                    x: node,
                    y: right,
                    z: outer,
                    subtrees: [
                        self.left(node),
                        self.left(right),
                        self.left(outer),
                        self.right(outer),
                    ],
                });
            }
        }

        None
    }

    /// Re-links a rotation as `y(x(a, b), z(c, d))` and returns `y`.
    fn rotate(&mut self, rotation: Rotation, top: Color) -> NodeId {
        let Rotation { x, y, z, subtrees } = rotation;
        let [a, b, c, d] = subtrees;
        self.set_children(x, a, b);
        self.set_children(z, c, d);
        self.set_children(y, x, z);
        self.paint(x, Color::Black);
        self.paint(y, top);
        self.paint(z, Color::Black);
        y
    }

    /// Restores the red-black shape at `node` after one of its subtrees
    /// changed, returning the new subtree root.
    ///
    /// Handles, in order:
    /// - a Black node over a red-red chain: rotate, root becomes Red;
    /// - a DoubleBlack node over a red-red chain: rotate, everything Black;
    /// - a DoubleBlack node over a NegativeBlack child (right, then left).
    ///
    /// Any other node is returned untouched.
    pub(crate) fn balance(&mut self, node: NodeId) -> NodeId {
        match self.color(node) {
            Color::Black => {
                if let Some(rotation) = self.red_red_rotation(node) {
                    return self.rotate(rotation, Color::Red);
                }
            }
            Color::DoubleBlack => {
                if let Some(rotation) = self.red_red_rotation(node) {
                    return self.rotate(rotation, Color::Black);
                }
                if let Some(root) = self.negative_black_right(node) {
                    return root;
                }
                if let Some(root) = self.negative_black_left(node) {
                    return root;
                }
            }
            Color::Red | Color::NegativeBlack => {}
        }
        node
    }

    /// `DB(a, x, NB(B(b, y, c), z, B d))` becomes `B(B(a, x, b), y, balance(B(c, z, R d)))`.
    fn negative_black_right(&mut self, node: NodeId) -> Option<NodeId> {
        let z = self.right(node);
        if self.color(z) != Color::NegativeBlack {
            return None;
        }
        let y = self.left(z);
        let d = self.right(z);
        if self.color(y) != Color::Black || self.color(d) != Color::Black {
            return None;
        }

        let x = node;
        let (a, b, c) = (self.left(x), self.left(y), self.right(y));
        self.set_children(x, a, b);
        self.paint(x, Color::Black);
        self.paint(d, Color::Red);
        self.set_children(z, c, d);
        self.paint(z, Color::Black);
        let right = self.balance(z);
        self.set_children(y, x, right);
        self.paint(y, Color::Black);
        Some(y)
    }

    /// `DB(NB(B a, x, B(b, y, c)), z, d)` becomes `B(balance(B(R a, x, b)), y, B(c, z, d))`.
    fn negative_black_left(&mut self, node: NodeId) -> Option<NodeId> {
        let x = self.left(node);
        if self.color(x) != Color::NegativeBlack {
            return None;
        }
        let a = self.left(x);
        let y = self.right(x);
        if self.color(a) != Color::Black || self.color(y) != Color::Black {
            return None;
        }

        let z = node;
        let (b, c, d) = (self.left(y), self.right(y), self.right(z));
        self.set_children(z, c, d);
        self.paint(z, Color::Black);
        self.paint(a, Color::Red);
        self.set_children(x, a, b);
        self.paint(x, Color::Black);
        let left = self.balance(x);
        self.set_children(y, left, z);
        self.paint(y, Color::Black);
        Some(y)
    }

    /// Pushes a DoubleBlack child's deficit up into `node`, then rebalances.
    pub(crate) fn bubble(&mut self, node: NodeId) -> NodeId {
        let (left, right) = (self.left(node), self.right(node));
        if self.color(left) == Color::DoubleBlack || self.color(right) == Color::DoubleBlack {
            self.paint(node, self.color(node).blacker());
            let left = self.redder(left);
            let right = self.redder(right);
            self.set_children(node, left, right);
        }
        self.balance(node)
    }

    /// One step redder. The double-black empty leaf turns back into the empty leaf.
    fn redder(&mut self, node: NodeId) -> NodeId {
        if node == NodeId::DOUBLE_BLACK_EMPTY {
            return NodeId::EMPTY;
        }
        self.paint(node, self.color(node).redder());
        node
    }
}
