//! Node storage.
//!
//! Every map owns one [`Arena`]. Nodes are addressed by [`NodeId`] handles
//! and the two sentinels occupy the first two slots, so "is this the empty
//! leaf" is a handle comparison rather than a value comparison.

use super::color::Color;

// =============================================================================
// Node Handles
// =============================================================================

/// A handle to a slot of an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The empty leaf: Black, both children point at itself.
    pub(crate) const EMPTY: Self = Self(0);

    /// The double-black empty leaf: DoubleBlack, both children are [`Self::EMPTY`].
    /// Marks the spot where a Black leaf was removed.
    pub(crate) const DOUBLE_BLACK_EMPTY: Self = Self(1);

    #[inline]
    pub(crate) const fn is_sentinel(self) -> bool {
        self.0 <= Self::DOUBLE_BLACK_EMPTY.0
    }
}

// =============================================================================
// Node Definition
// =============================================================================

#[derive(Clone)]
struct Node<K, V> {
    color: Color,
    left: NodeId,
    right: NodeId,
    /// `None` for the sentinels and for vacant slots.
    entry: Option<(K, V)>,
}

impl<K, V> Node<K, V> {
    const fn sentinel(color: Color) -> Self {
        Self {
            color,
            left: NodeId::EMPTY,
            right: NodeId::EMPTY,
            entry: None,
        }
    }
}

// =============================================================================
// Arena Definition
// =============================================================================

/// Slot storage for the nodes of one tree.
///
/// Released slots are kept on a vacancy list and handed out again by
/// [`allocate`](Self::allocate).
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    nodes: Vec<Node<K, V>>,
    vacant: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    /// Creates an arena holding only the two sentinels.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![
                Node::sentinel(Color::Black),
                Node::sentinel(Color::DoubleBlack),
            ],
            vacant: Vec::new(),
        }
    }

    /// Drops every entry and returns to the freshly constructed state.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(2);
        self.vacant.clear();
    }

    /// Stores a new Red node whose children are both the empty leaf.
    pub(crate) fn allocate(&mut self, key: K, value: V) -> NodeId {
        let node = Node {
            color: Color::Red,
            left: NodeId::EMPTY,
            right: NodeId::EMPTY,
            entry: Some((key, value)),
        };
        if let Some(id) = self.vacant.pop() {
            self.nodes[id.0] = node;
            id
        } else {
            self.nodes.push(node);
            NodeId(self.nodes.len() - 1)
        }
    }

    /// Takes the entry out of `id` and recycles the slot.
    pub(crate) fn release(&mut self, id: NodeId) -> (K, V) {
        assert!(!id.is_sentinel(), "sentinel {id:?} cannot be released");
        let node = &mut self.nodes[id.0];
        let entry = node
            .entry
            .take()
            .unwrap_or_else(|| unreachable!("slot {id:?} released twice"));
        node.left = NodeId::EMPTY;
        node.right = NodeId::EMPTY;
        self.vacant.push(id);
        entry
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.nodes[id.0].color
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].right
    }

    /// Recolors a node. The sentinels are never recolored.
    #[inline]
    pub(crate) fn paint(&mut self, id: NodeId, color: Color) {
        assert!(!id.is_sentinel(), "sentinel {id:?} cannot be recolored");
        self.nodes[id.0].color = color;
    }

    #[inline]
    pub(crate) fn set_left(&mut self, id: NodeId, child: NodeId) {
        assert!(!id.is_sentinel(), "sentinel {id:?} cannot be re-linked");
        self.nodes[id.0].left = child;
    }

    #[inline]
    pub(crate) fn set_right(&mut self, id: NodeId, child: NodeId) {
        assert!(!id.is_sentinel(), "sentinel {id:?} cannot be re-linked");
        self.nodes[id.0].right = child;
    }

    #[inline]
    pub(crate) fn set_children(&mut self, id: NodeId, left: NodeId, right: NodeId) {
        self.set_left(id, left);
        self.set_right(id, right);
    }

    #[inline]
    pub(crate) fn entry(&self, id: NodeId) -> (&K, &V) {
        match &self.nodes[id.0].entry {
            Some((key, value)) => (key, value),
            None => unreachable!("slot {id:?} holds no entry"),
        }
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        self.entry(id).0
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut V {
        match &mut self.nodes[id.0].entry {
            Some((_, value)) => value,
            None => unreachable!("slot {id:?} holds no entry"),
        }
    }

    /// Swaps the entry stored at `id` for `entry`, returning the old one.
    pub(crate) fn replace_entry(&mut self, id: NodeId, entry: (K, V)) -> (K, V) {
        match self.nodes[id.0].entry.replace(entry) {
            Some(previous) => previous,
            None => unreachable!("slot {id:?} holds no entry"),
        }
    }

    /// Checks that both sentinels still look the way [`new`](Self::new) built them.
    pub(crate) fn sentinels_intact(&self) -> bool {
        let empty = &self.nodes[NodeId::EMPTY.0];
        let double_black = &self.nodes[NodeId::DOUBLE_BLACK_EMPTY.0];
        empty.color == Color::Black
            && empty.left == NodeId::EMPTY
            && empty.right == NodeId::EMPTY
            && empty.entry.is_none()
            && double_black.color == Color::DoubleBlack
            && double_black.left == NodeId::EMPTY
            && double_black.right == NodeId::EMPTY
            && double_black.entry.is_none()
    }

    /// Handles of the subtree rooted at `root`, in key order.
    pub(crate) fn in_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut stack = Vec::new();
        let mut node = root;
        while node != NodeId::EMPTY || !stack.is_empty() {
            while node != NodeId::EMPTY {
                stack.push(node);
                node = self.left(node);
            }
            if let Some(top) = stack.pop() {
                ids.push(top);
                node = self.right(top);
            }
        }
        ids
    }

    /// Mutable references to the values at `ids`, in the order given.
    pub(crate) fn values_mut_at(&mut self, ids: &[NodeId]) -> Vec<&mut V> {
        let mut slots: Vec<Option<&mut V>> = self
            .nodes
            .iter_mut()
            .map(|node| node.entry.as_mut().map(|(_, value)| value))
            .collect();
        ids.iter().filter_map(|id| slots[id.0].take()).collect()
    }

    /// Consumes the arena, returning the entries at `ids` in the order given.
    pub(crate) fn into_entries_at(self, ids: &[NodeId]) -> Vec<(K, V)> {
        let mut slots: Vec<Option<(K, V)>> =
            self.nodes.into_iter().map(|node| node.entry).collect();
        ids.iter().filter_map(|id| slots[id.0].take()).collect()
    }

    /// Recolors a slot without the sentinel guard, so tests can corrupt one.
    #[cfg(test)]
    pub(crate) fn paint_unchecked(&mut self, id: NodeId, color: Color) {
        self.nodes[id.0].color = color;
    }

    /// Number of slots currently holding an entry.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.nodes.len() - 2 - self.vacant.len()
    }
}
