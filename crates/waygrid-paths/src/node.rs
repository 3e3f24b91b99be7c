use std::collections::HashSet;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// A node of an A* search.
///
/// `parent` is an index into the [`ClosedList`] of the search that produced
/// the node; `None` marks the root (the start node).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode<C> {
    pub pos: C,
    pub parent: Option<usize>,
    /// Accumulated cost from the start.
    pub g: f32,
    /// Heuristic estimate to the nearest goal.
    pub h: f32,
}

impl<C> SearchNode<C> {
    /// A root node: no parent, zero cost.
    #[inline]
    pub fn root(pos: C) -> Self {
        Self {
            pos,
            parent: None,
            g: 0.0,
            h: 0.0,
        }
    }

    /// Total estimated cost `g + h`.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Nodes compare by position only.
impl<C: PartialEq> PartialEq for SearchNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C: Eq> Eq for SearchNode<C> {}

// ---------------------------------------------------------------------------
// ClosedList
// ---------------------------------------------------------------------------

/// Append-only arena of finalized nodes.
///
/// Indices returned by [`push`](ClosedList::push) stay valid until the next
/// [`clear`](ClosedList::clear), which is what makes parent indices usable as
/// back-references for path reconstruction.
#[derive(Debug, Clone)]
pub struct ClosedList<C> {
    nodes: Vec<SearchNode<C>>,
    members: HashSet<C>,
}

impl<C> Default for ClosedList<C> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<C: Copy + Eq + Hash> ClosedList<C> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.members.clear();
    }

    /// Append a finalized node and return its stable index.
    pub(crate) fn push(&mut self, node: SearchNode<C>) -> usize {
        self.members.insert(node.pos);
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// The node at `idx`, or `None` when `idx` is out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&SearchNode<C>> {
        self.nodes.get(idx)
    }

    /// The parent of `node`, or `None` for the root or a dangling index.
    #[inline]
    pub fn parent_of(&self, node: &SearchNode<C>) -> Option<&SearchNode<C>> {
        node.parent.and_then(|idx| self.get(idx))
    }

    /// Whether a node at `pos` has been finalized.
    #[inline]
    pub fn contains(&self, pos: &C) -> bool {
        self.members.contains(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finalized nodes in the order they were closed.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode<C>> {
        self.nodes.iter()
    }

    /// Positions from the node at `idx` back to the root, inclusive.
    pub fn trace(&self, idx: usize) -> Trace<'_, C> {
        Trace {
            list: self,
            next: Some(idx),
        }
    }
}

/// Iterator following parent links through a [`ClosedList`].
pub struct Trace<'a, C> {
    list: &'a ClosedList<C>,
    next: Option<usize>,
}

impl<C: Copy + Eq + Hash> Iterator for Trace<'_, C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        let node = self.list.get(self.next?)?;
        self.next = node.parent;
        Some(node.pos)
    }
}
