use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::node::SearchNode;

/// Binary min-heap of frontier nodes ordered by `f = g + h`, with a position
/// index so an existing entry can be found and relaxed in place.
///
/// `std::collections::BinaryHeap` cannot lower the key of an entry, so the
/// heap is kept by hand: `slots[pos]` always holds the heap slot of the node
/// at `pos`.
#[derive(Debug, Clone)]
pub(crate) struct OpenSet<C> {
    heap: Vec<SearchNode<C>>,
    slots: HashMap<C, usize>,
}

impl<C> Default for OpenSet<C> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

/// Lower `f` first; among equal `f`, the node nearer the goal.
#[inline]
fn precedes<C>(a: &SearchNode<C>, b: &SearchNode<C>) -> bool {
    match a.f().total_cmp(&b.f()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.h < b.h,
    }
}

impl<C: Copy + Eq + Hash> OpenSet<C> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The open entry at `pos`, if any.
    #[inline]
    pub(crate) fn get(&self, pos: &C) -> Option<&SearchNode<C>> {
        self.slots.get(pos).map(|&i| &self.heap[i])
    }

    /// Insert a node whose position is not yet open.
    pub(crate) fn push(&mut self, node: SearchNode<C>) {
        debug_assert!(!self.slots.contains_key(&node.pos));
        let i = self.heap.len();
        self.slots.insert(node.pos, i);
        self.heap.push(node);
        self.sift_up(i);
    }

    /// Remove and return the node with the lowest total cost.
    pub(crate) fn pop(&mut self) -> Option<SearchNode<C>> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let node = self.heap.pop()?;
        self.slots.remove(&node.pos);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(node)
    }

    /// Overwrite parent and `g` of the open entry at `pos` when `g` is
    /// strictly lower than the stored cost, then restore heap order.
    ///
    /// Returns `true` if the entry was updated.
    pub(crate) fn decrease(&mut self, pos: &C, parent: usize, g: f32) -> bool {
        let Some(&i) = self.slots.get(pos) else {
            return false;
        };
        let node = &mut self.heap[i];
        if g >= node.g {
            return false;
        }
        node.g = g;
        node.parent = Some(parent);
        self.sift_up(i);
        true
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].pos, a);
        self.slots.insert(self.heap[b].pos, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !precedes(&self.heap[i], &self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && precedes(&self.heap[left], &self.heap[best]) {
                best = left;
            }
            if right < len && precedes(&self.heap[right], &self.heap[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
