use std::hash::Hash;

use crate::error::SearchError;
use crate::node::{ClosedList, SearchNode};
use crate::open::OpenSet;
use crate::traits::SearchMap;

/// Reusable A* search engine over any [`SearchMap`].
///
/// An `AStar` owns its open list, closed list and successor buffer. They are
/// reset at the start of every search and reused, so repeated queries incur
/// no allocations after warm-up. Searches take `&mut self`; run concurrent
/// searches on separate instances.
#[derive(Debug, Clone)]
pub struct AStar<C> {
    open: OpenSet<C>,
    closed: ClosedList<C>,
    succ: Vec<C>,
}

impl<C: Copy + Eq + Hash> Default for AStar<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy + Eq + Hash> AStar<C> {
    pub fn new() -> Self {
        Self {
            open: OpenSet::default(),
            closed: ClosedList::default(),
            succ: Vec::with_capacity(8),
        }
    }

    /// Create an engine with list storage reserved for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: OpenSet::with_capacity(capacity),
            closed: ClosedList::with_capacity(capacity),
            succ: Vec::with_capacity(8),
        }
    }

    /// Closed list of the most recent search.
    ///
    /// Index `i` of the list is the parent id handed to the children of the
    /// `i`-th expanded node. The list is cleared by the next search.
    #[inline]
    pub fn closed(&self) -> &ClosedList<C> {
        &self.closed
    }

    /// Search from `start` to the nearest reachable cell of `goals`.
    ///
    /// On success the path is appended to `out` in **goal → start** order
    /// (both endpoints included) and `Ok(true)` is returned. `out` is never
    /// cleared. If the frontier is exhausted `Ok(false)` is returned and
    /// `out` is left untouched.
    pub fn find_path<M>(
        &mut self,
        start: C,
        goals: &[C],
        map: &M,
        out: &mut Vec<C>,
    ) -> Result<bool, SearchError>
    where
        M: SearchMap<Cell = C> + ?Sized,
    {
        if goals.is_empty() {
            return Err(SearchError::EmptyGoals);
        }

        self.open.clear();
        self.closed.clear();
        self.open.push(SearchNode::root(start));

        let mut succ = std::mem::take(&mut self.succ);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };

            let ci = self.closed.push(current);
            if goals.contains(&current.pos) {
                break 'search Some(ci);
            }

            succ.clear();
            map.successors(&self.closed, &current, start, goals, &mut succ);

            for &cand in succ.iter() {
                if map.collides(cand) || self.closed.contains(&cand) {
                    continue;
                }
                let g = current.g + map.movement_cost(current.pos, cand);

                if self.open.get(&cand).is_some() {
                    if self.open.decrease(&cand, ci, g) {
                        log::trace!("astar: relaxed open entry, g = {g}");
                    }
                    continue;
                }

                self.open.push(SearchNode {
                    pos: cand,
                    parent: Some(ci),
                    g,
                    h: map.heuristic(cand, start, goals),
                });
            }
        };

        self.succ = succ;

        match found {
            Some(goal_idx) => {
                let before = out.len();
                out.extend(self.closed.trace(goal_idx));
                log::debug!(
                    "astar: path of {} cells found after {} expansions ({} still open)",
                    out.len() - before,
                    self.closed.len(),
                    self.open.len()
                );
                Ok(true)
            }
            None => {
                log::debug!(
                    "astar: frontier exhausted after {} expansions",
                    self.closed.len()
                );
                Ok(false)
            }
        }
    }

    /// Single-goal form of [`find_path`](AStar::find_path).
    pub fn find_path_to<M>(
        &mut self,
        start: C,
        goal: C,
        map: &M,
        out: &mut Vec<C>,
    ) -> Result<bool, SearchError>
    where
        M: SearchMap<Cell = C> + ?Sized,
    {
        self.find_path(start, std::slice::from_ref(&goal), map, out)
    }

    /// Compute a path from `start` to `goal` in **start → goal** order.
    ///
    /// Returns `None` if the goal is unreachable.
    pub fn path<M>(&mut self, start: C, goal: C, map: &M) -> Option<Vec<C>>
    where
        M: SearchMap<Cell = C> + ?Sized,
    {
        let mut path = Vec::new();
        match self.find_path_to(start, goal, map, &mut path) {
            Ok(true) => {
                path.reverse();
                Some(path)
            }
            _ => None,
        }
    }
}
