use std::hash::Hash;

use waygrid_core::Point;

use crate::node::{ClosedList, SearchNode};

/// The capability an [`AStar`](crate::AStar) search runs against.
pub trait SearchMap {
    /// Position type. Equality is positional only.
    type Cell: Copy + Eq + Hash;

    /// Whether `cell` cannot be entered.
    fn collides(&self, cell: Self::Cell) -> bool;

    /// Estimated cost from `cell` to the nearest of `goals`. `reference` is
    /// the search start, available to tie-breaking schemes.
    fn heuristic(&self, cell: Self::Cell, reference: Self::Cell, goals: &[Self::Cell]) -> f32;

    /// Cost of moving from `from` to the successor `to`. Must be > 0.
    fn movement_cost(&self, from: Self::Cell, to: Self::Cell) -> f32;

    /// Append the successors of `node` into `out`. The caller clears `out`
    /// before calling. `closed` is the closed list of the running search, so
    /// `node.parent` can be resolved.
    fn successors(
        &self,
        closed: &ClosedList<Self::Cell>,
        node: &SearchNode<Self::Cell>,
        start: Self::Cell,
        goals: &[Self::Cell],
        out: &mut Vec<Self::Cell>,
    );
}

/// Occupancy query over a 2D grid.
///
/// Implementations must report every cell outside their finite region as
/// colliding; jump scans rely on that to terminate.
pub trait Occupancy {
    fn collides(&self, p: Point) -> bool;
}

impl<O: Occupancy + ?Sized> Occupancy for &O {
    #[inline]
    fn collides(&self, p: Point) -> bool {
        (**self).collides(p)
    }
}

/// Successor enumeration for grid maps, composed into
/// [`GridMap`](crate::GridMap).
pub trait SuccessorStrategy {
    fn successors<O: Occupancy + ?Sized>(
        &self,
        occupancy: &O,
        closed: &ClosedList<Point>,
        node: &SearchNode<Point>,
        goals: &[Point],
        out: &mut Vec<Point>,
    );
}
