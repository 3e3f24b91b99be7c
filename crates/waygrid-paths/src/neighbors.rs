use waygrid_core::Point;

use crate::node::{ClosedList, SearchNode};
use crate::traits::{Occupancy, SuccessorStrategy};

/// Plain 8-way expansion: every non-colliding immediate neighbour.
///
/// This is the reference behaviour [`JumpPoints`](crate::JumpPoints) prunes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllNeighbors;

impl SuccessorStrategy for AllNeighbors {
    fn successors<O: Occupancy + ?Sized>(
        &self,
        occupancy: &O,
        _closed: &ClosedList<Point>,
        node: &SearchNode<Point>,
        _goals: &[Point],
        out: &mut Vec<Point>,
    ) {
        out.extend(
            node.pos
                .neighbors_8()
                .into_iter()
                .filter(|&n| !occupancy.collides(n)),
        );
    }
}
