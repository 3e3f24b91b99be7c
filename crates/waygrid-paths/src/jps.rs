//! Jump Point Search (JPS) successor generation for uniform-cost 8-way grids.
//!
//! Instead of handing every neighbour to the search, JPS prunes the
//! directions that cannot start an optimal path through the current node and
//! then scans ("jumps") along each remaining direction until it reaches a
//! *jump point*: a goal, or a cell with a forced neighbour. Only jump points
//! enter the open list, yet the paths found cost the same as with full
//! 8-neighbour expansion.
//!
//! Diagonal moves are allowed past blocked corners, matching
//! [`AllNeighbors`](crate::AllNeighbors).

use waygrid_core::{Direction, Point};

use crate::node::{ClosedList, SearchNode};
use crate::traits::{Occupancy, SuccessorStrategy};

/// JPS successor strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpPoints;

impl SuccessorStrategy for JumpPoints {
    fn successors<O: Occupancy + ?Sized>(
        &self,
        occupancy: &O,
        closed: &ClosedList<Point>,
        node: &SearchNode<Point>,
        goals: &[Point],
        out: &mut Vec<Point>,
    ) {
        for dir in prune(occupancy, closed, node) {
            if let Some(jp) = jump(occupancy, node.pos, dir, goals) {
                out.push(jp);
            }
        }
    }
}

/// Directions worth scanning from `node`, given the direction it was
/// reached from.
fn prune<O: Occupancy + ?Sized>(
    occupancy: &O,
    closed: &ClosedList<Point>,
    node: &SearchNode<Point>,
) -> Vec<Direction> {
    let Some(parent_idx) = node.parent else {
        return Direction::ALL.to_vec();
    };
    let Some(parent) = closed.get(parent_idx) else {
        log::warn!("jps: parent index {parent_idx} of {} is not closed", node.pos);
        return Vec::new();
    };
    let Some(d) = Direction::between(parent.pos, node.pos) else {
        return Vec::new();
    };

    let p = node.pos;
    let blocked = |dx: i32, dy: i32| occupancy.collides(p.shift(dx, dy));
    let (dx, dy) = (d.dx(), d.dy());
    let mut dirs = Vec::with_capacity(5);

    if d.is_diagonal() {
        // Natural neighbours
        dirs.extend(d.vertical());
        dirs.extend(d.horizontal());
        dirs.push(d);
        // Forced neighbours
        if blocked(-dx, 0) {
            dirs.extend(Direction::new(-dx, dy));
        }
        if blocked(0, -dy) {
            dirs.extend(Direction::new(dx, -dy));
        }
    } else if dx == 0 {
        // Vertical
        dirs.push(d);
        if blocked(-1, 0) {
            dirs.extend(Direction::new(-1, dy));
        }
        if blocked(1, 0) {
            dirs.extend(Direction::new(1, dy));
        }
    } else {
        // Horizontal
        dirs.push(d);
        if blocked(0, -1) {
            dirs.extend(Direction::new(dx, -1));
        }
        if blocked(0, 1) {
            dirs.extend(Direction::new(dx, 1));
        }
    }
    dirs
}

/// Whether `p`, entered while moving along `dir`, has a forced neighbour.
fn has_forced_neighbor<O: Occupancy + ?Sized>(occupancy: &O, p: Point, dir: Direction) -> bool {
    let blocked = |dx: i32, dy: i32| occupancy.collides(p.shift(dx, dy));
    let (dx, dy) = (dir.dx(), dir.dy());
    if dir.is_diagonal() {
        (blocked(-dx, 0) && !blocked(-dx, dy)) || (blocked(0, -dy) && !blocked(dx, -dy))
    } else if dx == 0 {
        (blocked(-1, 0) && !blocked(-1, dy)) || (blocked(1, 0) && !blocked(1, dy))
    } else {
        (blocked(0, -1) && !blocked(dx, -1)) || (blocked(0, 1) && !blocked(dx, 1))
    }
}

/// Scan from `from` along `dir` and return the first jump point, or `None`
/// if the scan runs into a colliding cell.
fn jump<O: Occupancy + ?Sized>(
    occupancy: &O,
    from: Point,
    dir: Direction,
    goals: &[Point],
) -> Option<Point> {
    let mut cur = from;
    loop {
        let next = cur + dir;
        if occupancy.collides(next) {
            return None;
        }
        if goals.contains(&next) || has_forced_neighbor(occupancy, next, dir) {
            return Some(next);
        }
        if dir.is_diagonal() {
            let along = |axis: Option<Direction>| {
                axis.is_some_and(|a| jump(occupancy, next, a, goals).is_some())
            };
            if along(dir.horizontal()) || along(dir.vertical()) {
                return Some(next);
            }
        }
        cur = next;
    }
}

/// Expand a jump-point path into single grid steps, keeping its order.
///
/// Consecutive points of a JPS path always lie on a straight or diagonal
/// line; other segments are walked diagonally first, then straight.
pub fn expand_jump_path(path: &[Point]) -> Vec<Point> {
    let Some(&first) = path.first() else {
        return Vec::new();
    };
    let mut out = vec![first];
    for w in path.windows(2) {
        let mut cur = w[0];
        while let Some(d) = Direction::between(cur, w[1]) {
            cur = cur + d;
            out.push(cur);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AStar, AllNeighbors, GridMap, GridMapConfig, OccupancyGrid, SearchMap};
    use waygrid_core::Vec2;

    fn grid(layout: &str) -> OccupancyGrid {
        OccupancyGrid::parse(layout).unwrap()
    }

    /// Closed list holding `parent` (index 0) and a node at `pos` whose
    /// parent is index 0.
    fn arrived(parent: Point, pos: Point) -> (ClosedList<Point>, SearchNode<Point>) {
        let mut closed = ClosedList::default();
        let pi = closed.push(SearchNode::root(parent));
        let node = SearchNode {
            pos,
            parent: Some(pi),
            g: 1.0,
            h: 0.0,
        };
        (closed, node)
    }

    #[test]
    fn root_scans_all_directions() {
        let g = grid("...\n...\n...");
        let dirs = prune(&g, &ClosedList::default(), &SearchNode::root(Point::new(1, 1)));
        assert_eq!(dirs, Direction::ALL.to_vec());
    }

    #[test]
    fn straight_arrival_keeps_only_forward_on_open_ground() {
        let g = grid(".....\n.....\n.....");
        let (closed, node) = arrived(Point::new(1, 1), Point::new(2, 1));
        assert_eq!(prune(&g, &closed, &node), vec![Direction::E]);
    }

    #[test]
    fn straight_arrival_adds_forced_diagonals() {
        // Moving east along row 1 with walls above and below (2, 1).
        let g = grid(
            "..#..\n\
             .....\n\
             ..#..",
        );
        let (closed, node) = arrived(Point::new(1, 1), Point::new(2, 1));
        let dirs = prune(&g, &closed, &node);
        assert_eq!(dirs, vec![Direction::E, Direction::NE, Direction::SE]);
    }

    #[test]
    fn vertical_arrival_adds_forced_diagonals() {
        // Moving south down column 1; wall to the west of (1, 1).
        let g = grid(
            "...\n\
             #..\n\
             ...",
        );
        let (closed, node) = arrived(Point::new(1, 0), Point::new(1, 1));
        assert_eq!(prune(&g, &closed, &node), vec![Direction::S, Direction::SW]);
    }

    #[test]
    fn forced_diagonal_survives_blocked_forward_cell() {
        // Arriving east at (1, 1): (2, 1) ahead and (1, 0) above are walls,
        // so the only way on is the diagonal squeeze to (2, 0).
        let g = grid(
            ".#.\n\
             ..#\n\
             ...",
        );
        let (closed, node) = arrived(Point::new(0, 1), Point::new(1, 1));
        assert_eq!(prune(&g, &closed, &node), vec![Direction::E, Direction::NE]);
        assert_eq!(
            jump(&g, Point::new(1, 1), Direction::NE, &[Point::new(2, 0)]),
            Some(Point::new(2, 0))
        );
    }

    #[test]
    fn corner_squeeze_costs_the_same_as_full_expansion() {
        let layout = ".#.\n..#\n...";
        let start = Point::new(0, 1);
        let goal = Point::new(2, 0);
        let jps = GridMap::new(grid(layout), Vec2::new(3.0, 3.0), GridMapConfig::exact()).unwrap();
        let full = jps.clone().with_strategy(AllNeighbors);
        let mut astar = AStar::new();

        let mut jps_path = Vec::new();
        assert_eq!(astar.find_path(start, &[goal], &jps, &mut jps_path), Ok(true));
        assert_eq!(jps_path, vec![goal, Point::new(1, 1), start]);
        let mut full_path = Vec::new();
        assert_eq!(astar.find_path(start, &[goal], &full, &mut full_path), Ok(true));

        let jps_cost: f32 = jps_path
            .windows(2)
            .map(|w| jps.movement_cost(w[1], w[0]))
            .sum();
        let full_cost: f32 = full_path
            .windows(2)
            .map(|w| full.movement_cost(w[1], w[0]))
            .sum();
        assert_eq!(jps_cost, 2.5);
        assert_eq!(jps_cost, full_cost);
    }

    #[test]
    fn diagonal_arrival_natural_and_forced() {
        let g = grid("...\n...\n...");
        let (closed, node) = arrived(Point::new(0, 0), Point::new(1, 1));
        assert_eq!(
            prune(&g, &closed, &node),
            vec![Direction::S, Direction::E, Direction::SE]
        );

        // Arriving south-east at (1, 1) with (0, 1) blocked forces south-west.
        let g = grid(
            "...\n\
             #..\n\
             ...",
        );
        let dirs = prune(&g, &closed, &node);
        assert_eq!(dirs.len(), 4);
        assert!(dirs.contains(&Direction::SW));
    }

    #[test]
    fn dangling_parent_yields_nothing() {
        let g = grid("...\n...\n...");
        let node = SearchNode {
            pos: Point::new(1, 1),
            parent: Some(3),
            g: 0.0,
            h: 0.0,
        };
        assert!(prune(&g, &ClosedList::default(), &node).is_empty());
    }

    #[test]
    fn straight_jump_runs_to_goal_or_wall() {
        let g = grid("......\n......\n......");
        let goal = [Point::new(4, 1)];
        assert_eq!(
            jump(&g, Point::new(0, 1), Direction::E, &goal),
            Some(Point::new(4, 1))
        );
        assert_eq!(jump(&g, Point::new(0, 1), Direction::W, &goal), None);
        assert_eq!(jump(&g, Point::new(0, 0), Direction::E, &goal), None);
    }

    #[test]
    fn straight_jump_stops_at_forced_neighbor() {
        // Scanning east on row 1: the wall above ends at (2, 0), which makes
        // (3, 0) a forced neighbour of (2, 1).
        let g = grid(
            ".##...\n\
             ......\n\
             ......",
        );
        assert_eq!(
            jump(&g, Point::new(0, 1), Direction::E, &[Point::new(5, 2)]),
            Some(Point::new(2, 1))
        );
    }

    #[test]
    fn diagonal_jump_stops_when_sub_scan_finds_goal() {
        let g = grid(".....\n.....\n.....\n.....\n.....");
        // Goal on row 2, reachable by an eastward scan from (2, 2).
        let goal = [Point::new(4, 2)];
        assert_eq!(
            jump(&g, Point::new(0, 0), Direction::SE, &goal),
            Some(Point::new(2, 2))
        );
    }

    #[test]
    fn jps_successors_on_open_grid() {
        let g = grid(".....\n.....\n.....\n.....\n.....");
        let mut out = Vec::new();
        JumpPoints.successors(
            &g,
            &ClosedList::default(),
            &SearchNode::root(Point::new(0, 0)),
            &[Point::new(4, 4)],
            &mut out,
        );
        assert_eq!(out, vec![Point::new(4, 4)]);
    }

    #[test]
    fn expand_fills_in_steps() {
        let path = [Point::new(0, 0), Point::new(3, 3), Point::new(3, 5)];
        let steps = expand_jump_path(&path);
        assert_eq!(
            steps,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
                Point::new(3, 4),
                Point::new(3, 5),
            ]
        );
        assert!(expand_jump_path(&[]).is_empty());
        assert_eq!(expand_jump_path(&[Point::new(2, 2)]), vec![Point::new(2, 2)]);
    }
}
