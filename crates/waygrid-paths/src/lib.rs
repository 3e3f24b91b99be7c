//! Pathfinding on grids and arbitrary graphs.
//!
//! This crate provides:
//!
//! - a reusable **A\*** engine ([`AStar`]) generic over the cell type, driven
//!   by any [`SearchMap`],
//! - **Jump Point Search** successor generation ([`JumpPoints`]) for
//!   uniform-cost 8-directional grids, with plain 8-neighbour expansion
//!   ([`AllNeighbors`]) as the reference it is equivalent to,
//! - a grid adapter ([`GridMap`]) that answers the engine's queries from an
//!   [`OccupancyGrid`] and converts between world and grid coordinates.
//!
//! An [`AStar`] owns its open and closed lists and reuses them, so repeated
//! queries incur no allocations after warm-up.
//!
//! ```
//! use waygrid_core::{Point, Vec2};
//! use waygrid_paths::{AStar, GridMap, GridMapConfig, OccupancyGrid};
//!
//! let grid = OccupancyGrid::parse(
//!     "....\n\
//!      .##.\n\
//!      ....",
//! )
//! .unwrap();
//! let map = GridMap::new(grid, Vec2::new(4.0, 3.0), GridMapConfig::default()).unwrap();
//! let mut astar = AStar::new();
//! let mut path = Vec::new();
//! assert_eq!(
//!     astar.find_path(Point::new(0, 1), &[Point::new(3, 1)], &map, &mut path),
//!     Ok(true)
//! );
//! // Goal first, start last.
//! assert_eq!(path.first(), Some(&Point::new(3, 1)));
//! assert_eq!(path.last(), Some(&Point::new(0, 1)));
//! ```
//!
//! # Traits
//!
//! | Trait | Role |
//! |---|---|
//! | [`SearchMap`] | everything [`AStar`] asks of a map |
//! | [`Occupancy`] | walkability queries used by successor strategies |
//! | [`SuccessorStrategy`] | successor enumeration composed into [`GridMap`] |

mod astar;
mod config;
mod distance;
mod error;
mod gridmap;
mod jps;
mod neighbors;
mod node;
mod open;
mod traits;

pub use astar::AStar;
pub use config::{CostModel, GridMapConfig, Metric, TieBreak};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, chebyshev, manhattan, octile};
pub use error::{GridMapError, SearchError};
pub use gridmap::{CellKind, GridCell, GridMap, OccupancyGrid};
pub use jps::{JumpPoints, expand_jump_path};
pub use neighbors::AllNeighbors;
pub use node::{ClosedList, SearchNode, Trace};
pub use traits::{Occupancy, SearchMap, SuccessorStrategy};
