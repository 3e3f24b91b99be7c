//! **waygrid-core**: geometry and grid storage for the *waygrid* pathfinding
//! crates.
//!
//! This crate provides integer grid coordinates ([`Point`]), the eight unit
//! moves ([`Direction`]), world-space vectors ([`Vec2`]) and an owned
//! row-major [`Grid`].

pub mod geom;
pub mod grid;

pub use geom::{Direction, InvalidDirection, Point, Vec2};
pub use grid::{Grid, GridError, GridIter};
