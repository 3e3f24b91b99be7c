//! Grid-backed [`SearchMap`]: occupancy storage, world/grid coordinate
//! conversion and the cost model used by grid searches.

use std::fmt;

use waygrid_core::{Grid, Point, Vec2};

use crate::config::{CostModel, GridMapConfig, Metric, TieBreak};
use crate::distance::{DIAGONAL_COST, STRAIGHT_COST, cross_deviation, manhattan, octile};
use crate::error::GridMapError;
use crate::jps::JumpPoints;
use crate::node::{ClosedList, SearchNode};
use crate::traits::{Occupancy, SearchMap, SuccessorStrategy};

/// Whether a cell can be walked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Blocked,
}

impl CellKind {
    /// Layout character of an [`Empty`](CellKind::Empty) cell.
    pub const EMPTY_RUNE: char = '.';
    /// Layout character of a [`Blocked`](CellKind::Blocked) cell.
    pub const BLOCKED_RUNE: char = '#';

    pub fn from_rune(ch: char) -> Option<Self> {
        match ch {
            Self::EMPTY_RUNE => Some(Self::Empty),
            Self::BLOCKED_RUNE => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn rune(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_RUNE,
            Self::Blocked => Self::BLOCKED_RUNE,
        }
    }
}

/// One cell of an [`OccupancyGrid`].
///
/// `threat` is free for callers to annotate cells with; searches ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub kind: CellKind,
    pub threat: f32,
}

impl GridCell {
    pub const EMPTY: Self = Self::new(CellKind::Empty);
    pub const BLOCKED: Self = Self::new(CellKind::Blocked);

    pub const fn new(kind: CellKind) -> Self {
        Self { kind, threat: 0.0 }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.kind == CellKind::Blocked
    }
}

/// Row-major walkability grid spanning `[0, cols) × [0, rows)`.
///
/// Everything outside the grid collides, as if the grid were surrounded by
/// a wall.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    cells: Grid<GridCell>,
}

impl OccupancyGrid {
    /// An all-empty grid. Negative sizes are clamped to zero.
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            cells: Grid::new(cols, rows),
        }
    }

    /// Build a grid from a row-major cell buffer of exactly `cols * rows`
    /// cells.
    pub fn from_cells(cells: Vec<GridCell>, cols: i32, rows: i32) -> Result<Self, GridMapError> {
        let cells = Grid::from_vec(cells, cols, rows)?;
        if cells.is_empty() {
            return Err(GridMapError::EmptyGrid);
        }
        Ok(Self { cells })
    }

    /// Parse an ASCII layout: one line per row, `.` for empty and `#` for
    /// blocked cells.
    ///
    /// Leading and trailing whitespace of the whole layout is ignored; every
    /// line must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridMapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridMapError::EmptyGrid);
        }
        let mut cols = None;
        let mut rows = 0;
        let mut cells = Vec::with_capacity(s.len());
        for (y, line) in s.lines().enumerate() {
            let mut width = 0;
            for (x, ch) in line.chars().enumerate() {
                let kind = CellKind::from_rune(ch).ok_or(GridMapError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(GridCell::new(kind));
                width += 1;
            }
            if *cols.get_or_insert(width) != width {
                return Err(GridMapError::InconsistentSize(s.to_string()));
            }
            rows += 1;
        }
        Self::from_cells(cells, cols.unwrap_or(0), rows)
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cells.width()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.cells.height()
    }

    /// Underlying cell storage.
    pub fn grid(&self) -> &Grid<GridCell> {
        &self.cells
    }

    /// Cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&GridCell> {
        self.cells.get(p)
    }

    /// Replace the cell at `p`. Returns `false` outside the grid.
    pub fn set(&mut self, p: Point, cell: GridCell) -> bool {
        self.cells.set(p, cell)
    }

    /// Change the kind of the cell at `p`, keeping its threat. Returns
    /// `false` outside the grid.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) -> bool {
        match self.cells.get_mut(p) {
            Some(c) => {
                c.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(GridCell::new(kind));
    }

    /// Whether `p` is inside the grid and blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).is_some_and(GridCell::is_blocked)
    }

    /// Whether `p` cannot be entered: blocked, or outside the grid.
    #[inline]
    pub fn collides(&self, p: Point) -> bool {
        self.at(p).is_none_or(GridCell::is_blocked)
    }
}

impl Occupancy for OccupancyGrid {
    #[inline]
    fn collides(&self, p: Point) -> bool {
        OccupancyGrid::collides(self, p)
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, c) in self.cells.iter() {
            if p.x == 0 && p.y > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", c.kind.rune())?;
        }
        Ok(())
    }
}

/// A searchable grid laid over a rectangle of world space.
///
/// The world rectangle has extents `dimension` and is centered on the
/// origin; cell `(0, 0)` sits at its minimum corner. Successors are
/// generated by the strategy `S`.
#[derive(Debug, Clone)]
pub struct GridMap<S = JumpPoints> {
    occupancy: OccupancyGrid,
    dimension: Vec2,
    tile_size: Vec2,
    half_extent: Vec2,
    config: GridMapConfig,
    strategy: S,
}

impl GridMap<JumpPoints> {
    /// Create a map searched with [`JumpPoints`].
    ///
    /// Fails if the grid has no cells or `dimension` is not finite and
    /// strictly positive on both axes.
    pub fn new(
        occupancy: OccupancyGrid,
        dimension: Vec2,
        config: GridMapConfig,
    ) -> Result<Self, GridMapError> {
        if occupancy.grid().is_empty() {
            return Err(GridMapError::EmptyGrid);
        }
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(dimension.x) || !valid(dimension.y) {
            return Err(GridMapError::InvalidDimension(dimension));
        }
        let tile_size = Vec2::new(
            dimension.x / occupancy.cols() as f32,
            dimension.y / occupancy.rows() as f32,
        );
        log::debug!(
            "grid map: {}x{} cells over {dimension}, tile {tile_size}",
            occupancy.cols(),
            occupancy.rows()
        );
        Ok(Self {
            occupancy,
            dimension,
            tile_size,
            half_extent: dimension * 0.5,
            config,
            strategy: JumpPoints,
        })
    }
}

impl<S> GridMap<S> {
    /// Swap the successor strategy, keeping everything else.
    pub fn with_strategy<T: SuccessorStrategy>(self, strategy: T) -> GridMap<T> {
        GridMap {
            occupancy: self.occupancy,
            dimension: self.dimension,
            tile_size: self.tile_size,
            half_extent: self.half_extent,
            config: self.config,
            strategy,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.occupancy.cols()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.occupancy.rows()
    }

    /// World extents covered by the grid.
    pub fn dimension(&self) -> Vec2 {
        self.dimension
    }

    /// World extents of a single cell.
    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Mutable occupancy. The grid size cannot change through it.
    pub fn occupancy_mut(&mut self) -> &mut OccupancyGrid {
        &mut self.occupancy
    }

    pub fn config(&self) -> &GridMapConfig {
        &self.config
    }

    pub fn tie_break(&self) -> TieBreak {
        self.config.tie_break
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.config.tie_break = tie_break;
    }

    /// Cell containing the world position `pos`.
    ///
    /// `pos` is shifted by half the world extents and floored, so the cell is
    /// counted from the minimum corner of the centered rectangle. Callers used
    /// to plain truncation of `pos / tile_size` (a frame anchored at the
    /// origin) get different cells: on a 10×10 grid over 100×100, `(1, 2)`
    /// maps to `(5, 5)` here, not `(0, 0)`.
    ///
    /// Positions outside the world rectangle map to cells outside the grid,
    /// which always collide. Far-off positions saturate at the `i32` range.
    pub fn world_to_cell(&self, pos: Vec2) -> Point {
        let local = pos + self.half_extent;
        Point::new(
            (local.x / self.tile_size.x).floor() as i32,
            (local.y / self.tile_size.y).floor() as i32,
        )
    }

    /// World position of the center of `cell`.
    pub fn cell_to_world(&self, cell: Point) -> Vec2 {
        Vec2::new(
            (cell.x as f32 + 0.5) * self.tile_size.x,
            (cell.y as f32 + 0.5) * self.tile_size.y,
        ) - self.half_extent
    }

    /// Convert a path as produced by [`AStar::find_path`](crate::AStar::find_path)
    /// (goal first) into world-space waypoints ordered start first.
    pub fn cells_to_world_path(&self, cells: &[Point]) -> Vec<Vec2> {
        cells.iter().rev().map(|&c| self.cell_to_world(c)).collect()
    }

    fn estimate(&self, cell: Point, reference: Point, goal: Point) -> f32 {
        let d = match self.config.metric {
            Metric::Manhattan => manhattan(cell, goal) as f32,
            Metric::Octile => octile(cell, goal),
        };
        match self.config.tie_break {
            TieBreak::Scale => d * TieBreak::SCALE,
            TieBreak::CrossProduct => {
                d + cross_deviation(cell, reference, goal) as f32 * TieBreak::CROSS_WEIGHT
            }
            TieBreak::None => d,
        }
    }
}

impl<S: SuccessorStrategy> SearchMap for GridMap<S> {
    type Cell = Point;

    #[inline]
    fn collides(&self, cell: Point) -> bool {
        self.occupancy.collides(cell)
    }

    fn heuristic(&self, cell: Point, reference: Point, goals: &[Point]) -> f32 {
        goals
            .iter()
            .map(|&goal| self.estimate(cell, reference, goal))
            .fold(f32::INFINITY, f32::min)
    }

    fn movement_cost(&self, from: Point, to: Point) -> f32 {
        match self.config.cost_model {
            CostModel::Distance => octile(from, to),
            CostModel::PerStep => {
                if from.x != to.x && from.y != to.y {
                    DIAGONAL_COST
                } else {
                    STRAIGHT_COST
                }
            }
        }
    }

    fn successors(
        &self,
        closed: &ClosedList<Point>,
        node: &SearchNode<Point>,
        _start: Point,
        goals: &[Point],
        out: &mut Vec<Point>,
    ) {
        // A start outside the grid collides and has nowhere to go.
        if !self.occupancy.grid().contains(node.pos) {
            return;
        }
        self.strategy
            .successors(&self.occupancy, closed, node, goals, out);
    }
}
