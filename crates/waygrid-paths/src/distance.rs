use waygrid_core::Point;

/// Cost of one axis-aligned step.
pub const STRAIGHT_COST: f32 = 1.0;

/// Cost of one diagonal step. A coarse stand-in for √2.
pub const DIAGONAL_COST: f32 = 1.5;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Cheapest 8-directional travel cost between two points on an open grid,
/// with [`STRAIGHT_COST`] and [`DIAGONAL_COST`] steps.
#[inline]
pub fn octile(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    let straight = dx.max(dy) - diag;
    diag as f32 * DIAGONAL_COST + straight as f32 * STRAIGHT_COST
}

/// Magnitude of the cross product of `p - goal` and `reference - goal`.
///
/// Zero when `p` lies on the line through `reference` and `goal`.
#[inline]
pub fn cross_deviation(p: Point, reference: Point, goal: Point) -> i32 {
    let (dx1, dy1) = (p.x - goal.x, p.y - goal.y);
    let (dx2, dy2) = (reference.x - goal.x, reference.y - goal.y);
    (dx1 * dy2 - dx2 * dy1).abs()
}
