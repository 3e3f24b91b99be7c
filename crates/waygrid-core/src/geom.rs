//! Geometry primitives: [`Point`], [`Direction`] and [`Vec2`].
//!
//! Grid coordinates are integer [`Point`]s with X growing right and Y growing
//! down. World coordinates are `f32` [`Vec2`]s.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy). Saturates at the edges of the
    /// `i32` range.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The neighbour one step away in direction `d`.
    #[inline]
    pub const fn step(self, d: Direction) -> Self {
        self.shift(d.dx(), d.dy())
    }

    /// Component-wise sign, each axis in `-1..=1`.
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// All eight neighbours, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Direction> for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Direction) -> Self {
        self.step(rhs)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight unit moves on a grid.
///
/// Invariant: both components are in `-1..=1` and at least one is non-zero.
///
/// Serialized as a `[dx, dy]` pair; deserialization rejects pairs that break
/// the invariant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const N: Self = Self { dx: 0, dy: -1 };
    pub const NE: Self = Self { dx: 1, dy: -1 };
    pub const E: Self = Self { dx: 1, dy: 0 };
    pub const SE: Self = Self { dx: 1, dy: 1 };
    pub const S: Self = Self { dx: 0, dy: 1 };
    pub const SW: Self = Self { dx: -1, dy: 1 };
    pub const W: Self = Self { dx: -1, dy: 0 };
    pub const NW: Self = Self { dx: -1, dy: -1 };

    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Build a direction from raw components. Components are clamped to
    /// `-1..=1`; returns `None` for the zero vector.
    pub fn new(dx: i32, dy: i32) -> Option<Self> {
        let (dx, dy) = (dx.signum() as i8, dy.signum() as i8);
        if dx == 0 && dy == 0 {
            None
        } else {
            Some(Self { dx, dy })
        }
    }

    /// Direction of travel from `from` towards `to`, or `None` if equal.
    #[inline]
    pub fn between(from: Point, to: Point) -> Option<Self> {
        Self::new(to.x - from.x, to.y - from.y)
    }

    #[inline]
    pub const fn dx(self) -> i32 {
        self.dx as i32
    }

    #[inline]
    pub const fn dy(self) -> i32 {
        self.dy as i32
    }

    /// Whether both components are non-zero.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }

    /// The horizontal component as a direction, if any.
    #[inline]
    pub fn horizontal(self) -> Option<Self> {
        Self::new(self.dx(), 0)
    }

    /// The vertical component as a direction, if any.
    #[inline]
    pub fn vertical(self) -> Option<Self> {
        Self::new(0, self.dy())
    }

    /// The direction as a unit [`Point`] offset.
    #[inline]
    pub const fn offset(self) -> Point {
        Point::new(self.dx(), self.dy())
    }
}

/// A `(dx, dy)` pair that is not one of the eight unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection {
    pub dx: i32,
    pub dy: i32,
}

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direction: <{}, {}> is not a unit move", self.dx, self.dy)
    }
}

impl std::error::Error for InvalidDirection {}

impl TryFrom<(i32, i32)> for Direction {
    type Error = InvalidDirection;

    /// Strict conversion: both components in `-1..=1`, not both zero.
    fn try_from((dx, dy): (i32, i32)) -> Result<Self, InvalidDirection> {
        let unit = |v: i32| (-1..=1).contains(&v);
        if !unit(dx) || !unit(dy) {
            return Err(InvalidDirection { dx, dy });
        }
        Self::new(dx, dy).ok_or(InvalidDirection { dx, dy })
    }
}

impl From<Direction> for (i32, i32) {
    fn from(d: Direction) -> Self {
        (d.dx(), d.dy())
    }
}

impl Neg for Direction {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A world-space position or extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(-a, Point::new(-1, -2));
        assert_eq!(Point::new(-7, 0).signum(), Point::new(-1, 0));
    }

    #[test]
    fn point_step_and_neighbors() {
        let p = Point::new(5, 5);
        assert_eq!(p + Direction::NE, Point::new(6, 4));
        assert_eq!(p.step(Direction::W), Point::new(4, 5));
        let ns: HashSet<_> = p.neighbors_8().into_iter().collect();
        assert_eq!(ns.len(), 8);
        assert!(!ns.contains(&p));
    }

    #[test]
    fn steps_saturate_at_i32_edges() {
        let far = Point::new(i32::MAX, i32::MIN);
        assert_eq!(far + Direction::NE, far);
        assert_eq!(far.step(Direction::W), Point::new(i32::MAX - 1, i32::MIN));
        assert_eq!(far.neighbors_8().len(), 8);
    }

    #[test]
    fn direction_between_uses_signum() {
        let d = Direction::between(Point::new(0, 0), Point::new(7, -3)).unwrap();
        assert_eq!(d, Direction::NE);
        assert!(d.is_diagonal());
        assert_eq!(d.horizontal(), Some(Direction::E));
        assert_eq!(d.vertical(), Some(Direction::N));
        assert_eq!(Direction::between(Point::new(2, 2), Point::new(2, 2)), None);
    }

    #[test]
    fn direction_components() {
        assert_eq!(Direction::new(0, 0), None);
        assert_eq!(Direction::new(0, 9), Some(Direction::S));
        assert_eq!(-Direction::SE, Direction::NW);
        assert_eq!(Direction::S.horizontal(), None);
        assert!(!Direction::E.is_diagonal());
        assert_eq!(Direction::SW.offset(), Point::new(-1, 1));
        let diagonals = Direction::ALL.iter().filter(|d| d.is_diagonal()).count();
        assert_eq!(diagonals, 4);
    }

    #[test]
    fn direction_from_pair_is_strict() {
        assert_eq!(Direction::try_from((1, -1)), Ok(Direction::NE));
        assert_eq!(<(i32, i32)>::from(Direction::SW), (-1, 1));
        assert_eq!(
            Direction::try_from((0, 0)),
            Err(InvalidDirection { dx: 0, dy: 0 })
        );
        assert_eq!(
            Direction::try_from((2, 0)),
            Err(InvalidDirection { dx: 2, dy: 0 })
        );
        assert_eq!(
            InvalidDirection { dx: 2, dy: 0 }.to_string(),
            "direction: <2, 0> is not a unit move"
        );
    }

    #[test]
    fn vec2_ops() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(v / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(v - Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
    }
}
