use std::fmt;

use waygrid_core::{GridError, Point, Vec2};

/// Precondition violations reported by [`AStar`](crate::AStar).
///
/// Not finding a path is not an error; it is reported as `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The goal set was empty.
    EmptyGoals,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGoals => write!(f, "search: goal set is empty"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors raised while building an [`OccupancyGrid`](crate::OccupancyGrid)
/// or a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq)]
pub enum GridMapError {
    /// The cell buffer does not match the requested size.
    Grid(GridError),
    /// The grid has no cells.
    EmptyGrid,
    /// World extents must be finite and strictly positive on both axes.
    InvalidDimension(Vec2),
    /// Layout lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `.` or `#` was found in a layout.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid map: {e}"),
            Self::EmptyGrid => write!(f, "grid map: grid has no cells"),
            Self::InvalidDimension(d) => write!(f, "grid map: invalid world dimension {d}"),
            Self::InconsistentSize(s) => write!(f, "grid map: inconsistent layout size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(
                    f,
                    "grid map: invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for GridMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GridMapError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(SearchError::EmptyGoals.to_string(), "search: goal set is empty");
        let e = GridMapError::InvalidRune {
            ch: 'x',
            pos: Point::new(2, 1),
        };
        assert_eq!(e.to_string(), "grid map: invalid rune \u{201c}x\u{201d} at (2, 1)");
    }

    #[test]
    fn grid_error_is_source() {
        let e: GridMapError = GridError::SizeMismatch {
            expected: 4,
            actual: 3,
        }
        .into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "grid map: grid: expected 4 cells, got 3");
        assert!(GridMapError::EmptyGrid.source().is_none());
    }
}
