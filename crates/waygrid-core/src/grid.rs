//! The [`Grid`] type: an owned, row-major 2D array addressed by [`Point`].
//!
//! Unlike a shared view, a `Grid` owns its storage outright so it can be
//! read from several threads at once (`Grid<T>: Sync` when `T: Sync`).

use std::fmt;

use crate::geom::Point;

/// Errors raised when building a [`Grid`] from existing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was negative.
    NegativeSize { width: i32, height: i32 },
    /// The cell buffer does not hold exactly `width * height` entries.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSize { width, height } => {
                write!(f, "grid: negative size {width}x{height}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid: expected {expected} cells, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A 2D grid of `T` in row-major order, spanning `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a new grid of the given dimensions, filled with `T::default()`.
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid where every cell is `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    pub fn from_vec(cells: Vec<T>, width: i32, height: i32) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::NegativeSize { width, height });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Borrow the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutably borrow the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if out of
    /// bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.get_mut(p) {
            Some(c) => {
                *c = value;
                true
            }
            None => false,
        }
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            cells: self.cells.iter().enumerate(),
            width: self.width,
        }
    }
}

/// Iterator over `(Point, &T)` pairs in a [`Grid`].
pub struct GridIter<'a, T> {
    cells: std::iter::Enumerate<std::slice::Iter<'a, T>>,
    width: i32,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Point, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (i, cell) = self.cells.next()?;
        let i = i as i32;
        Some((Point::new(i % self.width, i / self.width), cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T> ExactSizeIterator for GridIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Point, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> GridIter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_get() {
        let g: Grid<u8> = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.get(Point::new(0, 0)), Some(&0));
        assert_eq!(g.get(Point::new(4, 0)), None);
        assert_eq!(g.get(Point::new(0, -1)), None);
    }

    #[test]
    fn grid_set_and_get() {
        let mut g: Grid<char> = Grid::filled(4, 3, '.');
        assert!(g.set(Point::new(2, 1), '#'));
        assert_eq!(g.get(Point::new(2, 1)), Some(&'#'));
        // row-major layout
        assert_eq!(g.as_slice()[6], '#');
        assert!(!g.set(Point::new(10, 10), '#'));
    }

    #[test]
    fn grid_fill() {
        let mut g: Grid<i32> = Grid::new(3, 2);
        g.fill(7);
        assert!(g.iter().all(|(_, &v)| v == 7));
    }

    #[test]
    fn grid_iter_pairs_points_with_cells() {
        let g = Grid::from_vec(vec![0, 1, 2, 3, 4, 5], 3, 2).unwrap();
        let items: Vec<_> = g.iter().map(|(p, &v)| (p, v)).collect();
        assert_eq!(items[4], (Point::new(1, 1), 4));
        assert_eq!(g.iter().len(), 6);
    }

    #[test]
    fn grid_from_vec_checks_size() {
        assert_eq!(
            Grid::from_vec(vec![0u8; 5], 2, 3),
            Err(GridError::SizeMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(
            Grid::<u8>::from_vec(Vec::new(), -1, 3),
            Err(GridError::NegativeSize {
                width: -1,
                height: 3
            })
        );
    }

    #[test]
    fn negative_dimensions_clamp_to_empty() {
        let g: Grid<u8> = Grid::new(-2, 5);
        assert!(g.is_empty());
        assert!(!g.contains(Point::ZERO));
    }
}
