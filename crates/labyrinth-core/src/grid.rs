//! The maze grid: a rectangular, exclusively owned buffer of [`CellKind`].
//!
//! The grid is indexed as `(x, y)` with `0 <= x < width` and
//! `0 <= y < height`. In its text form every line is one value of `x` and
//! every character on the line is one value of `y`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::CellKind;
use crate::geom::{Point, Range};

/// Errors produced when building a grid from text or nested rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell symbol '{ch}' at {pos}")]
    InvalidCharacter { ch: char, pos: Point },
}

/// A 2D grid of [`CellKind`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid where every cell is a wall.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, CellKind::Wall)
    }

    /// Create a new grid where every cell is `kind`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn filled(width: i32, height: i32, kind: CellKind) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![kind; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Build a grid from nested rows where `rows[x][y]` is the cell at
    /// `(x, y)`. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, ParseGridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(ParseGridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != expected {
                return Err(ParseGridError::InconsistentWidth {
                    row,
                    expected,
                    found: cols.len(),
                });
            }
            cells.extend_from_slice(cols);
        }
        Ok(Self {
            cells,
            width: rows.len() as i32,
            height: expected as i32,
        })
    }

    /// Extent along x.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Extent along y.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Returns the bounding range of the grid.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether the given point lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.height as usize + p.y as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_passable)
    }

    /// Set the cell at a point. Does nothing and returns `false` if out of
    /// bounds.
    pub fn set(&mut self, p: Point, kind: CellKind) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Count how many cells equal the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, CellKind) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// All points holding the given kind, in x-major order.
    pub fn points_of(&self, kind: CellKind) -> Vec<Point> {
        self.iter()
            .filter(|&(_, c)| c == kind)
            .map(|(p, _)| p)
            .collect()
    }

    /// Iterate over `(Point, CellKind)` pairs in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse the text form. Blank lines around the grid and indentation of
    /// each line are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim()
            .lines()
            .enumerate()
            .map(|(x, line)| {
                line.trim()
                    .chars()
                    .enumerate()
                    .map(|(y, ch)| {
                        CellKind::try_from(ch).map_err(|_| ParseGridError::InvalidCharacter {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, kind)) in self.iter().enumerate() {
            if i > 0 && p.y == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", kind.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use CellKind::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Wall), 50);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 3);
        let p = Point::new(3, 2);
        assert!(g.set(p, Swamp));
        assert_eq!(g.at(p), Some(Swamp));
        assert_eq!(g.at(Point::new(0, 0)), Some(Wall));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
        assert!(!g.set(Point::new(10, 10), Road));
    }

    #[test]
    fn rows_do_not_alias() {
        let mut g = Grid::new(3, 3);
        g.set(Point::new(1, 1), Road);
        assert_eq!(g.count(Road), 1);
        assert_eq!(g.at(Point::new(0, 1)), Some(Wall));
        assert_eq!(g.at(Point::new(2, 1)), Some(Wall));
    }

    #[test]
    fn test_filled_and_count() {
        let mut g = Grid::filled(5, 5, Road);
        assert_eq!(g.count(Road), 25);
        g.set(Point::new(0, 0), Swamp);
        assert_eq!(g.count(Road), 24);
        assert_eq!(g.count(Swamp), 1);
        assert_eq!(g.count_fn(|p, _| p.x == 0), 5);
    }

    #[test]
    fn from_rows_uses_outer_index_as_x() {
        let g = Grid::from_rows(vec![vec![Road, Wall, Swamp], vec![Wall, AcceleratedPath, Wall]])
            .unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 3);
        assert_eq!(g.at(Point::new(0, 2)), Some(Swamp));
        assert_eq!(g.at(Point::new(1, 1)), Some(AcceleratedPath));
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty() {
        assert_eq!(Grid::from_rows(vec![]), Err(ParseGridError::Empty));
        assert_eq!(
            Grid::from_rows(vec![vec![Road, Road], vec![Road]]),
            Err(ParseGridError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn parse_and_display() {
        let text = "
            .#..
            ##..
            #..~
            >##.
        ";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.at(Point::new(3, 0)), Some(AcceleratedPath));
        assert_eq!(g.at(Point::new(2, 3)), Some(Swamp));
        assert_eq!(g.to_string(), ".#..\n##..\n#..~\n>##.");
        assert_eq!(g.to_string().parse::<Grid>().unwrap(), g);
    }

    #[test]
    fn parse_reports_bad_symbol_position() {
        let err = "..\n.x".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            ParseGridError::InvalidCharacter {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn test_iter_order() {
        let mut g = Grid::new(2, 3);
        g.set(Point::new(0, 1), Road);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(0, 1), Road));
        assert_eq!(g.points_of(Road), vec![Point::new(0, 1)]);
    }
}
