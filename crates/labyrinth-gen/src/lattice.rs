//! Stride-2 addressing shared by the generators.
//!
//! Squares with odd `x` and odd `y` are lattice points ("rooms"); the
//! squares between two lattice points are connectors. A passage always runs
//! lattice point, connector, lattice point, so two rooms never touch without
//! the wall between them being carved.
//!
//! A lattice point needs only `x < width`, so when a dimension is even its
//! last row or column holds lattice points and can be carved. When a
//! dimension is odd the last row or column is always wall. A dimension of 1
//! has no lattice points at all, and the maze stays solid wall.

use labyrinth_core::{CellKind, Grid, Point};
use rand::Rng;

pub(crate) const STEP: i32 = 2;

const DIRS: [Point; 4] = [
    Point::new(-STEP, 0),
    Point::new(STEP, 0),
    Point::new(0, -STEP),
    Point::new(0, STEP),
];

#[inline]
pub(crate) fn is_lattice(p: Point) -> bool {
    p.x % STEP == 1 && p.y % STEP == 1
}

/// Number of lattice points along a dimension of `len` squares.
#[inline]
pub(crate) fn lattice_len(len: i32) -> i32 {
    len.max(0) / STEP
}

/// Every lattice point of a `width` x `height` grid, x-major.
pub(crate) fn lattice_points(width: i32, height: i32) -> impl Iterator<Item = Point> {
    (0..lattice_len(width)).flat_map(move |i| {
        (0..lattice_len(height)).map(move |j| Point::new(i * STEP + 1, j * STEP + 1))
    })
}

/// Uniformly random lattice point, or `None` if there are none.
pub(crate) fn random_lattice_point<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    rng: &mut R,
) -> Option<Point> {
    let (lw, lh) = (lattice_len(width), lattice_len(height));
    if lw == 0 || lh == 0 {
        return None;
    }
    Some(Point::new(
        rng.random_range(0..lw) * STEP + 1,
        rng.random_range(0..lh) * STEP + 1,
    ))
}

/// Lattice points two steps away from `p` that lie inside `grid`.
pub(crate) fn lattice_neighbors(grid: &Grid, p: Point) -> impl Iterator<Item = Point> + '_ {
    DIRS.into_iter().map(move |d| p + d).filter(|&n| grid.contains(n))
}

/// Carve the straight 3-square passage between two lattice neighbours.
pub(crate) fn carve(grid: &mut Grid, a: Point, b: Point) {
    debug_assert!(is_lattice(a) && is_lattice(b));
    let d = a - b;
    debug_assert_eq!(d.x.abs() + d.y.abs(), STEP);
    let mid = (a + b) / 2;
    grid.set(a, CellKind::Road);
    grid.set(mid, CellKind::Road);
    grid.set(b, CellKind::Road);
}
