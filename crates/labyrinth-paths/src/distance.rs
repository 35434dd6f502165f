use labyrinth_core::Point;

/// Manhattan (L1) distance between two points.
///
/// With axis-aligned moves and every step costing at least 1, this never
/// overestimates the remaining cost, so it is admissible and consistent for
/// [`AStar`](crate::AStar).
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
