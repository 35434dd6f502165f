use labyrinth_core::Point;

use crate::Graph;

/// A shortest-path search over a [`Graph`].
pub trait Pathfinder {
    /// Find a minimum-cost route from `start` to `end`, both included.
    ///
    /// Returns `[start]` when `start == end`, and an empty `Vec` when `end`
    /// cannot be reached (including when either endpoint is not a node).
    fn find_path(&self, graph: &Graph, start: Point, end: Point) -> Vec<Point>;
}
