//! Weighted adjacency structure derived from a [`Grid`].

use labyrinth_core::{CellKind, Grid, Point};
use rustc_hash::FxHashMap;

/// A directed edge to an orthogonal neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Point,
    /// Cost of the destination cell.
    pub weight: i32,
}

/// One node per passable cell, one edge per passable orthogonal neighbour.
///
/// The weight of `u -> v` is the cost of `v`, so two adjacent cells of
/// different kinds are joined by edges of different weight in each
/// direction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: FxHashMap<Point, Vec<Edge>>,
    // Nodes in x-major grid order, for deterministic iteration.
    order: Vec<Point>,
}

impl Graph {
    /// Build the adjacency structure of `grid`.
    pub fn build(grid: &Grid) -> Self {
        let mut graph = Self::default();
        let mut edge_count = 0;

        for (p, kind) in grid.iter() {
            if !kind.is_passable() {
                continue;
            }
            let edges: Vec<Edge> = p
                .neighbors_4()
                .into_iter()
                .filter_map(|to| {
                    let weight = grid.at(to).and_then(CellKind::cost)?;
                    Some(Edge { to, weight })
                })
                .collect();
            edge_count += edges.len();
            graph.adjacency.insert(p, edges);
            graph.order.push(p);
        }

        log::debug!(
            "graph: {} nodes, {} edges from {}x{} grid",
            graph.len(),
            edge_count,
            grid.width(),
            grid.height()
        );
        graph
    }

    /// Outgoing edges of `p`. Empty for points that are not nodes.
    #[inline]
    pub fn edges(&self, p: Point) -> &[Edge] {
        self.adjacency.get(&p).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `p` is a node of the graph.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.adjacency.contains_key(&p)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in x-major grid order.
    pub fn nodes(&self) -> &[Point] {
        &self.order
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Weight of the edge `from -> to`, if there is one.
    pub fn weight(&self, from: Point, to: Point) -> Option<i32> {
        self.edges(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Total cost of walking `path`.
    ///
    /// Returns `None` if some consecutive pair is not an edge. A single
    /// point costs nothing; an empty path has no cost.
    pub fn path_cost(&self, path: &[Point]) -> Option<i32> {
        if path.is_empty() {
            return None;
        }
        path.windows(2)
            .map(|w| self.weight(w[0], w[1]))
            .sum::<Option<i32>>()
    }
}
