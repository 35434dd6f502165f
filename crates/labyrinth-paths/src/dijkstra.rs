use std::collections::BinaryHeap;

use labyrinth_core::Point;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Graph;
use crate::node::{NodeRef, reconstruct};
use crate::traits::Pathfinder;

/// Uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// State left behind by one run of the search.
struct Search {
    dist: FxHashMap<Point, i32>,
    previous: FxHashMap<Point, Point>,
    settled: usize,
    found: bool,
}

impl Dijkstra {
    /// Optimal cost from `start` to every node reachable from it, `start`
    /// included at cost 0. Empty if `start` is not a node.
    pub fn distance_map(graph: &Graph, start: Point) -> FxHashMap<Point, i32> {
        if !graph.contains(start) {
            return FxHashMap::default();
        }
        search(graph, start, None).dist
    }
}

impl Pathfinder for Dijkstra {
    fn find_path(&self, graph: &Graph, start: Point, end: Point) -> Vec<Point> {
        if start == end {
            return vec![start];
        }

        let s = search(graph, start, Some(end));
        if !s.found {
            log::debug!(
                "dijkstra: no route {start} -> {end} after settling {} nodes",
                s.settled
            );
            return Vec::new();
        }

        log::debug!(
            "dijkstra: {start} -> {end} cost {} after settling {} nodes",
            s.dist[&end],
            s.settled
        );
        reconstruct(&s.previous, start, end)
    }
}

/// Run the search from `start`, stopping early once `goal` is settled.
///
/// Duplicate queue entries are allowed; a node is finalized on its first
/// pop and later pops of it are skipped.
fn search(graph: &Graph, start: Point, goal: Option<Point>) -> Search {
    let mut dist: FxHashMap<Point, i32> = FxHashMap::default();
    let mut previous: FxHashMap<Point, Point> = FxHashMap::default();
    let mut settled: FxHashSet<Point> = FxHashSet::default();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

    dist.insert(start, 0);
    open.push(NodeRef {
        pos: start,
        g: 0,
        f: 0,
    });

    let mut found = false;
    while let Some(current) = open.pop() {
        let cp = current.pos;
        if !settled.insert(cp) {
            log::trace!("dijkstra: skipping stale entry for {cp}");
            continue;
        }

        if Some(cp) == goal {
            found = true;
            break;
        }

        let current_g = dist[&cp];
        for edge in graph.edges(cp) {
            let tentative = current_g + edge.weight;
            if tentative < dist.get(&edge.to).copied().unwrap_or(i32::MAX) {
                dist.insert(edge.to, tentative);
                previous.insert(edge.to, cp);
                open.push(NodeRef {
                    pos: edge.to,
                    g: tentative,
                    f: tentative,
                });
            }
        }
    }

    Search {
        dist,
        previous,
        settled: settled.len(),
        found,
    }
}

#[cfg(test)]
mod tests {
    use labyrinth_core::Grid;

    use super::*;
    use crate::testutil::{SAMPLE, assert_route};

    fn sample() -> Graph {
        Graph::build(&SAMPLE.parse::<Grid>().unwrap())
    }

    #[test]
    fn finds_cheapest_route() {
        let graph = sample();
        let start = Point::new(2, 2);
        let end = Point::new(0, 3);
        let path = Dijkstra.find_path(&graph, start, end);
        assert_eq!(
            path,
            vec![
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(0, 3)
            ]
        );
        assert_route(&graph, &path, start, end);
        assert_eq!(graph.path_cost(&path), Some(6));
    }

    #[test]
    fn isolated_start_has_no_route() {
        let graph = sample();
        assert!(
            Dijkstra
                .find_path(&graph, Point::new(0, 0), Point::new(2, 1))
                .is_empty()
        );
    }

    #[test]
    fn unreachable_end_has_no_route() {
        let graph = sample();
        assert!(
            Dijkstra
                .find_path(&graph, Point::new(3, 3), Point::new(0, 0))
                .is_empty()
        );
    }

    #[test]
    fn wall_end_has_no_route() {
        let graph = sample();
        assert!(
            Dijkstra
                .find_path(&graph, Point::new(2, 2), Point::new(1, 1))
                .is_empty()
        );
    }

    #[test]
    fn same_start_and_end() {
        let graph = sample();
        let p = Point::new(2, 1);
        assert_eq!(Dijkstra.find_path(&graph, p, p), vec![p]);
        // Even for a point with no edges, or no node at all.
        let q = Point::new(1, 1);
        assert_eq!(Dijkstra.find_path(&graph, q, q), vec![q]);
    }

    #[test]
    fn all_walls_have_no_route() {
        let graph = Graph::build(&Grid::new(4, 4));
        assert!(
            Dijkstra
                .find_path(&graph, Point::new(0, 0), Point::new(3, 3))
                .is_empty()
        );
    }

    #[test]
    fn prefers_cheaper_detour() {
        // Straight through the swamps costs 3 + 3 + 2 = 8; around via the
        // accelerated path costs 1 + 1 + 1 + 1 + 2 = 6.
        let grid: Grid = "
            .~~.
            >>>>
        "
        .parse()
        .unwrap();
        let graph = Graph::build(&grid);
        let path = Dijkstra.find_path(&graph, Point::new(0, 0), Point::new(0, 3));
        assert_eq!(graph.path_cost(&path), Some(6));
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn distance_map_is_optimal() {
        let graph = sample();
        let dist = Dijkstra::distance_map(&graph, Point::new(2, 2));
        assert_eq!(dist[&Point::new(2, 2)], 0);
        assert_eq!(dist[&Point::new(1, 2)], 2);
        assert_eq!(dist[&Point::new(2, 3)], 3);
        assert_eq!(dist[&Point::new(0, 3)], 6);
        assert_eq!(dist[&Point::new(3, 3)], 5);
        assert!(!dist.contains_key(&Point::new(0, 0)));
        assert!(!dist.contains_key(&Point::new(3, 0)));
        assert!(Dijkstra::distance_map(&graph, Point::new(1, 1)).is_empty());
    }
}
