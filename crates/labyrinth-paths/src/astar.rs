use std::collections::BinaryHeap;

use labyrinth_core::Point;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Graph;
use crate::distance::manhattan;
use crate::node::{NodeRef, reconstruct};
use crate::traits::Pathfinder;

/// A* search guided by the Manhattan distance to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn find_path(&self, graph: &Graph, start: Point, end: Point) -> Vec<Point> {
        if start == end {
            return vec![start];
        }

        let mut g_score: FxHashMap<Point, i32> = FxHashMap::default();
        let mut previous: FxHashMap<Point, Point> = FxHashMap::default();
        let mut closed: FxHashSet<Point> = FxHashSet::default();
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        g_score.insert(start, 0);
        open.push(NodeRef {
            pos: start,
            g: 0,
            f: manhattan(start, end),
        });

        while let Some(current) = open.pop() {
            let cp = current.pos;

            // Skip stale entries.
            if closed.contains(&cp) {
                continue;
            }

            if cp == end {
                log::debug!(
                    "astar: {start} -> {end} cost {} after expanding {} nodes",
                    current.g,
                    closed.len()
                );
                return reconstruct(&previous, start, end);
            }

            // The heuristic is consistent, so the first expansion is final.
            closed.insert(cp);
            let current_g = g_score[&cp];

            for edge in graph.edges(cp) {
                if closed.contains(&edge.to) {
                    continue;
                }
                let tentative_g = current_g + edge.weight;
                if tentative_g < g_score.get(&edge.to).copied().unwrap_or(i32::MAX) {
                    g_score.insert(edge.to, tentative_g);
                    previous.insert(edge.to, cp);
                    open.push(NodeRef {
                        pos: edge.to,
                        g: tentative_g,
                        f: tentative_g + manhattan(edge.to, end),
                    });
                }
            }
        }

        log::debug!(
            "astar: no route {start} -> {end} after expanding {} nodes",
            closed.len()
        );
        Vec::new()
    }
}
