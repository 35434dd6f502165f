//! Connected-component labelling.

use labyrinth_core::Point;
use rustc_hash::FxHashSet;

use crate::Graph;

/// Group the nodes of `graph` into connected components.
///
/// Components are listed in the order of their first node in
/// [`Graph::nodes`], and each component lists its nodes in discovery order.
pub fn components(graph: &Graph) -> Vec<Vec<Point>> {
    let mut seen: FxHashSet<Point> = FxHashSet::default();
    let mut stack: Vec<Point> = Vec::new();
    let mut result = Vec::new();

    for &start in graph.nodes() {
        if !seen.insert(start) {
            continue;
        }

        // Iterative DFS from `start`.
        let mut component = vec![start];
        stack.clear();
        stack.push(start);
        while let Some(p) = stack.pop() {
            for edge in graph.edges(p) {
                if seen.insert(edge.to) {
                    component.push(edge.to);
                    stack.push(edge.to);
                }
            }
        }
        result.push(component);
    }

    result
}

/// Whether every node can reach every other node. True for an empty graph.
pub fn is_connected(graph: &Graph) -> bool {
    components(graph).len() <= 1
}

#[cfg(test)]
mod tests {
    use labyrinth_core::Grid;

    use super::*;
    use crate::testutil::SAMPLE;

    #[test]
    fn sample_has_three_components() {
        let graph = Graph::build(&SAMPLE.parse::<Grid>().unwrap());
        let cc = components(&graph);
        assert_eq!(cc.len(), 3);
        assert_eq!(cc[0], vec![Point::new(0, 0)]);
        assert_eq!(cc[1].len(), 8);
        assert_eq!(cc[2], vec![Point::new(3, 0)]);
        assert_eq!(cc.iter().map(Vec::len).sum::<usize>(), graph.len());
        assert!(!is_connected(&graph));
    }

    #[test]
    fn open_field_is_connected() {
        let graph = Graph::build(&Grid::filled(6, 4, labyrinth_core::CellKind::Road));
        assert!(is_connected(&graph));
        assert_eq!(components(&graph)[0].len(), 24);
    }

    #[test]
    fn empty_graph_is_connected() {
        let graph = Graph::build(&Grid::new(3, 3));
        assert!(components(&graph).is_empty());
        assert!(is_connected(&graph));
    }
}
