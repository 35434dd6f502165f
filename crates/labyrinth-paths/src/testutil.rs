use labyrinth_core::Point;

use crate::Graph;

/// Maze used throughout the search tests. (0, 0) is an isolated road, and
/// (2, 2) -> (0, 3) costs 6 along two different routes.
pub(crate) const SAMPLE: &str = "
    .#..
    ##..
    #..~
    >##.
";

/// Assert that `path` runs from `start` to `end` along real edges.
pub(crate) fn assert_route(graph: &Graph, path: &[Point], start: Point, end: Point) {
    assert_eq!(path.first(), Some(&start), "path {path:?} does not begin at {start}");
    assert_eq!(path.last(), Some(&end), "path {path:?} does not finish at {end}");
    for w in path.windows(2) {
        assert!(
            graph.weight(w[0], w[1]).is_some(),
            "{} -> {} is not an edge",
            w[0],
            w[1]
        );
    }
}
