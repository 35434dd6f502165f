use labyrinth_core::{CellKind, Grid};
use labyrinth_paths::{Graph, is_connected};

use crate::lattice::{is_lattice, lattice_points};

/// Checks that `grid` is a perfect maze over the stride-2 lattice: every
/// room open, the open squares connected, and exactly one connector per
/// tree edge.
pub(crate) fn assert_spanning_tree(grid: &Grid) {
    let size = grid.size();
    let rooms = lattice_points(size.x, size.y).count();

    for p in lattice_points(size.x, size.y) {
        assert_eq!(grid.at(p), Some(CellKind::Road), "room {p} not carved");
    }
    for (p, kind) in grid.iter() {
        assert!(
            matches!(kind, CellKind::Wall | CellKind::Road),
            "unexpected {kind} at {p}"
        );
        if kind == CellKind::Road && !is_lattice(p) {
            assert!(p.x % 2 == 1 || p.y % 2 == 1, "{p} is not a connector");
        }
    }

    let open = grid.count(CellKind::Road);
    assert_eq!(open, if rooms == 0 { 0 } else { 2 * rooms - 1 });
    assert!(is_connected(&Graph::build(grid)), "maze is not connected");
}
