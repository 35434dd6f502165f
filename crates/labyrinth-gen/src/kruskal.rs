use labyrinth_core::{CellKind, Grid, Point};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::lattice::{STEP, carve, lattice_len, lattice_points};
use crate::traits::MazeGenerator;
use crate::union_find::DisjointSet;

/// Randomized Kruskal's algorithm.
///
/// Every lattice point starts as its own set. The walls between lattice
/// neighbours are visited in random order and knocked down whenever the two
/// sides are still disconnected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl MazeGenerator for Kruskal {
    fn generate<R: Rng + ?Sized>(&self, width: i32, height: i32, rng: &mut R) -> Grid {
        let mut grid = Grid::new(width, height);
        let rooms: Vec<Point> = lattice_points(width, height).collect();
        for &p in &rooms {
            grid.set(p, CellKind::Road);
        }

        let mut walls: Vec<(Point, Point)> = Vec::with_capacity(rooms.len() * 2);
        for &p in &rooms {
            for d in [Point::new(STEP, 0), Point::new(0, STEP)] {
                let q = p + d;
                if grid.contains(q) {
                    walls.push((p, q));
                }
            }
        }
        walls.shuffle(rng);

        let lh = lattice_len(height);
        let index = |p: Point| ((p.x / STEP) * lh + p.y / STEP) as usize;
        let mut sets = DisjointSet::new(rooms.len());
        for (a, b) in walls {
            if sets.union(index(a), index(b)) {
                carve(&mut grid, a, b);
                if sets.count() == 1 {
                    break;
                }
            }
        }

        grid
    }
}
