use labyrinth_core::{CellKind, Grid, Point};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

use crate::lattice::{carve, lattice_neighbors, random_lattice_point};
use crate::traits::MazeGenerator;

/// Randomized Prim's algorithm.
///
/// Grows a single passage tree from a random lattice point, each step
/// attaching a uniformly random frontier square to a random already-carved
/// neighbour. Mazes have many short dead ends and little directional bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

/// Frontier squares: uncarved lattice points next to the carved region.
/// Sampled uniformly by index, with a set to keep entries unique.
#[derive(Default)]
struct Frontier {
    cells: Vec<Point>,
    members: FxHashSet<Point>,
}

impl Frontier {
    /// Add the uncarved lattice neighbours of `p`.
    fn extend_from(&mut self, grid: &Grid, p: Point) {
        for n in lattice_neighbors(grid, p) {
            if grid.at(n) == Some(CellKind::Wall) && self.members.insert(n) {
                self.cells.push(n);
            }
        }
    }

    fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Point> {
        if self.cells.is_empty() {
            return None;
        }
        let p = self.cells.swap_remove(rng.random_range(0..self.cells.len()));
        self.members.remove(&p);
        Some(p)
    }
}

impl MazeGenerator for Prim {
    fn generate<R: Rng + ?Sized>(&self, width: i32, height: i32, rng: &mut R) -> Grid {
        let mut grid = Grid::new(width, height);
        let Some(start) = random_lattice_point(width, height, rng) else {
            return grid;
        };
        grid.set(start, CellKind::Road);

        let mut frontier = Frontier::default();
        frontier.extend_from(&grid, start);

        while let Some(cell) = frontier.pop_random(rng) {
            let carved: Vec<Point> = lattice_neighbors(&grid, cell)
                .filter(|&n| grid.is_passable(n))
                .collect();
            if let Some(&neighbor) = carved.choose(rng) {
                carve(&mut grid, cell, neighbor);
            }
            frontier.extend_from(&grid, cell);
        }

        grid
    }
}
