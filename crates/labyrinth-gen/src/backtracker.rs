use labyrinth_core::{CellKind, Grid, Point};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::lattice::{carve, lattice_neighbors, random_lattice_point};
use crate::traits::MazeGenerator;

/// Randomized depth-first search with an explicit stack.
///
/// Produces long winding corridors with few branches. The stack holds the
/// current trail of lattice points, so maze size is bounded by memory rather
/// than by call depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracker;

impl MazeGenerator for Backtracker {
    fn generate<R: Rng + ?Sized>(&self, width: i32, height: i32, rng: &mut R) -> Grid {
        let mut grid = Grid::new(width, height);
        let Some(start) = random_lattice_point(width, height, rng) else {
            return grid;
        };
        grid.set(start, CellKind::Road);

        let mut stack = vec![start];
        let mut deepest = 1;
        while let Some(&current) = stack.last() {
            let unvisited: Vec<Point> = lattice_neighbors(&grid, current)
                .filter(|&n| grid.at(n) == Some(CellKind::Wall))
                .collect();
            match unvisited.choose(rng) {
                Some(&next) => {
                    carve(&mut grid, current, next);
                    stack.push(next);
                    deepest = deepest.max(stack.len());
                }
                None => {
                    stack.pop();
                }
            }
        }

        log::trace!("backtracker: deepest trail {deepest} rooms");
        grid
    }
}
