use labyrinth_core::Grid;
use rand::Rng;

/// A maze generation algorithm.
pub trait MazeGenerator {
    /// Produce a `width` x `height` maze.
    ///
    /// Every passable square of the result is reachable from every other
    /// one, and the carved squares form a tree over the stride-2 lattice.
    /// Dimensions are assumed positive; see
    /// [`GeneratorKind::generate`](crate::GeneratorKind::generate) for the
    /// checked entry point.
    fn generate<R: Rng + ?Sized>(&self, width: i32, height: i32, rng: &mut R) -> Grid;
}
