//! Randomized maze generation.
//!
//! Generators carve passages into an all-wall [`Grid`](labyrinth_core::Grid)
//! on a stride-2 lattice: squares with odd coordinates are rooms, and the
//! square between two neighbouring rooms is opened to join them. The result
//! is always a perfect maze, a single tree of passages.
//!
//! - **Prim** ([`Prim`]): grows from one room via a random frontier
//! - **Kruskal** ([`Kruskal`]): joins rooms in random wall order with a
//!   [`DisjointSet`]
//! - **Recursive backtracker** ([`Backtracker`]): depth-first walk with an
//!   explicit stack
//!
//! [`GeneratorKind`] selects one at runtime, and [`distribute`] scatters
//! special terrain over the finished maze.
//!
//! All randomness comes from the caller's [`rand::Rng`], so a seeded
//! generator reproduces the same maze.

mod backtracker;
mod error;
mod kind;
mod kruskal;
mod lattice;
mod prim;
mod special;
mod traits;
mod union_find;

#[cfg(test)]
mod testutil;

pub use backtracker::Backtracker;
pub use error::GenerationError;
pub use kind::GeneratorKind;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use special::distribute;
pub use traits::MazeGenerator;
pub use union_find::DisjointSet;
