//! Shortest-path search over mazes.
//!
//! A [`Grid`](labyrinth_core::Grid) is first turned into a weighted
//! [`Graph`] with one node per passable cell. Searches then run over the
//! graph:
//!
//! - **Dijkstra** uniform-cost search ([`Dijkstra`]), plus full distance
//!   maps ([`Dijkstra::distance_map`])
//! - **A\*** with the Manhattan heuristic ([`AStar`])
//! - **Connected components** ([`components`], [`is_connected`])
//!
//! Both searches implement [`Pathfinder`]; [`PathfinderKind`] selects one
//! at runtime. An empty path means "no route" and is not an error.

mod astar;
mod cc;
mod dijkstra;
mod distance;
mod graph;
mod kind;
mod node;
mod traits;

#[cfg(test)]
mod testutil;

pub use astar::AStar;
pub use cc::{components, is_connected};
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use graph::{Edge, Graph};
pub use kind::{PathfinderKind, UnknownPathfinder};
pub use traits::Pathfinder;
