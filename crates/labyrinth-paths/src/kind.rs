//! Selection of a search algorithm by name or menu index.

use std::fmt;
use std::str::FromStr;

use labyrinth_core::Point;
use thiserror::Error;

use crate::traits::Pathfinder;
use crate::{AStar, Dijkstra, Graph};

/// Error returned for a pathfinder selector that names no algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pathfinder `{0}`, expected one of: dijkstra, astar")]
pub struct UnknownPathfinder(pub String);

/// The available search algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathfinderKind {
    #[default]
    Dijkstra,
    AStar,
}

impl PathfinderKind {
    pub const ALL: [PathfinderKind; 2] = [PathfinderKind::Dijkstra, PathfinderKind::AStar];

    pub const fn name(self) -> &'static str {
        match self {
            PathfinderKind::Dijkstra => "dijkstra",
            PathfinderKind::AStar => "astar",
        }
    }

    /// The algorithm behind this selector.
    pub fn pathfinder(self) -> &'static dyn Pathfinder {
        match self {
            PathfinderKind::Dijkstra => &Dijkstra,
            PathfinderKind::AStar => &AStar,
        }
    }

    pub fn find_path(self, graph: &Graph, start: Point, end: Point) -> Vec<Point> {
        self.pathfinder().find_path(graph, start, end)
    }
}

impl fmt::Display for PathfinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathfinderKind {
    type Err = UnknownPathfinder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(PathfinderKind::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(PathfinderKind::AStar),
            _ => Err(UnknownPathfinder(s.to_string())),
        }
    }
}

impl TryFrom<usize> for PathfinderKind {
    type Error = UnknownPathfinder;

    /// Zero-based position in [`PathfinderKind::ALL`].
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| UnknownPathfinder(index.to_string()))
    }
}
