//! **labyrinth-core**: the data model shared by maze generation and
//! pathfinding. Geometry primitives, cell kinds and the owned maze grid.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{CellKind, InvalidSymbol};
pub use geom::{ParsePointError, Point, Range};
pub use grid::{Grid, ParseGridError};
