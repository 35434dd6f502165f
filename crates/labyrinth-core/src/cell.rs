//! The [`CellKind`] type: what occupies one square of a maze.

use std::fmt;

use thiserror::Error;

/// The kind of a single maze square.
///
/// A kind carries two attributes: a traversal [`cost`](Self::cost) and a
/// display [`symbol`](Self::symbol). Generation and pathfinding only look at
/// the cost, so a new variant needs nothing more than an entry in each match
/// below and in [`CellKind::ALL`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Impassable.
    #[default]
    Wall,
    /// Ordinary corridor.
    Road,
    /// Slow terrain.
    Swamp,
    /// Fast track.
    AcceleratedPath,
}

impl CellKind {
    /// Every kind, walls first.
    pub const ALL: [CellKind; 4] = [
        CellKind::Wall,
        CellKind::Road,
        CellKind::Swamp,
        CellKind::AcceleratedPath,
    ];

    /// Cost of stepping onto a square of this kind, or `None` for walls.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            CellKind::Wall => None,
            CellKind::Road => Some(2),
            CellKind::Swamp => Some(3),
            CellKind::AcceleratedPath => Some(1),
        }
    }

    /// Character used when the maze is printed.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Road => '.',
            CellKind::Swamp => '~',
            CellKind::AcceleratedPath => '>',
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Wall => "wall",
            CellKind::Road => "road",
            CellKind::Swamp => "swamp",
            CellKind::AcceleratedPath => "accelerated path",
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        self.cost().is_some()
    }

    /// Kinds that special-cell distribution may place: everything that is
    /// neither a wall nor a plain road.
    pub fn special() -> impl Iterator<Item = CellKind> {
        Self::ALL
            .into_iter()
            .filter(|k| !matches!(k, CellKind::Wall | CellKind::Road))
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a character that is no kind's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid cell symbol '{0}'")]
pub struct InvalidSymbol(pub char);

impl TryFrom<char> for CellKind {
    type Error = InvalidSymbol;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|k| k.symbol() == ch)
            .ok_or(InvalidSymbol(ch))
    }
}
