//! Selection of a generation algorithm by name or menu index.

use std::fmt;
use std::str::FromStr;

use labyrinth_core::{CellKind, Grid};
use rand::Rng;

use crate::{Backtracker, GenerationError, Kruskal, MazeGenerator, Prim};

/// The available maze generators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    #[default]
    Prim,
    Kruskal,
    RecursiveBacktracker,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Prim,
        GeneratorKind::Kruskal,
        GeneratorKind::RecursiveBacktracker,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            GeneratorKind::Prim => "prim",
            GeneratorKind::Kruskal => "kruskal",
            GeneratorKind::RecursiveBacktracker => "backtracker",
        }
    }

    /// Generate a `width` x `height` maze with this algorithm.
    ///
    /// Both dimensions must be at least 1.
    pub fn generate<R: Rng + ?Sized>(
        self,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<Grid, GenerationError> {
        if width < 1 || height < 1 {
            return Err(GenerationError::InvalidSize { width, height });
        }
        let grid = match self {
            GeneratorKind::Prim => Prim.generate(width, height, rng),
            GeneratorKind::Kruskal => Kruskal.generate(width, height, rng),
            GeneratorKind::RecursiveBacktracker => Backtracker.generate(width, height, rng),
        };
        log::debug!(
            "{self}: generated {width}x{height} maze with {} open squares",
            grid.count(CellKind::Road)
        );
        Ok(grid)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prim" => Ok(GeneratorKind::Prim),
            "kruskal" => Ok(GeneratorKind::Kruskal),
            "backtracker" | "recursive-backtracker" | "dfs" => {
                Ok(GeneratorKind::RecursiveBacktracker)
            }
            _ => Err(GenerationError::UnknownGenerator(s.to_string())),
        }
    }
}

impl TryFrom<usize> for GeneratorKind {
    type Error = GenerationError;

    /// Zero-based position in [`GeneratorKind::ALL`].
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| GenerationError::UnknownGenerator(index.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use labyrinth_core::Point;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::testutil::assert_spanning_tree;

    #[test]
    fn parse_names() {
        assert_eq!("Kruskal".parse(), Ok(GeneratorKind::Kruskal));
        assert_eq!("dfs".parse(), Ok(GeneratorKind::RecursiveBacktracker));
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
        assert_eq!(
            "eller".parse::<GeneratorKind>(),
            Err(GenerationError::UnknownGenerator("eller".to_string()))
        );
    }

    #[test]
    fn menu_index() {
        assert_eq!(GeneratorKind::try_from(0), Ok(GeneratorKind::Prim));
        assert_eq!(
            GeneratorKind::try_from(2),
            Ok(GeneratorKind::RecursiveBacktracker)
        );
        assert!(GeneratorKind::try_from(3).is_err());
    }

    #[test]
    fn rejects_empty_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for kind in GeneratorKind::ALL {
            assert_eq!(
                kind.generate(0, 5, &mut rng),
                Err(GenerationError::InvalidSize {
                    width: 0,
                    height: 5
                })
            );
            assert!(kind.generate(5, -1, &mut rng).is_err());
        }
    }

    #[test]
    fn every_kind_fills_the_requested_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for kind in GeneratorKind::ALL {
            for (w, h) in [(1, 1), (1, 6), (2, 2), (7, 4), (16, 16), (25, 13)] {
                let grid = kind.generate(w, h, &mut rng).unwrap();
                assert_eq!(grid.size(), Point::new(w, h), "{kind} {w}x{h}");
                assert_spanning_tree(&grid);
            }
        }
    }
}
