//! Scattering of special terrain over a generated maze.

use labyrinth_core::{CellKind, Grid, Point};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::GenerationError;

/// Random probes per placement before falling back to a scan of the
/// remaining roads.
const MAX_PROBES: usize = 64;

/// Replace a share of the road squares of `grid` with special terrain.
///
/// `floor(roads * fraction)` squares are converted, divided evenly between
/// the kinds of [`CellKind::special`] (any remainder stays road). Each
/// placement lands on a uniformly random square that is still a plain road,
/// so walls are never touched and the maze stays connected. Returns the
/// number of squares converted.
pub fn distribute<R: Rng + ?Sized>(
    grid: &mut Grid,
    fraction: f64,
    rng: &mut R,
) -> Result<usize, GenerationError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(GenerationError::InvalidFraction(fraction));
    }

    let roads = grid.count(CellKind::Road);
    let kinds: Vec<CellKind> = CellKind::special().collect();
    if kinds.is_empty() {
        return Ok(0);
    }
    let target = (roads as f64 * fraction).floor() as usize;
    let per_kind = target / kinds.len();

    let mut placed = 0;
    'kinds: for kind in kinds {
        for _ in 0..per_kind {
            let Some(p) = pick_road(grid, roads - placed, rng) else {
                log::warn!("special: ran out of road squares after {placed} placements");
                break 'kinds;
            };
            grid.set(p, kind);
            placed += 1;
        }
    }

    log::debug!("special: converted {placed} of {roads} road squares");
    Ok(placed)
}

/// A uniformly random road square, given that `remaining` of them are left.
fn pick_road<R: Rng + ?Sized>(grid: &Grid, remaining: usize, rng: &mut R) -> Option<Point> {
    if remaining == 0 {
        return None;
    }
    for _ in 0..MAX_PROBES {
        let p = Point::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if grid.at(p) == Some(CellKind::Road) {
            return Some(p);
        }
    }
    grid.points_of(CellKind::Road).choose(rng).copied()
}
