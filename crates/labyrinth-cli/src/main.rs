//! labyrinth: generate a maze, optionally scatter special terrain over it,
//! and print the cheapest route between two squares.

mod logging;
mod render;

use std::io::Write;

use clap::Parser;
use labyrinth_core::{Grid, Point};
use labyrinth_gen::{GeneratorKind, distribute};
use labyrinth_paths::{Graph, PathfinderKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows (x extent)
    #[arg(long, env = "LABYRINTH_WIDTH", default_value_t = 21)]
    width: i32,

    /// Number of columns (y extent)
    #[arg(long, env = "LABYRINTH_HEIGHT", default_value_t = 41)]
    height: i32,

    /// prim, kruskal or backtracker
    #[arg(short, long, env = "LABYRINTH_GENERATOR", default_value = "prim")]
    generator: GeneratorKind,

    /// Fraction of road squares to turn into special terrain, in [0, 1]
    #[arg(short, long, env = "LABYRINTH_SPECIAL")]
    special: Option<f64>,

    /// Route start as `x,y`; defaults to the first open square
    #[arg(long, env = "LABYRINTH_START")]
    start: Option<Point>,

    /// Route end as `x,y`; defaults to the last open square
    #[arg(long, env = "LABYRINTH_END")]
    end: Option<Point>,

    /// dijkstra or astar
    #[arg(short, long, env = "LABYRINTH_PATHFINDER", default_value = "dijkstra")]
    pathfinder: PathfinderKind,

    /// Seed for a reproducible maze
    #[arg(long, env = "LABYRINTH_SEED")]
    seed: Option<u64>,

    /// More output on stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{what} {point} lies outside the {width}x{height} maze")]
    OutOfBounds {
        what: &'static str,
        point: Point,
        width: i32,
        height: i32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    match args.seed {
        Some(seed) => run(&args, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => run(&args, &mut rand::rng()),
    }
}

fn run<R: Rng + ?Sized>(args: &Args, rng: &mut R) -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = args.generator.generate(args.width, args.height, rng)?;
    if let Some(fraction) = args.special {
        distribute(&mut grid, fraction, rng)?;
    }

    let graph = Graph::build(&grid);
    let endpoints = endpoints(&grid, args.start, args.end)?;
    let path = match endpoints {
        Some((start, end)) => args.pathfinder.find_path(&graph, start, end),
        None => {
            log::warn!("maze has no open squares to route between");
            Vec::new()
        }
    };
    log::info!(
        "{} over {} nodes: {} squares in route",
        args.pathfinder,
        graph.len(),
        path.len()
    );

    let mut out = std::io::stdout().lock();
    write!(out, "{}", render::maze(&grid, &path, endpoints))?;
    writeln!(out)?;
    write!(out, "{}", render::legend())?;
    writeln!(out)?;
    writeln!(out, "{}", render::summary(&graph, &path))?;
    Ok(())
}

/// Resolve the route endpoints. Omitted ones default to the first and last
/// open squares; `None` if the maze has no open square at all.
fn endpoints(
    grid: &Grid,
    start: Option<Point>,
    end: Option<Point>,
) -> Result<Option<(Point, Point)>, CliError> {
    for (what, p) in [("start", start), ("end", end)] {
        if let Some(point) = p.filter(|&p| !grid.contains(p)) {
            return Err(CliError::OutOfBounds {
                what,
                point,
                width: grid.width(),
                height: grid.height(),
            });
        }
    }

    let mut open = grid
        .iter()
        .filter(|&(_, kind)| kind.is_passable())
        .map(|(p, _)| p);
    let first = open.next();
    let last = open.last().or(first);

    Ok(match (start.or(first), end.or(last)) {
        (Some(s), Some(e)) => Some((s, e)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_selectors_and_points() {
        let args = Args::try_parse_from([
            "labyrinth",
            "--generator",
            "kruskal",
            "--pathfinder",
            "a*",
            "--start",
            "1,1",
            "--end",
            "(9, 19)",
            "--seed",
            "7",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.generator, GeneratorKind::Kruskal);
        assert_eq!(args.pathfinder, PathfinderKind::AStar);
        assert_eq!(args.start, Some(Point::new(1, 1)));
        assert_eq!(args.end, Some(Point::new(9, 19)));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_generator() {
        assert!(Args::try_parse_from(["labyrinth", "-g", "eller"]).is_err());
        assert!(Args::try_parse_from(["labyrinth", "--start", "3"]).is_err());
    }

    #[test]
    fn default_endpoints_are_first_and_last_open_squares() {
        let grid: Grid = "
            #####
            #...#
            ###.#
            #...#
            #####
        "
        .parse()
        .unwrap();
        assert_eq!(
            endpoints(&grid, None, None).unwrap(),
            Some((Point::new(1, 1), Point::new(3, 3)))
        );
        assert_eq!(
            endpoints(&grid, Some(Point::new(3, 1)), None).unwrap(),
            Some((Point::new(3, 1), Point::new(3, 3)))
        );
        assert_eq!(endpoints(&Grid::new(3, 3), None, None).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_endpoint_is_an_error() {
        let grid = Grid::new(3, 3);
        let err = endpoints(&grid, None, Some(Point::new(3, 0))).unwrap_err();
        assert_eq!(err.to_string(), "end (3, 0) lies outside the 3x3 maze");
    }
}
