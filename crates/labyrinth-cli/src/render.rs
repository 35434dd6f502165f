//! Text output: the maze with the route drawn over it, a legend and a
//! route summary.

use std::fmt::Write;

use labyrinth_core::{CellKind, Grid, Point};
use labyrinth_paths::Graph;
use rustc_hash::FxHashSet;

pub const START: char = 'A';
pub const END: char = 'B';
pub const ROUTE: char = 'o';

/// The maze, one line per `x`, with `path` and the endpoints overlaid.
pub fn maze(grid: &Grid, path: &[Point], endpoints: Option<(Point, Point)>) -> String {
    let on_path: FxHashSet<Point> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.bounds().len() + grid.width().max(0) as usize);
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let p = Point::new(x, y);
            let ch = match endpoints {
                Some((start, _)) if p == start => START,
                Some((_, end)) if p == end => END,
                _ if on_path.contains(&p) => ROUTE,
                _ => grid.at(p).map_or(' ', CellKind::symbol),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One line per cell kind with its symbol and cost, then the overlay marks.
pub fn legend() -> String {
    let mut out = String::from("Legend:\n");
    for kind in CellKind::ALL {
        let cost = match kind.cost() {
            Some(c) => format!("cost {c}"),
            None => "impassable".to_string(),
        };
        let _ = writeln!(out, "  {}  {} ({cost})", kind.symbol(), kind.name());
    }
    let _ = writeln!(out, "  {START}  start");
    let _ = writeln!(out, "  {END}  end");
    let _ = writeln!(out, "  {ROUTE}  route");
    out
}

/// The route's coordinates and total cost, or a note that there is none.
pub fn summary(graph: &Graph, path: &[Point]) -> String {
    let Some(cost) = graph.path_cost(path) else {
        return "Path not found.".to_string();
    };
    let steps: Vec<String> = path.iter().map(Point::to_string).collect();
    format!(
        "Path ({} steps, cost {cost}):\n{}",
        path.len() - 1,
        steps.join(" -> ")
    )
}
