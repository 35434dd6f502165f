use labyrinth_core::Point;
use rustc_hash::FxHashMap;

/// Open-list entry, ordered for use in a `BinaryHeap` (a max-heap).
///
/// Lower `f` pops first. Among equal `f`, the entry with the larger `g`
/// (closer to the goal) pops first, then the smaller point, so searches are
/// deterministic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) g: i32,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk backpointers from `end` to `start` and return the route in order.
///
/// Returns an empty path if the chain is broken.
pub(crate) fn reconstruct(
    previous: &FxHashMap<Point, Point>,
    start: Point,
    end: Point,
) -> Vec<Point> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => {
                log::error!("broken backpointer chain at {current} while rebuilding path to {end}");
                return Vec::new();
            }
        }
    }
    path.reverse();
    path
}
