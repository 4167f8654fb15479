use tactic_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append passable neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be finite and > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    ///
    /// An estimate that never overestimates (admissible) guarantees optimal
    /// paths. Overestimating heuristics are tolerated: improved nodes are
    /// re-opened, but optimality is then best-effort.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
