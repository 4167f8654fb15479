use tactic_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search state, valid only while `generation` matches the
/// current search.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Immutable frontier entry: a snapshot of a node at the time it was pushed.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest `f` first,
/// and among equal `f` the entry pushed earliest.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

/// Counters describing the work done by the last search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier entries popped and expanded.
    pub expanded: usize,
    /// Frontier entries pushed, including the start.
    pub pushed: usize,
    /// Popped entries skipped because a cheaper cost was already recorded.
    pub stale: usize,
    /// Pushes that put an already expanded node back on the frontier
    /// because a cheaper way to reach it was found.
    pub reopened: usize,
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a grid rectangle.
///
/// `PathRange` owns the per-cell node array (best-known cost, predecessor
/// link, open flag). A generation counter lazily invalidates the array at
/// the start of every search, so each search starts logically fresh
/// without clearing memory.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating the node array only when
    /// the new range does not fit in the current capacity.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.stats = SearchStats::default();

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters for the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best-known cost-so-far recorded for `p` by the most recent search,
    /// or `None` if the search never reached it.
    pub fn last_cost(&self, p: Point) -> Option<f64> {
        let i = self.idx(p)?;
        let n = &self.nodes[i];
        (n.generation == self.generation && n.g.is_finite()).then_some(n.g)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, g: 0.0, f: 3.0, seq: 0 });
        heap.push(NodeRef { idx: 1, g: 0.0, f: 1.5, seq: 1 });
        heap.push(NodeRef { idx: 2, g: 0.0, f: 1.5, seq: 2 });
        heap.push(NodeRef { idx: 3, g: 0.0, f: 0.5, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn index_round_trip_with_offset_origin() {
        let pr = PathRange::new(Range::new(-2, 3, 5, 7));
        for p in pr.range() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(5, 3)), None);
        assert_eq!(pr.idx(Point::new(-3, 3)), None);
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut pr = PathRange::new(Range::new(0, 0, 20, 20));
        let cap_before = pr.nodes.len();

        let small = Range::new(0, 0, 5, 5);
        pr.set_range(small);
        assert_eq!(pr.range(), small);
        assert_eq!(pr.nodes.len(), cap_before);
        assert_eq!(pr.width, 5);
        assert_eq!(pr.generation, 1);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut pr = PathRange::new(Range::new(0, 0, 5, 5));
        pr.set_range(Range::new(0, 0, 20, 20));
        assert_eq!(pr.nodes.len(), 400);
        assert_eq!(pr.generation, 0);
    }

    #[test]
    fn last_cost_before_any_search_is_none() {
        let pr = PathRange::new(Range::new(0, 0, 3, 3));
        assert_eq!(pr.last_cost(Point::new(1, 1)), None);
        assert_eq!(pr.last_cost(Point::new(9, 9)), None);
    }
}
