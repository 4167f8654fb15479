use std::collections::BinaryHeap;

use tactic_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef, SearchStats};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute a least-cost path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints), `Some(vec![from])`
    /// when the endpoints coincide, or `None` if either endpoint lies outside
    /// the range or no path exists.
    ///
    /// Frontier entries with equal `f` are popped in insertion order, so the
    /// result is deterministic for a given pather.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.stats = SearchStats::default();
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            g: 0.0,
            f: pather.estimate(from, to),
            seq,
        });
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper push for the same cell.
            let node = &self.nodes[ci];
            if node.generation != cur_gen || !node.open || current.g > node.g {
                self.stats.stale += 1;
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.stats.expanded += 1;
            let current_g = current.g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let step = pather.cost(current_point, np);
                debug_assert!(step > 0.0, "step cost {step} from {current_point} to {np}");
                let tentative_g = current_g + step;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                    if !n.open && n.parent != NO_PARENT {
                        self.stats.reopened += 1;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = f64::INFINITY;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative_g,
                    f: tentative_g + pather.estimate(np, to),
                    seq,
                });
                self.stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "astar {from} -> {to}: found={found} expanded={} pushed={} stale={} reopened={}",
            self.stats.expanded,
            self.stats.pushed,
            self.stats.stale,
            self.stats.reopened,
        );

        if !found {
            return None;
        }
        Some(self.reconstruct(goal_idx))
    }

    /// Walk predecessor links back from `goal_idx` to the start of the last
    /// search and return the positions in start-to-goal order.
    ///
    /// A node reached by the last search always has a chain ending at the
    /// start; the walk is still bounded by the node count.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT && path.len() <= self.nodes.len() {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
