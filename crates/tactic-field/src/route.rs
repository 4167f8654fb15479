//! Route planning over a [`HazardField`].

use tactic_core::Point;
use tactic_paths::{AstarPather, PathRange, Pather, SearchStats, WeightedPather};

use crate::cost::{CostModel, PlannerConfig};
use crate::error::FieldError;
use crate::field::HazardField;

/// An ordered sequence of positions from the step after the start up to and
/// including the goal.
///
/// An empty route means either that the goal is unreachable or that the
/// start already is the goal; [`RoutePlanner::find_route`] callers tell the
/// two apart by comparing the endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    steps: Vec<Point>,
}

impl Route {
    /// The empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.steps.contains(&p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    /// Sum of step costs along the route under `model`.
    ///
    /// Positions outside the field or on obstacles have no step cost and add
    /// nothing; planned routes never contain them.
    pub fn total_cost(&self, field: &HazardField, model: &CostModel) -> f64 {
        self.steps
            .iter()
            .filter_map(|&p| field.at(p))
            .filter(|c| c.passable())
            .map(|c| model.step_cost(c))
            .sum()
    }

    /// Sum of danger over the cells the route enters.
    pub fn danger_sum(&self, field: &HazardField) -> f64 {
        self.steps.iter().map(|&p| field.danger(p)).sum()
    }
}

impl From<Vec<Point>> for Route {
    fn from(steps: Vec<Point>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Field pather
// ---------------------------------------------------------------------------

/// Read-only view of a field through the pather traits: 4-connected moves
/// into passable cells, priced by the destination cell.
struct FieldPather<'a> {
    field: &'a HazardField,
    config: &'a PlannerConfig,
}

impl Pather for FieldPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.field.passable(n)),
        );
    }
}

impl WeightedPather for FieldPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> f64 {
        self.field
            .at(to)
            .map_or(f64::INFINITY, |c| self.config.cost.step_cost(c))
    }
}

impl AstarPather for FieldPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.config.heuristic.estimate(&self.config.cost, from, to)
    }
}

// ---------------------------------------------------------------------------
// RoutePlanner
// ---------------------------------------------------------------------------

/// Finds least-cost routes across hazard fields.
///
/// The planner keeps its search storage between calls; each call is still an
/// independent search and never modifies the field.
pub struct RoutePlanner {
    config: PlannerConfig,
    paths: PathRange,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self {
            config: PlannerConfig::default(),
            paths: PathRange::new(Default::default()),
        }
    }
}

impl RoutePlanner {
    /// Create a planner, rejecting cost models that could price a step at
    /// zero or less.
    pub fn new(config: PlannerConfig) -> Result<Self, FieldError> {
        config.cost.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Counters for the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.paths.stats()
    }

    /// Cost-so-far of `p` in the most recent search, if it was reached.
    pub fn last_cost(&self, p: Point) -> Option<f64> {
        self.paths.last_cost(p)
    }

    /// Find a least-cost route from `start` to `goal`.
    ///
    /// Returns an empty route when the goal cannot be reached (including
    /// endpoints outside the field or a goal on an obstacle) and when
    /// `start == goal`.
    pub fn find_route(&mut self, field: &HazardField, start: Point, goal: Point) -> Route {
        if self.paths.range() != field.bounds() {
            self.paths.set_range(field.bounds());
        }
        let pather = FieldPather {
            field,
            config: &self.config,
        };
        match self.paths.astar_path(&pather, start, goal) {
            Some(path) => Route::from(path.into_iter().skip(1).collect::<Vec<_>>()),
            None => {
                log::debug!("no route from {start} to {goal}");
                Route::empty()
            }
        }
    }
}

/// Find a route with the default cost model and heuristic.
pub fn find_route(field: &HazardField, start: Point, goal: Point) -> Route {
    RoutePlanner::default().find_route(field, start, goal)
}
