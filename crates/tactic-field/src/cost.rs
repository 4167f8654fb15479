//! Step costs and search heuristics.

use tactic_core::{Point, manhattan};

use crate::error::FieldError;
use crate::terrain::Cell;

/// Prices a move by the state of its destination cell:
///
/// ```text
/// step = base + danger * danger_weight - cover * cover_discount
/// ```
///
/// With the defaults an open cell costs 1, full danger costs 6 and full
/// cover with no danger costs 0.6.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub base: f64,
    pub danger_weight: f64,
    pub cover_discount: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base: 1.0,
            danger_weight: 5.0,
            cover_discount: 0.4,
        }
    }
}

impl CostModel {
    /// Cost of stepping into `cell`. Never called for obstacles: the
    /// planner filters them out before pricing.
    #[inline]
    pub fn step_cost(&self, cell: &Cell) -> f64 {
        debug_assert!(cell.passable(), "step cost asked for obstacle at {}", cell.pos());
        self.base + cell.danger() * self.danger_weight - cell.cover() * self.cover_discount
    }

    /// Lowest step cost any cell can have, with danger and cover in `[0, 1]`.
    pub fn min_step_cost(&self) -> f64 {
        self.base + self.danger_weight.min(0.0) - self.cover_discount.max(0.0)
    }

    /// Check that every passable cell has a finite, positive step cost.
    pub fn validate(&self) -> Result<(), FieldError> {
        let min_step = self.min_step_cost();
        let finite = [self.base, self.danger_weight, self.cover_discount]
            .iter()
            .all(|w| w.is_finite());
        if finite && min_step > 0.0 {
            Ok(())
        } else {
            Err(FieldError::InvalidCostModel { min_step })
        }
    }
}

/// Estimate of the remaining cost to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicMode {
    /// Plain Manhattan distance, assuming every step costs at least 1.
    /// Overestimates across covered cells, so routes through cover are
    /// best-effort rather than guaranteed optimal.
    #[default]
    Manhattan,
    /// Manhattan distance scaled by [`CostModel::min_step_cost`]; never
    /// overestimates, at the price of a wider search.
    ScaledManhattan,
}

impl HeuristicMode {
    pub fn estimate(self, model: &CostModel, from: Point, to: Point) -> f64 {
        let steps = f64::from(manhattan(from, to));
        match self {
            HeuristicMode::Manhattan => steps,
            HeuristicMode::ScaledManhattan => steps * model.min_step_cost().max(0.0),
        }
    }
}

/// Settings for a [`RoutePlanner`](crate::RoutePlanner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    pub cost: CostModel,
    pub heuristic: HeuristicMode,
}

impl PlannerConfig {
    /// Default costs with an admissible heuristic.
    pub fn admissible() -> Self {
        Self {
            heuristic: HeuristicMode::ScaledManhattan,
            ..Self::default()
        }
    }
}
