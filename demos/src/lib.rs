//! Scenarios and reporting shared by the demo binaries.
//!
//! Demonstrates: hazard radiation, cover, obstacle walls, danger-aware
//! A* routing and route statistics.

use anyhow::ensure;
use rand::{RngExt, SeedableRng};
use tactic_core::{Point, manhattan};
use tactic_field::{FieldError, HazardField, PlannerConfig, Route, RoutePlanner};

/// Default cover intensity placed by scenarios.
pub const COVER: f64 = 0.8;

/// A field plus the endpoints to route between.
pub struct Scenario {
    pub name: String,
    pub field: HazardField,
    pub start: Point,
    pub goal: Point,
}

impl Scenario {
    /// The 15x10 demonstration map: a wall west of the start, cover spots
    /// and three overlapping hazards between start and goal.
    pub fn classic() -> Result<Self, FieldError> {
        let mut field = HazardField::new(15, 10)?;

        for p in [(3, 3), (3, 4), (7, 6), (7, 7), (11, 2), (11, 3)] {
            field.set_cover(p.into(), COVER);
        }
        for y in 2..=7 {
            field.set_obstacle(Point::new(2, y));
        }
        field.add_hazard(Point::new(8, 5), 3.0);
        field.add_hazard(Point::new(12, 7), 3.0);
        field.add_hazard(Point::new(12, 5), 6.0);

        Ok(Self {
            name: "classic".into(),
            field,
            start: Point::new(1, 1),
            goal: Point::new(10, 8),
        })
    }

    /// A seeded random skirmish map. The start is placed in the left third
    /// and the goal in the right third; neither is ever walled over.
    /// Radii are sampled as given, so check `params` with
    /// [`RandomParams::validate`] first.
    pub fn random(seed: u64, params: &RandomParams) -> Result<Self, FieldError> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let (w, h) = (params.width, params.height);
        let mut field = HazardField::new(w, h)?;

        let third = (w / 3).max(1);
        let start = Point::new(rng.random_range(0..third), rng.random_range(0..h));
        let goal = Point::new(
            rng.random_range((w - third).max(0)..w),
            rng.random_range(0..h),
        );

        // Vertical wall segments.
        for _ in 0..params.walls {
            let x = rng.random_range(0..w);
            let y0 = rng.random_range(0..h);
            let len = rng.random_range(1..=(h / 2).max(1));
            for y in y0..(y0 + len).min(h) {
                let p = Point::new(x, y);
                if p != start && p != goal {
                    field.set_obstacle(p);
                }
            }
        }

        for _ in 0..params.cover {
            let p = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            if field.passable(p) {
                field.set_cover(p, COVER);
            }
        }

        // Hazards keep some distance from the start so the agent is not
        // spawned inside a blast.
        let (lo, hi) = (
            params.min_radius.min(params.max_radius),
            params.min_radius.max(params.max_radius),
        );
        let mut placed = 0;
        let mut attempts = 0;
        while placed < params.hazards && attempts < 500 {
            attempts += 1;
            let p = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            if p == goal || manhattan(p, start) < 3 {
                continue;
            }
            field.add_hazard(p, rng.random_range(lo..=hi));
            placed += 1;
        }
        log::debug!("random scenario seed={seed}: {placed} hazards after {attempts} attempts");

        Ok(Self {
            name: format!("random-{seed}"),
            field,
            start,
            goal,
        })
    }
}

/// Knobs for [`Scenario::random`].
#[derive(Debug, Clone)]
pub struct RandomParams {
    pub width: i32,
    pub height: i32,
    pub walls: usize,
    pub cover: usize,
    pub hazards: usize,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl RandomParams {
    /// Reject hazard radii that cannot be sampled.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.min_radius.is_finite() && self.max_radius.is_finite(),
            "hazard radii must be finite numbers, got {} and {}",
            self.min_radius,
            self.max_radius
        );
        Ok(())
    }
}

impl Default for RandomParams {
    fn default() -> Self {
        Self {
            width: 30,
            height: 15,
            walls: 6,
            cover: 12,
            hazards: 4,
            min_radius: 2.0,
            max_radius: 5.0,
        }
    }
}

/// Outcome of routing a scenario.
pub struct Report {
    pub route: Route,
    pub total_cost: f64,
    pub danger_sum: f64,
    pub expanded: usize,
}

/// Plan a route through `scenario` with `config`.
pub fn run(scenario: &Scenario, config: PlannerConfig) -> Result<Report, FieldError> {
    let mut planner = RoutePlanner::new(config)?;
    let route = planner.find_route(&scenario.field, scenario.start, scenario.goal);
    let stats = planner.last_stats();
    log::info!(
        "{}: {} steps, {} nodes expanded ({} stale entries, {} re-opened)",
        scenario.name,
        route.len(),
        stats.expanded,
        stats.stale,
        stats.reopened,
    );
    Ok(Report {
        total_cost: route.total_cost(&scenario.field, &config.cost),
        danger_sum: route.danger_sum(&scenario.field),
        expanded: stats.expanded,
        route,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_has_a_route() {
        let s = Scenario::classic().unwrap();
        let report = run(&s, PlannerConfig::default()).unwrap();
        assert!(!report.route.is_empty());
        assert_eq!(report.route.steps().last(), Some(&s.goal));
        assert!(report.total_cost >= report.route.len() as f64 * 0.6);
    }

    #[test]
    fn random_is_reproducible() {
        let params = RandomParams::default();
        let a = Scenario::random(99, &params).unwrap();
        let b = Scenario::random(99, &params).unwrap();
        assert_eq!(a.field, b.field);
        assert_eq!((a.start, a.goal), (b.start, b.goal));
        assert!(a.field.passable(a.start));
        assert_eq!(
            run(&a, PlannerConfig::default()).unwrap().route,
            run(&b, PlannerConfig::default()).unwrap().route
        );
    }

    #[test]
    fn radii_must_be_finite() {
        assert!(RandomParams::default().validate().is_ok());
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = RandomParams {
                max_radius: bad,
                ..RandomParams::default()
            };
            assert!(params.validate().is_err());
        }
        let params = RandomParams {
            min_radius: f64::NAN,
            ..RandomParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn run_rejects_invalid_cost_model() {
        let s = Scenario::classic().unwrap();
        let mut config = PlannerConfig::default();
        config.cost.cover_discount = 1.5;
        assert!(run(&s, config).is_err());
    }

    #[test]
    fn random_rejects_bad_size() {
        let params = RandomParams {
            width: 0,
            ..RandomParams::default()
        };
        assert!(Scenario::random(1, &params).is_err());
    }
}
