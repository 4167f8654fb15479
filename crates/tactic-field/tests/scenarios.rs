use tactic_core::{Point, manhattan};
use tactic_field::{
    CostModel, HazardField, PlannerConfig, Route, RoutePlanner, Terrain, find_route,
};

const EPS: f64 = 1e-9;

fn cost(field: &HazardField, route: &Route) -> f64 {
    route.total_cost(field, &CostModel::default())
}

fn assert_well_formed(field: &HazardField, start: Point, goal: Point, route: &Route) {
    let mut prev = start;
    for &p in route {
        assert_eq!(manhattan(prev, p), 1, "jump from {prev} to {p}");
        assert!(field.passable(p), "route enters obstacle at {p}");
        prev = p;
    }
    assert_eq!(prev, goal);
}

#[test]
fn open_field_matches_unweighted_shortest_path() {
    let field = HazardField::new(5, 5).unwrap();
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));
    let route = find_route(&field, start, goal);
    assert_eq!(route.len(), 8);
    assert!((cost(&field, &route) - 8.0).abs() < EPS);
    assert_well_formed(&field, start, goal, &route);
}

#[test]
fn hazard_at_center_is_avoided() {
    let mut field = HazardField::new(5, 5).unwrap();
    field.add_hazard(Point::new(2, 2), 3.0);
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));
    let route = find_route(&field, start, goal);
    assert_well_formed(&field, start, goal, &route);
    assert!(!route.contains(Point::new(2, 2)));
    let total = cost(&field, &route);
    assert!(total > 8.0);

    // Skirting the bottom and right edges is never beaten by anything worse.
    let edge: Route = vec![
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(3, 0),
        Point::new(4, 0),
        Point::new(4, 1),
        Point::new(4, 2),
        Point::new(4, 3),
        Point::new(4, 4),
    ]
    .into();
    assert!(total <= cost(&field, &edge) + EPS);
}

#[test]
fn solid_wall_leaves_no_route() {
    let mut field = HazardField::new(5, 5).unwrap();
    for y in 0..5 {
        field.set_obstacle(Point::new(2, y));
    }
    let route = find_route(&field, Point::new(0, 0), Point::new(4, 4));
    assert!(route.is_empty());
}

#[test]
fn gap_in_wall_is_used() {
    let mut field = HazardField::new(5, 5).unwrap();
    for y in 0..4 {
        field.set_obstacle(Point::new(2, y));
    }
    let (start, goal) = (Point::new(0, 0), Point::new(4, 0));
    let route = find_route(&field, start, goal);
    assert_well_formed(&field, start, goal, &route);
    assert!(route.contains(Point::new(2, 4)));
    assert_eq!(route.len(), 12);
}

#[test]
fn full_cover_corridor_costs_point_six_per_step() {
    let mut field = HazardField::new(6, 3).unwrap();
    for x in 0..6 {
        field.set_cover(Point::new(x, 0), 1.0);
    }
    let (start, goal) = (Point::new(0, 0), Point::new(5, 0));
    let route = find_route(&field, start, goal);
    assert_eq!(route.len(), 5);
    assert!((cost(&field, &route) - 0.6 * 5.0).abs() < EPS);
    assert!(route.iter().all(|&p| p.y == 0));
}

#[test]
fn start_is_goal() {
    let field = HazardField::new(4, 4).unwrap();
    let p = Point::new(2, 3);
    assert!(find_route(&field, p, p).is_empty());
}

#[test]
fn repeated_search_is_identical() {
    let mut field = HazardField::new(12, 9).unwrap();
    field.add_hazard(Point::new(6, 4), 4.0);
    field.add_hazard(Point::new(2, 7), 2.0);
    field.set_cover(Point::new(5, 1), 0.8);
    field.set_obstacle(Point::new(3, 3));
    let mut planner = RoutePlanner::default();
    let (start, goal) = (Point::new(0, 0), Point::new(11, 8));
    let a = planner.find_route(&field, start, goal);
    let b = planner.find_route(&field, start, goal);
    let c = find_route(&field, start, goal);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn cheaper_cover_path_reopens_expanded_cell() {
    // (1, 1) is first expanded via the open cell (1, 0) at cost 2.0, then
    // reached for 1.6 through the cover at (0, 1).
    let mut field = HazardField::new(5, 2).unwrap();
    field.set_cover(Point::new(0, 1), 1.0);
    field.set_cover(Point::new(2, 1), 1.0);
    field.set_obstacle(Point::new(3, 0));
    let (start, goal) = (Point::new(0, 0), Point::new(4, 0));

    let mut planner = RoutePlanner::default();
    let route = planner.find_route(&field, start, goal);
    assert_well_formed(&field, start, goal, &route);
    assert!(planner.last_stats().reopened > 0);
    assert!((cost(&field, &route) - 5.2).abs() < EPS);
    assert!((planner.last_cost(goal).unwrap() - 5.2).abs() < EPS);
    assert_eq!(route.steps()[..2], [Point::new(0, 1), Point::new(1, 1)]);

    let exact = RoutePlanner::new(PlannerConfig::admissible())
        .unwrap()
        .find_route(&field, start, goal);
    assert!((cost(&field, &exact) - cost(&field, &route)).abs() < EPS);
}

/// The 15x10 demonstration map: a wall, three hazards and scattered cover.
fn classic_field() -> HazardField {
    let mut field = HazardField::new(15, 10).unwrap();
    for p in [(3, 3), (3, 4), (7, 6), (7, 7), (11, 2), (11, 3)] {
        field.set_cover(p.into(), 0.8);
    }
    for y in 2..=7 {
        field.set_obstacle(Point::new(2, y));
    }
    field.add_hazard(Point::new(8, 5), 3.0);
    field.add_hazard(Point::new(12, 7), 3.0);
    field.add_hazard(Point::new(12, 5), 6.0);
    field
}

#[test]
fn classic_map_route() {
    let field = classic_field();
    let (start, goal) = (Point::new(1, 1), Point::new(10, 8));
    assert_eq!(field.at(Point::new(12, 5)).unwrap().terrain(), Terrain::HazardSource);

    let route = find_route(&field, start, goal);
    assert_well_formed(&field, start, goal, &route);
    assert!(route.len() >= manhattan(start, goal) as usize);
    assert!(!route.contains(Point::new(8, 5)));

    let admissible = RoutePlanner::new(PlannerConfig::admissible())
        .unwrap()
        .find_route(&field, start, goal);
    assert_well_formed(&field, start, goal, &admissible);
    assert!(cost(&field, &admissible) <= cost(&field, &route) + EPS);
}
