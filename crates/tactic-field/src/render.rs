//! Plain-text rendering of a field, optionally with a route.
//!
//! Rows are printed top-down from `y = height - 1`, each symbol followed by a
//! space:
//!
//! | Symbol | Meaning |
//! |---|---|
//! | `S` / `G` | start / goal |
//! | `*` | route step |
//! | `X` `#` `B` | obstacle, cover, hazard source |
//! | `!` `o` `.` | severe, elevated, low danger |

use std::collections::HashSet;

use tactic_core::Point;

use crate::field::HazardField;
use crate::route::Route;

/// Markers drawn over the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub route: Option<&'a Route>,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

/// Render `field` with the markers in `overlay`.
pub fn render(field: &HazardField, overlay: Overlay<'_>) -> String {
    let on_route: HashSet<Point> = overlay
        .route
        .map(|r| r.iter().copied().collect())
        .unwrap_or_default();
    let (w, h) = (field.width() as usize, field.height() as usize);
    let mut out = String::with_capacity(w.saturating_mul(2).saturating_add(1).saturating_mul(h));
    for y in (0..field.height()).rev() {
        for x in 0..field.width() {
            let p = Point::new(x, y);
            let ch = if overlay.start == Some(p) {
                'S'
            } else if overlay.goal == Some(p) {
                'G'
            } else if on_route.contains(&p) {
                '*'
            } else {
                field.at(p).map_or(' ', |c| c.rune())
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_is_dots() {
        let f = HazardField::new(3, 2).unwrap();
        assert_eq!(render(&f, Overlay::default()), ". . . \n. . . \n");
    }

    #[test]
    fn wide_field_fills_every_row() {
        let f = HazardField::new(400, 3).unwrap();
        let text = render(&f, Overlay::default());
        assert_eq!(text.len(), (400 * 2 + 1) * 3);
        assert!(text.lines().all(|row| row.len() == 800));
    }

    #[test]
    fn symbols_and_orientation() {
        let mut f = HazardField::new(4, 2).unwrap();
        f.set_obstacle(Point::new(1, 0));
        f.set_cover(Point::new(2, 0), 0.8);
        f.add_hazard(Point::new(3, 1), 2.0);
        let route = Route::from(vec![Point::new(0, 1)]);
        let text = render(
            &f,
            Overlay {
                route: Some(&route),
                start: Some(Point::new(0, 0)),
                goal: Some(Point::new(2, 1)),
            },
        );
        // Top row is y = 1. (2, 1) is the goal even though it carries danger;
        // (3, 0) sits 1.0 from the hazard (danger 0.5).
        assert_eq!(text, "* . G B \nS X # o \n");
    }

    #[test]
    fn start_and_goal_win_over_route() {
        let f = HazardField::new(2, 1).unwrap();
        let route = Route::from(vec![Point::new(1, 0)]);
        let text = render(
            &f,
            Overlay {
                route: Some(&route),
                start: Some(Point::new(0, 0)),
                goal: Some(Point::new(1, 0)),
            },
        );
        assert_eq!(text, "S G \n");
    }
}
