//! Tactical routing over hazard and cover fields.
//!
//! A [`HazardField`] holds per-cell terrain, danger and cover. Danger radiates
//! from hazard sources with a linear distance fade ([`hazard`]); the
//! [`CostModel`] turns a destination cell into a step cost; a
//! [`RoutePlanner`] runs a weighted A* over the field and returns a
//! [`Route`].
//!
//! ```
//! use tactic_core::Point;
//! use tactic_field::{HazardField, find_route};
//!
//! let mut field = HazardField::new(5, 5)?;
//! field.add_hazard(Point::new(2, 2), 3.0);
//! let route = find_route(&field, Point::new(0, 0), Point::new(4, 4));
//! assert_eq!(route.steps().last(), Some(&Point::new(4, 4)));
//! # Ok::<(), tactic_field::FieldError>(())
//! ```

pub mod cost;
pub mod error;
pub mod field;
pub mod hazard;
pub mod render;
pub mod route;
pub mod terrain;

pub use cost::{CostModel, HeuristicMode, PlannerConfig};
pub use error::FieldError;
pub use field::HazardField;
pub use render::{Overlay, render};
pub use route::{Route, RoutePlanner, find_route};
pub use terrain::{Cell, DangerBand, Terrain};
