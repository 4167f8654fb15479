//! **tactic-core**: geometry primitives shared by the tactical routing crates.
//!
//! [`Point`] is the structured coordinate key used by every map in the
//! workspace; [`Range`] describes the rectangular extent of a field.

pub mod geom;

pub use geom::{Point, Range, RangeIter, manhattan};
