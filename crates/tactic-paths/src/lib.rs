//! Weighted shortest-path search for grid maps.
//!
//! The search works on any grid described through the pather traits and
//! uses real-valued (`f64`) step costs, so terrain can be priced by
//! continuous fields such as danger or cover.
//!
//! All searches go through [`PathRange`], which owns and reuses the per-cell
//! node storage so that repeated queries allocate only their frontier.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod pathrange;
mod traits;

pub use pathrange::{PathRange, SearchStats};
pub use tactic_core::manhattan;
pub use traits::{AstarPather, Pather, WeightedPather};
