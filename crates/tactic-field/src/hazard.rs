//! Danger radiation from hazard sources.
//!
//! Intensity fades linearly with Euclidean distance: `1 - d / r`, so the
//! source cell receives 1 and a cell exactly on the radius receives 0.
//! Contributions combine with the existing danger by taking the maximum.

use tactic_core::{Point, Range};

use crate::field::HazardField;

/// Fade intensity at `distance` from a source with the given `radius`, or
/// `None` if the point lies beyond the radius or the radius is not a
/// positive finite number.
pub fn fade(distance: f64, radius: f64) -> Option<f64> {
    if !(radius.is_finite() && radius > 0.0) || !(distance <= radius) {
        return None;
    }
    Some((1.0 - distance / radius).clamp(0.0, 1.0))
}

/// Combine an existing danger value with a new contribution.
#[inline]
pub fn combine(previous: f64, contribution: f64) -> f64 {
    previous.max(contribution)
}

/// Compute the danger a hazard at `source` would leave on `field`.
///
/// Returns `(position, new danger)` for every in-bounds cell within
/// `radius`, with the new danger already combined against the field's
/// current value. The field itself is not modified.
pub fn radiate(field: &HazardField, source: Point, radius: f64) -> Vec<(Point, f64)> {
    if fade(0.0, radius).is_none() {
        return Vec::new();
    }
    // Saturating float-to-int cast keeps huge radii representable.
    let reach = radius.floor() as i32;
    Range::around(source, reach)
        .intersect(field.bounds())
        .iter()
        .filter_map(|p| {
            let intensity = fade(p.distance(source), radius)?;
            let previous = field.danger(p);
            Some((p, combine(previous, intensity)))
        })
        .collect()
}
