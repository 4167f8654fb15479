//! The [`HazardField`] grid.
//!
//! Editing operations on positions outside the field are silent no-ops, so
//! scenario construction never fails on stray coordinates. Only the
//! dimensions are validated, once, at construction.

use tactic_core::{Point, Range};

use crate::error::FieldError;
use crate::hazard;
use crate::terrain::{Cell, Terrain};

/// A fixed-size grid of [`Cell`]s carrying terrain, danger and cover.
///
/// Every position inside [`bounds`](HazardField::bounds) has exactly one
/// cell; positions outside are never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HazardField {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl HazardField {
    /// Create an all-open field with no danger and no cover.
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        if width <= 0 || height <= 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(FieldError::TooLarge { width, height })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| FieldError::TooLarge { width, height })?;
        cells.extend(Range::new(0, 0, width, height).iter().map(Cell::open));
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The half-open rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the field.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| (p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// The cell at `p`, or `None` outside the field.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// Whether a route may enter `p`. False outside the field.
    pub fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::passable)
    }

    /// Danger at `p`, `0.0` outside the field.
    pub fn danger(&self, p: Point) -> f64 {
        self.at(p).map_or(0.0, Cell::danger)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Mark `p` as cover with the given intensity.
    ///
    /// Intensities outside `[0, 1]` are clamped (NaN becomes 0) and logged.
    pub fn set_cover(&mut self, p: Point, intensity: f64) {
        let intensity = unit_interval(intensity, "cover", p);
        if let Some(c) = self.at_mut(p) {
            c.terrain = Terrain::Cover;
            c.cover = intensity;
        }
    }

    /// Mark `p` as an impassable obstacle.
    pub fn set_obstacle(&mut self, p: Point) {
        if let Some(c) = self.at_mut(p) {
            c.terrain = Terrain::Obstacle;
        }
    }

    /// Place a hazard source at `p` and radiate danger out to `radius`.
    ///
    /// Each affected cell keeps the maximum of its previous danger and the
    /// new contribution, so overlapping hazards never lower danger. A radius
    /// that is not a positive finite number marks the source without
    /// radiating.
    pub fn add_hazard(&mut self, p: Point, radius: f64) {
        let Some(source) = self.at_mut(p) else {
            return;
        };
        source.terrain = Terrain::HazardSource;

        let updates = hazard::radiate(self, p, radius);
        log::debug!("hazard at {p} radius {radius}: {} cells updated", updates.len());
        for (q, danger) in updates {
            if let Some(c) = self.at_mut(q) {
                c.danger = danger;
            }
        }
    }
}

/// Clamp a caller-supplied intensity into `[0, 1]`, warning when it had to.
fn unit_interval(value: f64, what: &str, p: Point) -> f64 {
    if value.is_nan() {
        log::warn!("{what} intensity at {p} is NaN, using 0");
        return 0.0;
    }
    let clamped = value.clamp(0.0, 1.0);
    if clamped != value {
        log::warn!("{what} intensity {value} at {p} clamped to {clamped}");
    }
    clamped
}

impl<'a> IntoIterator for &'a HazardField {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
