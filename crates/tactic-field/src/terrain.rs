//! Terrain classes and per-cell state.

use tactic_core::Point;

/// Discrete classification of a field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open,
    Cover,
    Obstacle,
    HazardSource,
}

impl Terrain {
    /// Whether a route may enter a cell of this terrain.
    pub fn passable(self) -> bool {
        self != Terrain::Obstacle
    }

    /// Map symbol, or `None` when the cell should be drawn by danger band.
    pub fn rune(self) -> Option<char> {
        match self {
            Terrain::Obstacle => Some('X'),
            Terrain::Cover => Some('#'),
            Terrain::HazardSource => Some('B'),
            Terrain::Open => None,
        }
    }
}

/// Coarse danger classification used by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DangerBand {
    /// Danger of at most 0.3.
    Safe,
    /// Danger above 0.3 and at most 0.7.
    Elevated,
    /// Danger above 0.7.
    Severe,
}

impl DangerBand {
    pub const ELEVATED_ABOVE: f64 = 0.3;
    pub const SEVERE_ABOVE: f64 = 0.7;

    /// Classify a danger value.
    pub fn of(danger: f64) -> Self {
        if danger > Self::SEVERE_ABOVE {
            DangerBand::Severe
        } else if danger > Self::ELEVATED_ABOVE {
            DangerBand::Elevated
        } else {
            DangerBand::Safe
        }
    }

    pub fn rune(self) -> char {
        match self {
            DangerBand::Severe => '!',
            DangerBand::Elevated => 'o',
            DangerBand::Safe => '.',
        }
    }
}

/// One grid position's terrain, danger and cover.
///
/// Cells are owned by a [`HazardField`](crate::HazardField) and only change
/// through its editing operations, which keep `danger` and `cover` inside
/// `[0, 1]`. The position is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) terrain: Terrain,
    pub(crate) danger: f64,
    pub(crate) cover: f64,
    pub(crate) pos: Point,
}

impl Cell {
    /// A fresh open cell with no danger and no cover.
    pub(crate) const fn open(pos: Point) -> Self {
        Self {
            terrain: Terrain::Open,
            danger: 0.0,
            cover: 0.0,
            pos,
        }
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Hazard exposure in `[0, 1]`.
    #[inline]
    pub fn danger(&self) -> f64 {
        self.danger
    }

    /// Protective cover in `[0, 1]`.
    #[inline]
    pub fn cover(&self) -> f64 {
        self.cover
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn passable(&self) -> bool {
        self.terrain.passable()
    }

    #[inline]
    pub fn danger_band(&self) -> DangerBand {
        DangerBand::of(self.danger)
    }

    /// Map symbol: terrain rune if it has one, else the danger band rune.
    pub fn rune(&self) -> char {
        self.terrain
            .rune()
            .unwrap_or_else(|| self.danger_band().rune())
    }
}
