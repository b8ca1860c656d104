//! Ship templates and placed ships.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Catalog entry: stable id, display name and segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipConfig {
    id: &'static str,
    name: &'static str,
    size: usize,
}

impl ShipConfig {
    pub const fn new(id: &'static str, name: &'static str, size: usize) -> Self {
        Self { id, name, size }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

fn derive_cells(
    size: usize,
    origin: Coordinate,
    orientation: Orientation,
) -> impl Iterator<Item = Coordinate> {
    (0..size).map(move |i| match orientation {
        Orientation::Horizontal => Coordinate::new(origin.x + i, origin.y),
        Orientation::Vertical => Coordinate::new(origin.x, origin.y + i),
    })
}

/// Cells a ship would occupy when anchored at `origin`. The cells are not
/// clipped to the board.
pub fn ship_coordinates(
    ship: &ShipConfig,
    origin: Coordinate,
    orientation: Orientation,
) -> Vec<Coordinate> {
    derive_cells(ship.size(), origin, orientation).collect()
}

/// A ship deployed on a board, with its damage counter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    config: ShipConfig,
    origin: Coordinate,
    orientation: Orientation,
    hits: usize,
}

impl PlacedShip {
    /// Anchor `config` at `origin`. Bounds and collisions are the validator's job.
    pub fn new(config: ShipConfig, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            config,
            origin,
            orientation,
            hits: 0,
        }
    }

    pub(crate) fn with_hits(mut self, hits: usize) -> Self {
        self.hits = hits.min(self.config.size());
        self
    }

    pub fn config(&self) -> ShipConfig {
        self.config
    }

    pub fn id(&self) -> &'static str {
        self.config.id()
    }

    pub fn name(&self) -> &'static str {
        self.config.name()
    }

    pub fn size(&self) -> usize {
        self.config.size()
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        derive_cells(self.config.size(), self.origin, self.orientation)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.config.size()
    }

    /// Count one more damaged segment. Returns `true` if this sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hits < self.config.size() {
            self.hits += 1;
        }
        self.is_sunk()
    }
}

impl fmt::Debug for PlacedShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlacedShip {{ id: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.config.id(),
            self.origin,
            self.orientation,
            self.hits,
            self.config.size(),
        )
    }
}
