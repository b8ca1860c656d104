//! Ordered collection of deployed ships belonging to one side.

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::placement::is_valid_placement;
use crate::ship::PlacedShip;

/// Ships in deployment order. No two ships overlap and every cell is on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<PlacedShip>,
}

/// What the remote decision service is told about each ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipSummary {
    pub id: &'static str,
    pub size: usize,
    pub sunk: bool,
}

impl Fleet {
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Append a ship after checking bounds, overlap and id uniqueness.
    pub fn add(&mut self, ship: PlacedShip) -> Result<(), BoardError> {
        if self.get(ship.id()).is_some() {
            return Err(BoardError::ShipAlreadyPlaced(ship.id()));
        }
        if !is_valid_placement(&ship.config(), ship.origin(), ship.orientation(), &self.ships) {
            let on_board = ship.origin().in_bounds() && ship.cells().all(|c| c.in_bounds());
            return if on_board {
                Err(BoardError::ShipOverlaps)
            } else {
                Err(BoardError::ShipOutOfBounds)
            };
        }
        self.ships.push(ship);
        Ok(())
    }

    pub(crate) fn push_unchecked(&mut self, ship: PlacedShip) {
        self.ships.push(ship);
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedShip> {
        self.ships.iter()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlacedShip> {
        self.ships.iter().find(|s| s.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut PlacedShip> {
        self.ships.iter_mut().find(|s| s.id() == id)
    }

    /// Returns `true` when every ship has taken as many hits as it has segments.
    pub fn is_destroyed(&self) -> bool {
        self.ships.iter().all(PlacedShip::is_sunk)
    }

    /// Number of ships still afloat.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Id, size and sunk flag per ship; positions and hit counts are withheld.
    pub fn summaries(&self) -> Vec<ShipSummary> {
        self.ships
            .iter()
            .map(|s| ShipSummary {
                id: s.id(),
                size: s.size(),
                sunk: s.is_sunk(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a PlacedShip;
    type IntoIter = core::slice::Iter<'a, PlacedShip>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}
