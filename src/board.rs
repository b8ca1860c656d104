//! One side's waters: the true grid and the fleet deployed on it.

use rand::Rng;

use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::fleet::Fleet;
use crate::grid::{Grid, GridView};
use crate::placement::{is_valid_placement, place_ship, random_placement, Deployment};
use crate::ship::{Orientation, PlacedShip, ShipConfig};
use crate::shot::resolve_shot;

/// Grid and fleet kept mutually consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    fleet: Fleet,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            fleet: Fleet::new(),
        }
    }

    /// Board holding a randomly deployed canonical fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        random_placement(rng).into()
    }

    pub(crate) fn from_parts(grid: Grid, fleet: Fleet) -> Self {
        Self { grid, fleet }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn can_place(&self, ship: &ShipConfig, origin: Coordinate, orientation: Orientation) -> bool {
        self.fleet.get(ship.id()).is_none()
            && is_valid_placement(ship, origin, orientation, self.fleet.ships())
    }

    /// Place a single ship. The board is left untouched when the placement is rejected.
    pub fn place(
        &mut self,
        ship: ShipConfig,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let placed = PlacedShip::new(ship, origin, orientation);
        self.fleet.add(placed)?;
        self.grid = place_ship(&self.grid, &placed);
        Ok(())
    }

    /// Process a shot at `target`, marking hit/miss/sunk and reporting the outcome.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        resolve_shot(&mut self.grid, &mut self.fleet, target)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.is_destroyed()
    }

    pub fn view(&self, reveal: bool) -> GridView {
        self.grid.view(reveal)
    }
}

impl From<Deployment> for Board {
    fn from(d: Deployment) -> Self {
        Board {
            grid: d.grid,
            fleet: d.ships,
        }
    }
}
