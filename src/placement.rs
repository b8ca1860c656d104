//! Placement rules for manual and random fleet deployment.

use log::debug;
use rand::Rng;

use crate::common::Coordinate;
use crate::config::{BOARD_SIZE, FLEET_PLACEMENT_ATTEMPTS, SHIPS, SHIP_PLACEMENT_ATTEMPTS};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::ship::{ship_coordinates, Orientation, PlacedShip, ShipConfig};

/// A complete fleet together with the grid it was stamped onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub grid: Grid,
    pub ships: Fleet,
}

/// Check that `ship` anchored at `origin` stays on the board and shares no
/// cell with `existing`. Occupancy is re-derived from each placed ship rather
/// than read from a grid, so this is safe to call before the grid is updated.
pub fn is_valid_placement(
    ship: &ShipConfig,
    origin: Coordinate,
    orientation: Orientation,
    existing: &[PlacedShip],
) -> bool {
    if !origin.in_bounds() {
        return false;
    }
    let cells = ship_coordinates(ship, origin, orientation);
    if !cells.iter().all(Coordinate::in_bounds) {
        return false;
    }
    !existing
        .iter()
        .any(|placed| placed.cells().any(|c| cells.contains(&c)))
}

/// Copy of `grid` with every cell of `ship` marked `ship` and tagged with its id.
/// The placement is not re-validated.
pub fn place_ship(grid: &Grid, ship: &PlacedShip) -> Grid {
    let mut next = grid.clone();
    for coord in ship.cells() {
        next.tag(coord, ship.id());
    }
    next
}

/// Deploy the canonical fleet at random.
pub fn random_placement<R: Rng + ?Sized>(rng: &mut R) -> Deployment {
    deploy_randomly(&SHIPS, rng)
}

/// Deploy every ship of `catalog` using uniform (x, y, orientation) draws.
///
/// Each ship gets a bounded number of draws and the whole fleet shares a
/// global budget. When either runs out the deployment starts over from an
/// empty board, so a partial fleet is never returned. The catalog must fit
/// on the board or this never returns.
pub fn deploy_randomly<R: Rng + ?Sized>(catalog: &[ShipConfig], rng: &mut R) -> Deployment {
    let mut restarts = 0usize;
    loop {
        if let Some(deployment) = try_deploy(catalog, rng) {
            if restarts > 0 {
                debug!("random deployment succeeded after {} restart(s)", restarts);
            }
            return deployment;
        }
        restarts += 1;
        debug!("random deployment locked out, restarting from an empty board");
    }
}

fn try_deploy<R: Rng + ?Sized>(catalog: &[ShipConfig], rng: &mut R) -> Option<Deployment> {
    let n = BOARD_SIZE as usize;
    let mut grid = Grid::new();
    let mut ships = Fleet::new();
    let mut attempts = 0usize;

    for template in catalog {
        let mut ship_attempts = 0usize;
        let mut placed = false;
        while !placed && attempts < FLEET_PLACEMENT_ATTEMPTS && ship_attempts < SHIP_PLACEMENT_ATTEMPTS {
            attempts += 1;
            ship_attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            if is_valid_placement(template, origin, orientation, ships.ships()) {
                let ship = PlacedShip::new(*template, origin, orientation);
                grid = place_ship(&grid, &ship);
                ships.push_unchecked(ship);
                placed = true;
            }
        }
        if !placed {
            return None;
        }
    }
    Some(Deployment { grid, ships })
}
