//! Shot resolution: damage, sinking and fleet defeat in one step.

use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::fleet::Fleet;
use crate::grid::{CellStatus, Grid};

/// Fire at `target`, updating `grid` and `fleet` together.
///
/// A cell can be fired upon once. Out-of-bounds targets, resolved cells and
/// cells tagged with a ship the fleet does not contain are rejected before
/// anything is written. When the last segment of a ship is hit every cell of
/// that ship turns `sunk` before this returns, and the fleet check runs in the
/// same step so defeat is reported by the shot that causes it.
pub fn resolve_shot(
    grid: &mut Grid,
    fleet: &mut Fleet,
    target: Coordinate,
) -> Result<ShotOutcome, BoardError> {
    let cell = *grid.get(target).ok_or(BoardError::OutOfBounds(target))?;
    if !cell.status.is_unfired() {
        return Err(BoardError::AlreadyFired(target));
    }
    if cell.status != CellStatus::Ship {
        grid.set_status(target, CellStatus::Miss);
        return Ok(ShotOutcome::Miss);
    }

    let ship = cell
        .ship_id
        .and_then(|id| fleet.get_mut(id))
        .ok_or(BoardError::UnknownShip(target))?;
    grid.set_status(target, CellStatus::Hit);
    if !ship.register_hit() {
        return Ok(ShotOutcome::Hit);
    }

    let sunk = *ship;
    for coord in sunk.cells() {
        grid.set_status(coord, CellStatus::Sunk);
    }
    if fleet.is_destroyed() {
        Ok(ShotOutcome::FleetDestroyed(sunk.name()))
    } else {
        Ok(ShotOutcome::Sunk(sunk.name()))
    }
}
