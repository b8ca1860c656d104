#![cfg(feature = "std")]

//! Flat, serializable form of a match and the validator guarding restores.

use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::Coordinate;
use crate::config::{ship_config, BOARD_SIZE, SHIPS};
use crate::fleet::Fleet;
use crate::game::{Match, Phase, Side};
use crate::grid::{CellStatus, Grid};
use crate::ship::{Orientation, PlacedShip};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRecord {
    pub id: String,
    pub name: String,
    pub size: usize,
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
    pub hits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub x: usize,
    pub y: usize,
    pub status: CellStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_id: Option<String>,
}

/// Complete match state in plain data. Only `playing` and `gameover`
/// matches are ever captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub turn: Side,
    pub winner: Option<Side>,
    pub human_ships: Vec<ShipRecord>,
    pub ai_ships: Vec<ShipRecord>,
    pub human_grid: Vec<Vec<CellRecord>>,
    pub ai_grid: Vec<Vec<CellRecord>>,
    /// Most recent entry first.
    pub log: Vec<String>,
}

/// Why a snapshot was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Setup progress is never restored.
    Phase,
    /// Grid is not N×N.
    GridShape,
    /// Cell claims a position other than where it is stored.
    CellPosition(Coordinate),
    UnknownShip(String),
    /// Ship does not match the catalog, leaves the board or overlaps another.
    ShipShape(String),
    /// Fleet is missing catalog ships.
    FleetIncomplete,
    /// Cell statuses disagree with ship records.
    Inconsistent(Coordinate),
    /// Phase, winner and fleet damage disagree.
    Winner,
    Json(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Phase => write!(f, "Setup-phase matches are not restorable"),
            SnapshotError::GridShape => write!(f, "Grid must be {}x{}", N, N),
            SnapshotError::CellPosition(c) => write!(f, "Cell stored at {} has wrong coordinates", c),
            SnapshotError::UnknownShip(id) => write!(f, "Unknown ship '{}'", id),
            SnapshotError::ShipShape(id) => write!(f, "Ship '{}' has an invalid shape or position", id),
            SnapshotError::FleetIncomplete => write!(f, "Fleet does not contain every catalog ship"),
            SnapshotError::Inconsistent(c) => write!(f, "Cell {} disagrees with the fleet", c),
            SnapshotError::Winner => write!(f, "Winner does not match the fleets"),
            SnapshotError::Json(e) => write!(f, "Malformed save: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl MatchSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Json(e.to_string()))
    }
}

fn ship_records(fleet: &Fleet) -> Vec<ShipRecord> {
    fleet
        .iter()
        .map(|s| ShipRecord {
            id: s.id().to_string(),
            name: s.name().to_string(),
            size: s.size(),
            x: s.origin().x,
            y: s.origin().y,
            orientation: s.orientation(),
            hits: s.hits(),
        })
        .collect()
}

fn cell_records(grid: &Grid) -> Vec<Vec<CellRecord>> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| CellRecord {
                    x: cell.x,
                    y: cell.y,
                    status: cell.status,
                    ship_id: cell.ship_id.map(str::to_string),
                })
                .collect()
        })
        .collect()
}

fn restore_fleet(records: &[ShipRecord]) -> Result<Fleet, SnapshotError> {
    let mut fleet = Fleet::new();
    for rec in records {
        let config = ship_config(&rec.id).ok_or_else(|| SnapshotError::UnknownShip(rec.id.clone()))?;
        if config.name() != rec.name || config.size() != rec.size || rec.hits > rec.size {
            return Err(SnapshotError::ShipShape(rec.id.clone()));
        }
        let ship = PlacedShip::new(config, Coordinate::new(rec.x, rec.y), rec.orientation)
            .with_hits(rec.hits);
        fleet
            .add(ship)
            .map_err(|_| SnapshotError::ShipShape(rec.id.clone()))?;
    }
    if fleet.len() != SHIPS.len() {
        return Err(SnapshotError::FleetIncomplete);
    }
    Ok(fleet)
}

fn restore_grid(rows: &[Vec<CellRecord>], fleet: &Fleet) -> Result<Grid, SnapshotError> {
    if rows.len() != N || rows.iter().any(|row| row.len() != N) {
        return Err(SnapshotError::GridShape);
    }
    let mut grid = Grid::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, rec) in row.iter().enumerate() {
            let coord = Coordinate::new(x, y);
            if rec.x != x || rec.y != y {
                return Err(SnapshotError::CellPosition(coord));
            }
            let owner = match &rec.ship_id {
                Some(id) => Some(
                    fleet
                        .get(id)
                        .filter(|s| s.contains(coord))
                        .ok_or(SnapshotError::Inconsistent(coord))?,
                ),
                None => None,
            };
            let tagged_status = matches!(rec.status, CellStatus::Ship | CellStatus::Hit | CellStatus::Sunk);
            if tagged_status != owner.is_some() {
                return Err(SnapshotError::Inconsistent(coord));
            }
            grid.set_cell(coord, rec.status, owner.map(|s| s.id()));
        }
    }
    Ok(grid)
}

/// Every ship cell must carry the ship's id, and its damage must match the hit counter.
fn check_damage(grid: &Grid, fleet: &Fleet) -> Result<(), SnapshotError> {
    for ship in fleet {
        let mut damaged = 0;
        for coord in ship.cells() {
            let cell = grid.get(coord).ok_or(SnapshotError::Inconsistent(coord))?;
            if cell.ship_id != Some(ship.id()) {
                return Err(SnapshotError::Inconsistent(coord));
            }
            match cell.status {
                CellStatus::Sunk if !ship.is_sunk() => return Err(SnapshotError::Inconsistent(coord)),
                CellStatus::Hit | CellStatus::Ship if ship.is_sunk() => {
                    return Err(SnapshotError::Inconsistent(coord))
                }
                CellStatus::Hit | CellStatus::Sunk => damaged += 1,
                _ => {}
            }
        }
        if damaged != ship.hits() {
            return Err(SnapshotError::Inconsistent(ship.origin()));
        }
    }
    Ok(())
}

fn restore_board(ships: &[ShipRecord], rows: &[Vec<CellRecord>]) -> Result<Board, SnapshotError> {
    let fleet = restore_fleet(ships)?;
    let grid = restore_grid(rows, &fleet)?;
    check_damage(&grid, &fleet)?;
    Ok(Board::from_parts(grid, fleet))
}

impl Match {
    /// Flat copy of the match; `None` during setup.
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        if self.phase() == Phase::Setup {
            return None;
        }
        let human = self.board(Side::Human);
        let ai = self.board(Side::Ai);
        Some(MatchSnapshot {
            phase: self.phase(),
            turn: self.turn(),
            winner: self.winner(),
            human_ships: ship_records(human.fleet()),
            ai_ships: ship_records(ai.fleet()),
            human_grid: cell_records(human.grid()),
            ai_grid: cell_records(ai.grid()),
            log: self.log().map(str::to_string).collect(),
        })
    }

    /// Rebuild a match from a snapshot, refusing anything structurally invalid.
    pub fn restore(snapshot: MatchSnapshot) -> Result<Match, SnapshotError> {
        if snapshot.phase == Phase::Setup {
            return Err(SnapshotError::Phase);
        }
        let human = restore_board(&snapshot.human_ships, &snapshot.human_grid)?;
        let ai = restore_board(&snapshot.ai_ships, &snapshot.ai_grid)?;

        // the winning shot never passes the turn
        let consistent = match (snapshot.phase, snapshot.winner) {
            (Phase::GameOver, Some(w)) if snapshot.turn != w => false,
            (Phase::GameOver, Some(Side::Human)) => ai.all_sunk() && !human.all_sunk(),
            (Phase::GameOver, Some(Side::Ai)) => human.all_sunk() && !ai.all_sunk(),
            (Phase::Playing, None) => !human.all_sunk() && !ai.all_sunk(),
            _ => false,
        };
        if !consistent {
            return Err(SnapshotError::Winner);
        }

        Ok(Match::from_parts(
            snapshot.phase,
            snapshot.turn,
            snapshot.winner,
            human,
            ai,
            VecDeque::from(snapshot.log),
        ))
    }
}

/// Restore a match from JSON, falling back to a fresh setup when the save is unusable.
pub fn restore_or_fresh(json: &str) -> Match {
    match MatchSnapshot::from_json(json).and_then(Match::restore) {
        Ok(game) => game,
        Err(e) => {
            warn!("discarding saved match: {}", e);
            Match::new()
        }
    }
}

/// JSON save file on disk.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the match if it is in play or finished. Returns whether anything was written.
    pub fn save(&self, game: &Match) -> anyhow::Result<bool> {
        let Some(snapshot) = game.snapshot() else {
            return Ok(false);
        };
        fs::write(&self.path, snapshot.to_json()?)?;
        Ok(true)
    }

    /// Load the saved match, or a fresh one when there is none or it is corrupt.
    pub fn load(&self) -> Match {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let game = restore_or_fresh(&json);
                if game.phase() != Phase::Setup {
                    info!("resumed match from {}", self.path.display());
                }
                game
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Match::new(),
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                Match::new()
            }
        }
    }

    /// Remove the save, if any.
    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
