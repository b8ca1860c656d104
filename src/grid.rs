//! Cell matrix owned by one side, plus the read-only projection shown to players.

use crate::common::Coordinate;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// Status of a single cell on the true grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellStatus {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl CellStatus {
    /// `true` while the cell may still be fired upon.
    pub fn is_unfired(self) -> bool {
        matches!(self, CellStatus::Empty | CellStatus::Ship)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub status: CellStatus,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub ship_id: Option<&'static str>,
}

impl Cell {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// N×N matrix of cells, stored row-major (`cells[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Grid {
    cells: [[Cell; N]; N],
}

/// Fresh grid with every cell `empty` and untagged.
pub fn create_empty_grid() -> Grid {
    Grid::new()
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        let cells = core::array::from_fn(|y| {
            core::array::from_fn(|x| Cell {
                x,
                y,
                status: CellStatus::Empty,
                ship_id: None,
            })
        });
        Grid { cells }
    }

    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get(coord.y)?.get(coord.x)
    }

    pub fn status(&self, coord: Coordinate) -> Option<CellStatus> {
        self.get(coord).map(|c| c.status)
    }

    /// In bounds and not yet fired upon.
    pub fn is_unfired(&self, coord: Coordinate) -> bool {
        self.status(coord).is_some_and(CellStatus::is_unfired)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; N]> {
        self.cells.iter()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    pub fn count(&self, status: CellStatus) -> usize {
        self.cells().filter(|c| c.status == status).count()
    }

    /// Number of shots this grid has absorbed.
    pub fn shots_received(&self) -> usize {
        self.cells().filter(|c| !c.status.is_unfired()).count()
    }

    pub(crate) fn set_status(&mut self, coord: Coordinate, status: CellStatus) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.status = status;
        }
    }

    pub(crate) fn tag(&mut self, coord: Coordinate, ship_id: &'static str) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.status = CellStatus::Ship;
            cell.ship_id = Some(ship_id);
        }
    }

    pub(crate) fn set_cell(&mut self, coord: Coordinate, status: CellStatus, ship_id: Option<&'static str>) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.status = status;
            cell.ship_id = ship_id;
        }
    }

    fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.cells.get_mut(coord.y)?.get_mut(coord.x)
    }

    /// Projection for display. With `reveal == false` undiscovered ship
    /// segments are indistinguishable from open water.
    pub fn view(&self, reveal: bool) -> GridView {
        let cells = core::array::from_fn(|y| {
            core::array::from_fn(|x| match self.cells[y][x].status {
                CellStatus::Empty if reveal => VisibleCell::Water,
                CellStatus::Ship if reveal => VisibleCell::Ship,
                CellStatus::Empty | CellStatus::Ship => VisibleCell::Unknown,
                CellStatus::Hit => VisibleCell::Hit,
                CellStatus::Miss => VisibleCell::Miss,
                CellStatus::Sunk => VisibleCell::Sunk,
            })
        });
        GridView { cells, revealed: reveal }
    }
}

/// What a player is allowed to see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleCell {
    Unknown,
    Water,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl VisibleCell {
    pub fn symbol(self) -> char {
        match self {
            VisibleCell::Unknown | VisibleCell::Water => '.',
            VisibleCell::Ship => 'S',
            VisibleCell::Hit => 'X',
            VisibleCell::Miss => 'o',
            VisibleCell::Sunk => '#',
        }
    }
}

/// Derived, read-only projection of a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    cells: [[VisibleCell; N]; N],
    revealed: bool,
}

impl GridView {
    pub fn get(&self, coord: Coordinate) -> Option<VisibleCell> {
        self.cells.get(coord.y)?.get(coord.x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[VisibleCell; N]> {
        self.cells.iter()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
